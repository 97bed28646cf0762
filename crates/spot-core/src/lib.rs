#![deny(missing_docs)]
#![doc = "Core error and provenance types shared by the spot deck crates."]

pub mod errors;
pub mod provenance;

pub use errors::{ErrorInfo, SpotError};
pub use provenance::{DeckProvenance, SchemaVersion};

/// Schema version stamped on every exported deck document.
pub const DECK_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);
