#![deny(missing_docs)]
#![doc = "Builds symbol decks where every pair of cards shares exactly one symbol."]

/// YAML configuration for generation and layout.
pub mod config;
/// Cards, decks and occurrence statistics.
pub mod deck;
/// Structured data-integrity findings.
pub mod diagnostics;
/// Serialization routines for exported deck documents.
pub mod document;
/// Pipeline entry point.
pub mod generate;
/// Canonical hashing of pools and decks.
pub mod hash;
/// Geometric placement of cards and symbols on pages.
pub mod layout;
/// Point index to symbol translation.
pub mod mapper;
/// Symbol pool construction.
pub mod pool;
/// Pairwise consistency checks.
pub mod verify;

pub use config::DeckConfig;
pub use deck::{Card, Deck, DeckStats};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticReport};
pub use document::{from_bytes, from_json, to_bytes, to_json, DeckDocument};
pub use generate::{generate_deck, GeneratedDeck};
pub use hash::{canonical_deck_hash, canonical_pool_hash};
pub use layout::{layout_deck, CardPlacement, DeckLayout, LayoutConfig, SymbolPlacement};
pub use mapper::map_symbols;
pub use pool::SymbolPool;
pub use verify::{verify_deck, verify_membership, verify_pairs};
