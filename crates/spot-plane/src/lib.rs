#![deny(missing_docs)]
#![doc = "Incidence structure of the projective plane PG(2,n) for the small prime orders used by spot decks."]

/// Modular arithmetic over the prime field of a plane order.
pub mod field;
/// Coefficient canonicalization and line enumeration.
pub mod line;
/// Supported plane orders and the selection policy.
pub mod order;
/// Homogeneous point space construction.
pub mod point;

mod plane;

pub use field::mod_inverse;
pub use line::{canonicalize, enumerate_lines, Line, LineCoefficients};
pub use order::{select_order, PlaneOrder, SUPPORTED_ORDERS};
pub use plane::ProjectivePlane;
pub use point::{point_space, Point, PointKind, PointSpace};
