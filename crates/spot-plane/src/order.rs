use std::fmt;

use serde::{Deserialize, Serialize};
use spot_core::{ErrorInfo, SpotError};

/// Prime order of a supported projective plane.
///
/// The set of orders is closed: values can only be obtained from
/// [`SUPPORTED_ORDERS`], [`PlaneOrder::from_prime`] or [`select_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlaneOrder(u32);

/// Supported orders in ascending order of plane size.
pub const SUPPORTED_ORDERS: [PlaneOrder; 4] = [
    PlaneOrder(2),
    PlaneOrder(3),
    PlaneOrder(5),
    PlaneOrder(7),
];

impl PlaneOrder {
    /// Returns the order for `n` when it belongs to the supported table.
    pub fn from_prime(n: u32) -> Option<Self> {
        SUPPORTED_ORDERS.iter().copied().find(|order| order.0 == n)
    }

    /// Returns the field modulus `n`.
    pub fn n(&self) -> u32 {
        self.0
    }

    /// Number of points, lines, cards and consumed symbols: `n² + n + 1`.
    pub fn plane_size(&self) -> usize {
        let n = self.0 as usize;
        n * n + n + 1
    }

    /// Number of points on each line, which is the symbol count of each card.
    pub fn symbols_per_card(&self) -> usize {
        self.0 as usize + 1
    }

    /// Smallest plane size any supported order can produce.
    pub fn minimum_plane_size() -> usize {
        SUPPORTED_ORDERS[0].plane_size()
    }
}

impl fmt::Display for PlaneOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlaneOrder> for u32 {
    fn from(order: PlaneOrder) -> Self {
        order.0
    }
}

impl TryFrom<u32> for PlaneOrder {
    type Error = SpotError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PlaneOrder::from_prime(value).ok_or_else(|| {
            SpotError::Input(
                ErrorInfo::new("unsupported-order", "plane order is not in the supported table")
                    .with_context("order", value.to_string())
                    .with_hint("supported orders are 2, 3, 5 and 7"),
            )
        })
    }
}

/// Picks the largest supported order whose plane size fits in `available` symbols.
pub fn select_order(available: usize) -> Result<PlaneOrder, SpotError> {
    let selected = SUPPORTED_ORDERS
        .iter()
        .rev()
        .copied()
        .find(|order| order.plane_size() <= available);
    match selected {
        Some(order) => {
            tracing::debug!(
                available,
                order = order.n(),
                plane_size = order.plane_size(),
                "selected plane order"
            );
            Ok(order)
        }
        None => {
            let required = PlaneOrder::minimum_plane_size();
            Err(SpotError::Input(
                ErrorInfo::new(
                    "insufficient-symbols",
                    "not enough symbols for the smallest supported plane",
                )
                .with_context("available", available.to_string())
                .with_context("required", required.to_string())
                .with_hint(format!("supply at least {required} distinct symbols")),
            ))
        }
    }
}
