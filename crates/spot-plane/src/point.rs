use serde::{Deserialize, Serialize};

use crate::line::LineCoefficients;
use crate::order::PlaneOrder;

/// Homogeneous coordinate triple `(x, y, z)` over the integers modulo `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// First coordinate.
    pub x: u32,
    /// Second coordinate.
    pub y: u32,
    /// Third coordinate, always `0` or `1` for constructed points.
    pub z: u32,
}

/// Region of the point space a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    /// Affine point `(x, y, 1)`.
    Finite,
    /// Direction `(1, m, 0)` of slope `m`.
    Slope,
    /// Vertical direction `(0, 1, 0)`.
    Infinity,
}

impl Point {
    /// Creates a point from raw coordinates.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Classifies the point by its position in the projective completion.
    pub fn kind(&self) -> PointKind {
        match (self.x, self.z) {
            (_, 1) => PointKind::Finite,
            (1, 0) => PointKind::Slope,
            _ => PointKind::Infinity,
        }
    }

    /// Tests `a·x + b·y + c·z ≡ 0 (mod modulus)`.
    pub fn lies_on(&self, line: &LineCoefficients, modulus: u32) -> bool {
        let m = u64::from(modulus);
        let sum = u64::from(line.a) * u64::from(self.x) % m
            + u64::from(line.b) * u64::from(self.y) % m
            + u64::from(line.c) * u64::from(self.z) % m;
        sum % m == 0
    }
}

/// Ordered points of PG(2,n). A point's position is its symbol slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSpace {
    order: PlaneOrder,
    points: Vec<Point>,
}

impl PointSpace {
    /// Returns the order the space was built for.
    pub fn order(&self) -> PlaneOrder {
        self.order
    }

    /// Returns the points in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point stored at `index`.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the space holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Builds the `n² + n + 1` points of PG(2,n) in their fixed order.
pub fn point_space(order: PlaneOrder) -> PointSpace {
    PointSpace {
        order,
        points: raw_points(order.n()),
    }
}

/// Finite points by `x` then `y`, then slope points, then the point at infinity.
pub(crate) fn raw_points(n: u32) -> Vec<Point> {
    let size = (n * n + n + 1) as usize;
    let mut points = Vec::with_capacity(size);
    for x in 0..n {
        for y in 0..n {
            points.push(Point::new(x, y, 1));
        }
    }
    for m in 0..n {
        points.push(Point::new(1, m, 0));
    }
    points.push(Point::new(0, 1, 0));
    points
}
