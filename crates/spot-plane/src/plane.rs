use serde::{Deserialize, Serialize};
use spot_core::SpotError;

use crate::line::{enumerate_lines, Line};
use crate::order::PlaneOrder;
use crate::point::{point_space, PointSpace};

/// Points and lines of PG(2,n) built for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectivePlane {
    points: PointSpace,
    lines: Vec<Line>,
}

impl ProjectivePlane {
    /// Builds the point space and enumerates every line.
    pub fn build(order: PlaneOrder) -> Result<Self, SpotError> {
        let points = point_space(order);
        let lines = enumerate_lines(&points)?;
        Ok(Self { points, lines })
    }

    /// Returns the plane order.
    pub fn order(&self) -> PlaneOrder {
        self.points.order()
    }

    /// Returns the ordered point space.
    pub fn points(&self) -> &PointSpace {
        &self.points
    }

    /// Returns the lines in enumeration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the point indices of every line, in enumeration order.
    pub fn incidence(&self) -> Vec<Vec<usize>> {
        self.lines
            .iter()
            .map(|line| line.points().to_vec())
            .collect()
    }

    /// Returns the indices of the lines passing through the point at `index`.
    pub fn lines_through(&self, index: usize) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(index))
            .map(|(idx, _)| idx)
            .collect()
    }
}
