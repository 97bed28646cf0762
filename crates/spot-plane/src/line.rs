use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use spot_core::{ErrorInfo, SpotError};

use crate::field::{mod_inverse, mul_mod};
use crate::order::PlaneOrder;
use crate::point::{Point, PointSpace};

/// Coefficients of the line `a·x + b·y + c·z ≡ 0 (mod n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineCoefficients {
    /// Coefficient of `x`.
    pub a: u32,
    /// Coefficient of `y`.
    pub b: u32,
    /// Coefficient of `z`.
    pub c: u32,
}

impl LineCoefficients {
    /// Creates a coefficient triple.
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// Returns whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.a == 0 && self.b == 0 && self.c == 0
    }

    /// Multiplies every coefficient by `k` modulo `modulus`.
    pub fn scale(&self, k: u32, modulus: u32) -> Self {
        Self::new(
            mul_mod(self.a, k, modulus),
            mul_mod(self.b, k, modulus),
            mul_mod(self.c, k, modulus),
        )
    }

    fn first_nonzero(&self) -> Option<u32> {
        [self.a, self.b, self.c].into_iter().find(|&v| v != 0)
    }
}

impl fmt::Display for LineCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

/// Returns the representative of the line class whose first nonzero coefficient is `1`.
///
/// Two triples canonicalize identically iff one is a nonzero scalar
/// multiple of the other modulo the order. The zero triple names no line
/// and yields `None`.
pub fn canonicalize(coefficients: LineCoefficients, order: PlaneOrder) -> Option<LineCoefficients> {
    canonicalize_mod(coefficients, order.n())
}

pub(crate) fn canonicalize_mod(
    coefficients: LineCoefficients,
    modulus: u32,
) -> Option<LineCoefficients> {
    let reduced = coefficients.scale(1, modulus);
    let lead = reduced.first_nonzero()?;
    let inverse = mod_inverse(lead, modulus)?;
    Some(reduced.scale(inverse, modulus))
}

/// A line of the plane together with its incident point indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    coefficients: LineCoefficients,
    points: Vec<usize>,
}

impl Line {
    /// Returns the canonical coefficients of the line.
    pub fn coefficients(&self) -> LineCoefficients {
        self.coefficients
    }

    /// Returns the incident point indices in ascending order.
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Returns whether the point at `index` lies on the line.
    pub fn contains(&self, index: usize) -> bool {
        self.points.binary_search(&index).is_ok()
    }
}

/// Enumerates the `n² + n + 1` lines of the plane in ascending coefficient order.
pub fn enumerate_lines(space: &PointSpace) -> Result<Vec<Line>, SpotError> {
    let order = space.order();
    let lines = enumerate_lines_mod(space.points(), order.n(), order.plane_size())?;
    tracing::debug!(
        order = order.n(),
        lines = lines.len(),
        "enumerated projective lines"
    );
    Ok(lines)
}

pub(crate) fn enumerate_lines_mod(
    points: &[Point],
    modulus: u32,
    expected: usize,
) -> Result<Vec<Line>, SpotError> {
    let per_line = modulus as usize + 1;
    let mut accepted = BTreeSet::new();
    let mut lines = Vec::with_capacity(expected);

    'search: for a in 0..modulus {
        for b in 0..modulus {
            for c in 0..modulus {
                if lines.len() == expected {
                    break 'search;
                }
                let raw = LineCoefficients::new(a, b, c);
                if raw.is_zero() || accepted.contains(&raw) {
                    continue;
                }
                let canonical = canonicalize_mod(raw, modulus).ok_or_else(|| {
                    SpotError::Plane(
                        ErrorInfo::new(
                            "non-invertible-coefficient",
                            "leading line coefficient has no inverse",
                        )
                        .with_context("coefficients", raw.to_string())
                        .with_context("modulus", modulus.to_string()),
                    )
                })?;
                if !accepted.insert(canonical) {
                    continue;
                }
                let incident = incident_points(points, canonical, modulus, per_line)?;
                lines.push(Line {
                    coefficients: canonical,
                    points: incident,
                });
            }
        }
    }

    if lines.len() != expected {
        let info = ErrorInfo::new(
            "line-count-mismatch",
            "enumeration produced the wrong number of lines",
        )
        .with_context("expected", expected.to_string())
        .with_context("found", lines.len().to_string())
        .with_context("modulus", modulus.to_string());
        return Err(SpotError::Plane(info));
    }
    Ok(lines)
}

/// Scans `points` once in index order and keeps the first `wanted` incident indices.
pub(crate) fn incident_points(
    points: &[Point],
    line: LineCoefficients,
    modulus: u32,
    wanted: usize,
) -> Result<Vec<usize>, SpotError> {
    let mut incident = Vec::with_capacity(wanted);
    for (idx, point) in points.iter().enumerate() {
        if point.lies_on(&line, modulus) {
            incident.push(idx);
            if incident.len() == wanted {
                break;
            }
        }
    }

    if incident.len() != wanted {
        let info = ErrorInfo::new(
            "line-incidence-mismatch",
            "line does not have the expected number of incident points",
        )
        .with_context("coefficients", line.to_string())
        .with_context("expected", wanted.to_string())
        .with_context("found", incident.len().to_string());
        return Err(SpotError::Plane(info));
    }
    if let Some(pair) = incident.windows(2).find(|pair| pair[0] >= pair[1]) {
        let info = ErrorInfo::new(
            "duplicate-incident-point",
            "line lists the same point more than once",
        )
        .with_context("coefficients", line.to_string())
        .with_context("point", pair[1].to_string());
        return Err(SpotError::Plane(info));
    }
    Ok(incident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::raw_points;

    #[test]
    fn composite_modulus_is_rejected() {
        let points = raw_points(4);
        let err = enumerate_lines_mod(&points, 4, 21).expect_err("4 is not prime");
        match err {
            SpotError::Plane(info) => {
                assert_eq!(info.code, "non-invertible-coefficient");
                assert_eq!(info.context["coefficients"], "[0, 0, 2]");
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn truncated_point_space_reports_short_line() {
        let mut points = raw_points(3);
        points.truncate(9);
        let err = incident_points(&points, LineCoefficients::new(0, 0, 1), 3, 4)
            .expect_err("line at infinity has no finite points");
        match err {
            SpotError::Plane(info) => {
                assert_eq!(info.code, "line-incidence-mismatch");
                assert_eq!(info.context["found"], "0");
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn too_many_expected_lines_is_a_count_mismatch() {
        let points = raw_points(2);
        let err = enumerate_lines_mod(&points, 2, 8).expect_err("only seven lines exist");
        assert_eq!(err.info().code, "line-count-mismatch");
        assert_eq!(err.info().context["found"], "7");
    }

    #[test]
    fn accepted_coefficients_are_canonical() {
        let points = raw_points(5);
        let lines = enumerate_lines_mod(&points, 5, 31).unwrap();
        for line in &lines {
            assert_eq!(canonicalize_mod(line.coefficients(), 5), Some(line.coefficients()));
        }
        assert_eq!(lines[0].coefficients(), LineCoefficients::new(0, 0, 1));
        assert_eq!(lines[1].coefficients(), LineCoefficients::new(0, 1, 0));
    }
}
