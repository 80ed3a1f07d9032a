//! Errors and diagnostics produced during tessellation.

use core::fmt;

/// Errors that make an outline impossible to tessellate.
///
/// These abort the call for the whole glyph. Problems local to a single
/// contour are reported as [`Diagnostic`]s instead.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TessellateError {
    /// Expected number of points to == number of tags.
    PointTagMismatch { num_points: usize, num_tags: usize },
    /// Contour end point at this index was less than its preceding end point.
    ContourOrder(usize),
    /// Contour end point refers past the end of the point list.
    ContourOutOfRange {
        contour: usize,
        end: usize,
        num_points: usize,
    },
    /// Point at this index has a NaN or infinite coordinate.
    NonFinitePoint(usize),
}

impl fmt::Display for TessellateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PointTagMismatch {
                num_points,
                num_tags,
            } => write!(
                f,
                "Number of points ({num_points}) and tags ({num_tags}) must match"
            ),
            Self::ContourOrder(ix) => write!(
                f,
                "Contour end point at index {ix} was less than preceding end point"
            ),
            Self::ContourOutOfRange {
                contour,
                end,
                num_points,
            } => write!(
                f,
                "Contour {contour} ends at point {end} but the outline only has {num_points} points"
            ),
            Self::NonFinitePoint(ix) => write!(f, "Point at index {ix} is not finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TessellateError {}

/// Reason a contour could not contribute any triangles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegenerateReason {
    /// Every point of the contour is off-curve.
    NoOnCurvePoints,
    /// The contour has this many on-curve points (less than 3) and nothing
    /// else that encloses area.
    TooFewOnCurvePoints(usize),
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoOnCurvePoints => write!(f, "all points are off-curve"),
            Self::TooFewOnCurvePoints(count) => {
                write!(f, "only {count} on-curve point(s), too few to enclose an area")
            }
        }
    }
}

/// Non fatal problem found while tessellating a glyph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// The contour at this index was skipped.
    DegenerateContour {
        contour: usize,
        reason: DegenerateReason,
    },
}

impl Diagnostic {
    /// Index of the contour this diagnostic refers to.
    pub fn contour(&self) -> usize {
        match self {
            Self::DegenerateContour { contour, .. } => *contour,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DegenerateContour { contour, reason } => {
                write!(f, "Skipped degenerate contour {contour}: {reason}")
            }
        }
    }
}
