//! Reconstruction of line and quadratic segments from a contour's points.
//!
//! TrueType outlines only store the points that are needed to describe a
//! curve. Two consecutive off-curve points imply an on-curve point at their
//! midpoint which must be synthesized before the contour can be split into
//! segments.

use super::{
    error::DegenerateReason,
    outline::{is_on_curve, RawContour},
    point::Point,
};
use alloc::vec::Vec;

/// Origin of an on-curve anchor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AnchorKind {
    /// The point is present in the outline.
    Real,
    /// The point was synthesized as the midpoint of two consecutive off-curve
    /// points.
    Implied,
}

/// On-curve point at the boundary between two segments.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Anchor {
    pub point: Point,
    pub kind: AnchorKind,
}

impl Anchor {
    fn real(point: Point) -> Self {
        Self {
            point,
            kind: AnchorKind::Real,
        }
    }

    fn implied(point: Point) -> Self {
        Self {
            point,
            kind: AnchorKind::Implied,
        }
    }
}

/// Edge between two consecutive anchors.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Segment {
    /// Straight edge.
    Line { start: Point, end: Point },
    /// Quadratic bezier with a single off-curve control point.
    Quad {
        start: Point,
        control: Point,
        end: Point,
    },
}

impl Segment {
    pub fn start(&self) -> Point {
        match *self {
            Self::Line { start, .. } | Self::Quad { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Self::Line { end, .. } | Self::Quad { end, .. } => end,
        }
    }
}

/// Contour reduced to a closed sequence of segments.
///
/// Segment `i` begins at anchor `i` and ends at anchor `i + 1`, wrapping back
/// to the first anchor for the last segment. The anchors taken in order form
/// the hull polygon of the contour.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct NormalizedContour {
    pub anchors: Vec<Anchor>,
    pub segments: Vec<Segment>,
}

impl NormalizedContour {
    /// Returns an iterator over the hull polygon of the contour.
    pub fn hull(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        self.anchors.iter().map(|anchor| anchor.point)
    }

    /// Returns true if any segment of the contour is curved.
    pub fn has_curves(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Quad { .. }))
    }

    /// Returns true if the contour has a curve and at least one segment
    /// between two distinct anchors.
    ///
    /// A contour with fewer than three hull points can only cover area
    /// through its curve triangles.
    fn encloses_area(&self) -> bool {
        self.has_curves()
            && self
                .segments
                .iter()
                .any(|segment| segment.start() != segment.end())
    }
}

/// Splits a contour into line and quadratic segments.
///
/// Processing begins at the first on-curve point, so a contour that starts
/// with off-curve points is rotated; the skipped points are visited at the
/// end of the walk. Returns a reason if the contour cannot enclose any area.
pub fn normalize(contour: &RawContour) -> Result<NormalizedContour, DegenerateReason> {
    let mut normalized = NormalizedContour::default();
    normalize_into(contour, &mut normalized)?;
    Ok(normalized)
}

/// Same as [`normalize`] but reuses the buffers of `normalized`, which is
/// cleared first.
pub fn normalize_into(
    contour: &RawContour,
    normalized: &mut NormalizedContour,
) -> Result<(), DegenerateReason> {
    normalized.anchors.clear();
    normalized.segments.clear();
    let start_ix = contour
        .tags
        .iter()
        .position(|tag| is_on_curve(*tag))
        .ok_or(DegenerateReason::NoOnCurvePoints)?;
    let start = contour.points[start_ix];
    let rotated = contour.iter().skip(start_ix + 1).chain(contour.iter().take(start_ix));
    let mut walker = Walker {
        current: Anchor::real(start),
        pending: PendingState::Empty,
        out: normalized,
    };
    for (point, on_curve) in rotated {
        walker.push(point, on_curve);
    }
    walker.finish(start);
    let on_curve_count = contour.on_curve_count();
    if on_curve_count < 3 && !normalized.encloses_area() {
        normalized.anchors.clear();
        normalized.segments.clear();
        return Err(DegenerateReason::TooFewOnCurvePoints(on_curve_count));
    }
    Ok(())
}

#[derive(Copy, Clone, Default)]
enum PendingState {
    /// No pending points.
    #[default]
    Empty,
    /// Pending off-curve quad point.
    PendingQuad(Point),
}

/// Walks the points of a contour, carrying at most one pending control point
/// between steps.
struct Walker<'a> {
    current: Anchor,
    pending: PendingState,
    out: &'a mut NormalizedContour,
}

impl Walker<'_> {
    fn push(&mut self, point: Point, on_curve: bool) {
        match (self.pending, on_curve) {
            (PendingState::Empty, true) => {
                self.segment(
                    Segment::Line {
                        start: self.current.point,
                        end: point,
                    },
                    Anchor::real(point),
                );
            }
            (PendingState::Empty, false) => {
                self.pending = PendingState::PendingQuad(point);
            }
            (PendingState::PendingQuad(control), true) => {
                self.segment(
                    Segment::Quad {
                        start: self.current.point,
                        control,
                        end: point,
                    },
                    Anchor::real(point),
                );
                self.pending = PendingState::Empty;
            }
            (PendingState::PendingQuad(control), false) => {
                let implied = control.midpoint(point);
                self.segment(
                    Segment::Quad {
                        start: self.current.point,
                        control,
                        end: implied,
                    },
                    Anchor::implied(implied),
                );
                self.pending = PendingState::PendingQuad(point);
            }
        }
    }

    /// Records a segment that starts at the current anchor and moves the
    /// current anchor to `next`.
    fn segment(&mut self, segment: Segment, next: Anchor) {
        self.out.anchors.push(self.current);
        self.out.segments.push(segment);
        self.current = next;
    }

    /// Closes the contour back to its first anchor.
    fn finish(mut self, start: Point) {
        self.push(start, true);
    }
}
