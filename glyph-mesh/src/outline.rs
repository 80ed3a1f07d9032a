//! Glyph outlines as supplied by a font outline source.
//!
//! An outline is described the same way FreeType's `FT_Outline` and the
//! TrueType `glyf` table describe it: a flat list of points, a parallel list
//! of tags where bit 0 marks an on-curve point and a list of inclusive
//! contour end indices into the point list.

use super::{error::TessellateError, point::Point};
use alloc::vec::Vec;

/// Tag bit that marks a point as on-curve.
pub const ON_CURVE: u8 = 0x01;

/// Returns true if the tag marks an on-curve point.
///
/// All other bits are ignored.
#[inline(always)]
pub fn is_on_curve(tag: u8) -> bool {
    tag & ON_CURVE != 0
}

/// Borrowed view of a glyph outline.
#[derive(Copy, Clone, Default, Debug)]
pub struct OutlineRef<'a> {
    /// Point coordinates in font units.
    pub points: &'a [Point],
    /// Per point tags. Bit 0 is set for on-curve points.
    pub tags: &'a [u8],
    /// Inclusive end index of each contour.
    pub contours: &'a [usize],
}

impl<'a> OutlineRef<'a> {
    pub fn new(points: &'a [Point], tags: &'a [u8], contours: &'a [usize]) -> Self {
        Self {
            points,
            tags,
            contours,
        }
    }

    /// Returns true if the outline has no contours.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Checks the structural invariants of the outline.
    ///
    /// The point and tag lists must have the same length, every point must be
    /// finite and the contour end indices must be increasing and in range.
    pub fn validate(&self) -> Result<(), TessellateError> {
        if self.points.len() != self.tags.len() {
            return Err(TessellateError::PointTagMismatch {
                num_points: self.points.len(),
                num_tags: self.tags.len(),
            });
        }
        if let Some(ix) = self.points.iter().position(|point| !point.is_finite()) {
            return Err(TessellateError::NonFinitePoint(ix));
        }
        for contour in self.contours() {
            contour?;
        }
        Ok(())
    }

    /// Returns an iterator over the contours of the outline.
    ///
    /// Each item is an error if the corresponding end index is out of order
    /// or out of range.
    pub fn contours(&self) -> Contours<'a> {
        Contours {
            outline: *self,
            contour_ix: 0,
            start_ix: 0,
        }
    }
}

/// Iterator over the contours of an outline.
#[derive(Clone)]
pub struct Contours<'a> {
    outline: OutlineRef<'a>,
    contour_ix: usize,
    start_ix: usize,
}

impl<'a> Iterator for Contours<'a> {
    type Item = Result<RawContour<'a>, TessellateError>;

    fn next(&mut self) -> Option<Self::Item> {
        let contour_ix = self.contour_ix;
        let end_ix = *self.outline.contours.get(contour_ix)?;
        self.contour_ix += 1;
        let start_ix = core::mem::replace(&mut self.start_ix, end_ix.wrapping_add(1));
        if end_ix < start_ix {
            return Some(Err(TessellateError::ContourOrder(contour_ix)));
        }
        let num_points = self.outline.points.len();
        let range = start_ix..=end_ix;
        let (Some(points), Some(tags)) = (
            self.outline.points.get(range.clone()),
            self.outline.tags.get(range),
        ) else {
            return Some(Err(TessellateError::ContourOutOfRange {
                contour: contour_ix,
                end: end_ix,
                num_points,
            }));
        };
        Some(Ok(RawContour {
            index: contour_ix,
            start: start_ix,
            points,
            tags,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.outline.contours.len() - self.contour_ix;
        (remaining, Some(remaining))
    }
}

/// Points and tags of a single, implicitly closed contour.
#[derive(Copy, Clone, Debug)]
pub struct RawContour<'a> {
    /// Index of the contour within its outline.
    pub index: usize,
    /// Index of the first point of the contour within the outline.
    pub start: usize,
    pub points: &'a [Point],
    pub tags: &'a [u8],
}

impl<'a> RawContour<'a> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the points of the contour paired with their
    /// on-curve state.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + Clone + 'a {
        self.points
            .iter()
            .copied()
            .zip(self.tags.iter().map(|tag| is_on_curve(*tag)))
    }

    /// Number of on-curve points.
    pub fn on_curve_count(&self) -> usize {
        self.tags.iter().filter(|tag| is_on_curve(**tag)).count()
    }
}

/// Owned glyph outline.
///
/// Used by outline sources that need to collect points before tessellating,
/// and for building outlines by hand.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct OutlineBuf {
    pub points: Vec<Point>,
    pub tags: Vec<u8>,
    pub contours: Vec<usize>,
}

impl OutlineBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all points and contours while retaining allocations.
    pub fn clear(&mut self) {
        self.points.clear();
        self.tags.clear();
        self.contours.clear();
    }

    /// Appends an on-curve point to the current contour.
    pub fn on_curve(&mut self, point: impl Into<Point>) -> &mut Self {
        self.push(point.into(), ON_CURVE)
    }

    /// Appends an off-curve (quadratic control) point to the current contour.
    pub fn off_curve(&mut self, point: impl Into<Point>) -> &mut Self {
        self.push(point.into(), 0)
    }

    /// Appends a point with the given tag to the current contour.
    pub fn push(&mut self, point: Point, tag: u8) -> &mut Self {
        self.points.push(point);
        self.tags.push(tag);
        self
    }

    /// Ends the current contour.
    ///
    /// Does nothing if no points were added since the previous contour was
    /// closed.
    pub fn close_contour(&mut self) -> &mut Self {
        let start = self.contours.last().map(|end| end + 1).unwrap_or_default();
        if self.points.len() > start {
            self.contours.push(self.points.len() - 1);
        }
        self
    }

    /// Appends a complete contour from points paired with their on-curve
    /// state.
    pub fn push_contour(&mut self, points: impl IntoIterator<Item = (Point, bool)>) -> &mut Self {
        for (point, on_curve) in points {
            self.push(point, if on_curve { ON_CURVE } else { 0 });
        }
        self.close_contour()
    }

    pub fn as_ref(&self) -> OutlineRef<'_> {
        OutlineRef {
            points: &self.points,
            tags: &self.tags,
            contours: &self.contours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn tag_bits() {
        assert!(is_on_curve(1));
        assert!(is_on_curve(0b1001));
        assert!(!is_on_curve(0));
        assert!(!is_on_curve(0b0110));
    }

    #[test]
    fn build_contours() {
        let mut outline = OutlineBuf::new();
        outline
            .on_curve((0.0, 0.0))
            .off_curve((1.0, 0.0))
            .on_curve((1.0, 1.0))
            .close_contour()
            // empty contours are not recorded
            .close_contour()
            .push_contour([(pt(5.0, 5.0), true), (pt(6.0, 5.0), false)]);
        assert_eq!(outline.contours, [2, 4]);
        assert_eq!(outline.tags, [1, 0, 1, 1, 0]);
        let contours = outline
            .as_ref()
            .contours()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[1].index, 1);
        assert_eq!(contours[1].start, 3);
        assert_eq!(contours[1].points, [pt(5.0, 5.0), pt(6.0, 5.0)]);
        assert_eq!(contours[1].on_curve_count(), 1);
    }

    #[test]
    fn point_tag_mismatch() {
        let points = [pt(0.0, 0.0), pt(1.0, 0.0)];
        let outline = OutlineRef::new(&points, &[1], &[1]);
        assert_eq!(
            outline.validate(),
            Err(TessellateError::PointTagMismatch {
                num_points: 2,
                num_tags: 1
            })
        );
    }

    #[test]
    fn contour_order() {
        let points = [pt(0.0, 0.0); 6];
        let tags = [1; 6];
        let outline = OutlineRef::new(&points, &tags, &[3, 2, 5]);
        assert_eq!(outline.validate(), Err(TessellateError::ContourOrder(1)));
        // A repeated end index describes an empty contour which is also
        // out of order.
        let outline = OutlineRef::new(&points, &tags, &[2, 2, 5]);
        assert_eq!(outline.validate(), Err(TessellateError::ContourOrder(1)));
    }

    #[test]
    fn contour_out_of_range() {
        let points = [pt(0.0, 0.0); 4];
        let tags = [1; 4];
        let outline = OutlineRef::new(&points, &tags, &[2, 4]);
        assert_eq!(
            outline.validate(),
            Err(TessellateError::ContourOutOfRange {
                contour: 1,
                end: 4,
                num_points: 4
            })
        );
    }

    #[test]
    fn non_finite_point() {
        let points = [pt(0.0, 0.0), pt(f64::NAN, 1.0), pt(1.0, 1.0)];
        let outline = OutlineRef::new(&points, &[1, 1, 1], &[2]);
        assert_eq!(outline.validate(), Err(TessellateError::NonFinitePoint(1)));
    }

    #[test]
    fn empty_outline_is_valid() {
        let outline = OutlineRef::default();
        assert!(outline.is_empty());
        assert_eq!(outline.validate(), Ok(()));
        assert_eq!(outline.contours().count(), 0);
    }
}
