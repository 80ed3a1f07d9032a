//! Triangle emission for normalized contours.
//!
//! Each contour contributes a fan over its hull polygon, where curves are
//! approximated by their chords, and one curve triangle per quadratic segment
//! that corrects the coverage between the chord and the true curve. The
//! backend accumulates coverage additively across all triangles of a glyph,
//! so the fan does not need to be a valid decomposition of the hull.

use super::{
    contour::{NormalizedContour, Segment},
    mesh::Mesh,
    point::Point,
    settings::FanOrigin,
};

/// Number of triangles emitted for a single contour.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct TriangleCounts {
    pub curve: usize,
    pub solid: usize,
}

impl TriangleCounts {
    pub fn total(&self) -> usize {
        self.curve + self.solid
    }
}

/// Emits the curve triangles followed by the hull fan of a contour.
pub fn emit_contour(
    contour: &NormalizedContour,
    origin: FanOrigin,
    mesh: &mut Mesh,
) -> TriangleCounts {
    let curve = emit_curves(&contour.segments, mesh);
    let solid = emit_fan(contour.hull(), origin, mesh);
    TriangleCounts { curve, solid }
}

/// Emits one curve triangle per quadratic segment and returns the number of
/// triangles emitted.
///
/// Vertex order is start, control, end and must not change since the texture
/// coordinates identify the control point.
pub fn emit_curves(segments: &[Segment], mesh: &mut Mesh) -> usize {
    let mut count = 0;
    for segment in segments {
        match *segment {
            Segment::Line { .. } => {}
            Segment::Quad {
                start,
                control,
                end,
            } => {
                mesh.push_curve(start, control, end);
                count += 1;
            }
        }
    }
    count
}

/// Fans the given closed polygon into solid triangles and returns the number
/// of triangles emitted.
///
/// Polygons with fewer than three points produce nothing.
pub fn emit_fan(
    hull: impl Iterator<Item = Point> + Clone,
    origin: FanOrigin,
    mesh: &mut Mesh,
) -> usize {
    let mut points = hull.clone();
    let (Some(first), Some(second)) = (points.next(), points.next()) else {
        return 0;
    };
    if points.clone().next().is_none() {
        return 0;
    }
    let mut count = 0;
    match origin {
        FanOrigin::FirstAnchor => {
            let mut prev = second;
            for point in points {
                mesh.push_solid(first, prev, point);
                prev = point;
                count += 1;
            }
        }
        FanOrigin::Centroid => {
            let (sum, len) = hull.fold((Point::default(), 0usize), |(sum, len), point| {
                (sum + point, len + 1)
            });
            let center = sum / len as f64;
            let mut prev = first;
            for point in core::iter::once(second)
                .chain(points)
                .chain(core::iter::once(first))
            {
                mesh.push_solid(center, prev, point);
                prev = point;
                count += 1;
            }
        }
    }
    count
}
