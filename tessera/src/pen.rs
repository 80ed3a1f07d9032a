use glyph_mesh::{OutlineBuf, Point};
use skrifa::outline::OutlinePen;

/// Pen that records drawing commands back into points and tags.
///
/// Used for outlines that are not stored as simple `glyf` glyphs (composites
/// and other formats) which skrifa can only deliver as path commands.
///
/// This covers two cases while recording:
///
/// 1. Skrifa ends every contour with an explicit segment back to its start
///    point. That duplicate on-curve point is dropped on close since contours
///    are implicitly closed.
///
/// 2. Cubic curves cannot be represented. They are flagged and the caller is
///    expected to reject the outline.
pub struct OutlineRecorder<'a> {
    outline: &'a mut OutlineBuf,
    contour_start: usize,
    has_cubics: bool,
}

impl<'a> OutlineRecorder<'a> {
    /// Creates a recorder that appends to the given (cleared) outline.
    pub fn new(outline: &'a mut OutlineBuf) -> Self {
        outline.clear();
        Self {
            outline,
            contour_start: 0,
            has_cubics: false,
        }
    }

    /// Returns true if a cubic curve was drawn.
    pub fn has_cubics(&self) -> bool {
        self.has_cubics
    }

    /// Ends any contour that was not explicitly closed.
    pub fn finish(mut self) -> bool {
        self.end_contour();
        self.has_cubics
    }

    fn end_contour(&mut self) {
        let outline = &mut *self.outline;
        let len = outline.points.len() - self.contour_start;
        if len > 1 {
            let first = outline.points[self.contour_start];
            let last_ix = outline.points.len() - 1;
            if outline.points[last_ix] == first && glyph_mesh::is_on_curve(outline.tags[last_ix])
            {
                outline.points.pop();
                outline.tags.pop();
            }
        }
        outline.close_contour();
        self.contour_start = outline.points.len();
    }
}

impl OutlinePen for OutlineRecorder<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.end_contour();
        self.outline.on_curve(point(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.outline.on_curve(point(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.outline.off_curve(point(cx0, cy0)).on_curve(point(x, y));
    }

    fn curve_to(&mut self, _cx0: f32, _cy0: f32, _cx1: f32, _cy1: f32, x: f32, y: f32) {
        self.has_cubics = true;
        self.outline.on_curve(point(x, y));
    }

    fn close(&mut self) {
        self.end_contour();
    }
}

fn point(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}
