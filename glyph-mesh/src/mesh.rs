//! Vertex buffer produced for the rendering backend.

use super::point::Point;
use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};

/// Texture coordinate carried by every vertex of a solid triangle.
///
/// The fragment shader treats this as "always inside".
pub const SOLID_TEX_COORD: [f32; 2] = [0.0, 1.0];

/// Texture coordinates of the start, control and end vertices of a curve
/// triangle.
///
/// With these, the fragment shader evaluates `u * u - v` to decide which side
/// of the quadratic a fragment lies on.
pub const CURVE_TEX_COORDS: [[f32; 2]; 3] = [[0.0, 0.0], [0.5, 0.0], [1.0, 1.0]];

/// Interleaved position and texture coordinate.
///
/// Laid out as four consecutive `f32` values: `x, y, u, v`.
#[derive(Copy, Clone, PartialEq, Default, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Size of a vertex in bytes, i.e. the buffer stride.
    pub const SIZE: usize = core::mem::size_of::<Self>();

    pub fn new(point: Point, tex_coord: [f32; 2]) -> Self {
        Self {
            position: point.to_f32(),
            tex_coord,
        }
    }

    /// Creates a vertex of a solid fill triangle.
    pub fn solid(point: Point) -> Self {
        Self::new(point, SOLID_TEX_COORD)
    }

    /// Returns true if this vertex belongs to a solid fill triangle.
    pub fn is_solid(&self) -> bool {
        self.tex_coord == SOLID_TEX_COORD
    }
}

/// Non-indexed triangle list.
///
/// Every three consecutive vertices form one triangle.
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all triangles while retaining the allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns an iterator over the triangles of the mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Vertex; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Returns the vertex data as interleaved `x, y, u, v` values.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the vertex data in native byte order, ready for upload to a
    /// vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Appends a solid fill triangle.
    pub fn push_solid(&mut self, p0: Point, p1: Point, p2: Point) {
        self.vertices
            .extend([Vertex::solid(p0), Vertex::solid(p1), Vertex::solid(p2)]);
    }

    /// Appends a curve triangle for the quadratic from `start` to `end` with
    /// the given control point.
    pub fn push_curve(&mut self, start: Point, control: Point, end: Point) {
        let [t0, t1, t2] = CURVE_TEX_COORDS;
        self.vertices.extend([
            Vertex::new(start, t0),
            Vertex::new(control, t1),
            Vertex::new(end, t2),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout() {
        assert_eq!(Vertex::SIZE, 16);
        let mut mesh = Mesh::new();
        mesh.push_curve(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        );
        assert_eq!(
            mesh.as_floats(),
            [1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 0.5, 0.0, 5.0, 6.0, 1.0, 1.0]
        );
        assert_eq!(mesh.as_bytes().len(), 3 * Vertex::SIZE);
        assert_eq!(&mesh.as_bytes()[..4], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn triangles() {
        let mut mesh = Mesh::new();
        let (a, b, c) = (Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        mesh.push_solid(a, b, c);
        mesh.push_curve(a, b, c);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        let triangles = mesh.triangles().collect::<Vec<_>>();
        assert!(triangles[0].iter().all(Vertex::is_solid));
        assert_eq!(
            triangles[1].map(|vertex| vertex.tex_coord),
            CURVE_TEX_COORDS
        );
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangles().len(), 0);
    }
}
