#![no_main]
//! Tessellates arbitrary point/tag/contour arrays.
//!
//! Malformed outlines must be rejected with an error and well formed ones
//! must produce a whole number of triangles with finite positions.

use glyph_mesh::{
    tessellate, FanOrigin, FillMode, OutlineRef, Point, TessellateSettings, Vertex,
};
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};

#[derive(Arbitrary, Debug)]
struct FuzzOutline {
    points: Vec<(i16, i16)>,
    tags: Vec<u8>,
    contours: Vec<u16>,
    polygon: bool,
    centroid: bool,
}

fuzz_target!(|input: FuzzOutline| {
    let points: Vec<Point> = input
        .points
        .iter()
        .map(|(x, y)| Point::new(*x as f64, *y as f64))
        .collect();
    let contours: Vec<usize> = input.contours.iter().map(|end| *end as usize).collect();
    let outline = OutlineRef::new(&points, &input.tags, &contours);
    let settings = TessellateSettings::new()
        .with_fill_mode(if input.polygon {
            FillMode::Polygon
        } else {
            FillMode::Curves
        })
        .with_fan_origin(if input.centroid {
            FanOrigin::Centroid
        } else {
            FanOrigin::FirstAnchor
        });
    let Ok(result) = tessellate(outline, settings) else {
        return;
    };
    let mesh = &result.mesh;
    assert_eq!(mesh.vertices().len() % 3, 0);
    assert_eq!(mesh.as_bytes().len(), mesh.vertex_count() * Vertex::SIZE);
    assert!(mesh
        .vertices()
        .iter()
        .all(|v| v.position.iter().all(|c| c.is_finite())));
    assert!(result.diagnostics.len() <= contours.len());
    // Pure function of the input
    assert_eq!(tessellate(outline, settings).ok().as_ref(), Some(&result));
});
