//! Assembly of a whole glyph outline into a single mesh.

use super::{
    contour::{normalize_into, NormalizedContour},
    error::{DegenerateReason, Diagnostic, TessellateError},
    geometry::{emit_contour, emit_fan, TriangleCounts},
    mesh::Mesh,
    outline::{OutlineRef, RawContour},
    settings::{FillMode, TessellateSettings},
};
use alloc::vec::Vec;

/// Result of tessellating a glyph outline.
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tessellation {
    /// Triangles of all contours that could be tessellated.
    pub mesh: Mesh,
    /// Contours that were skipped, in contour order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts a glyph outline into a triangle mesh.
///
/// Contours are processed independently and their triangles concatenated in
/// contour order: first the curve triangles of a contour, then its fan.
/// Degenerate contours are skipped and reported in
/// [`Tessellation::diagnostics`]. An outline without contours produces an
/// empty mesh.
///
/// Returns an error, and no mesh at all, if the outline violates its
/// structural invariants (see [`OutlineRef::validate`]).
pub fn tessellate(
    outline: OutlineRef,
    settings: TessellateSettings,
) -> Result<Tessellation, TessellateError> {
    let mut mesh = Mesh::new();
    let diagnostics = tessellate_into(outline, settings, &mut mesh)?;
    Ok(Tessellation { mesh, diagnostics })
}

/// Same as [`tessellate`] but writes triangles into an existing mesh, which
/// is cleared first, and returns only the diagnostics.
///
/// The mesh is left empty on error.
pub fn tessellate_into(
    outline: OutlineRef,
    settings: TessellateSettings,
    mesh: &mut Mesh,
) -> Result<Vec<Diagnostic>, TessellateError> {
    mesh.clear();
    outline.validate()?;
    let mut diagnostics = Vec::new();
    let mut scratch = NormalizedContour::default();
    for contour in outline.contours() {
        let contour = contour?;
        let result = match settings.fill_mode() {
            FillMode::Curves => tessellate_contour(&contour, settings, &mut scratch, mesh),
            FillMode::Polygon => tessellate_polygon(&contour, settings, mesh),
        };
        match result {
            Ok(counts) => log::trace!(
                "contour {}: {} curve and {} solid triangles",
                contour.index,
                counts.curve,
                counts.solid
            ),
            Err(reason) => {
                let diagnostic = Diagnostic::DegenerateContour {
                    contour: contour.index,
                    reason,
                };
                log::warn!("{diagnostic}");
                diagnostics.push(diagnostic);
            }
        }
    }
    Ok(diagnostics)
}

fn tessellate_contour(
    contour: &RawContour,
    settings: TessellateSettings,
    scratch: &mut NormalizedContour,
    mesh: &mut Mesh,
) -> Result<TriangleCounts, DegenerateReason> {
    normalize_into(contour, scratch)?;
    Ok(emit_contour(scratch, settings.fan_origin(), mesh))
}

/// Coarse mode: fan the real on-curve points, ignoring curves entirely.
fn tessellate_polygon(
    contour: &RawContour,
    settings: TessellateSettings,
    mesh: &mut Mesh,
) -> Result<TriangleCounts, DegenerateReason> {
    let on_curve_count = contour.on_curve_count();
    if on_curve_count == 0 {
        return Err(DegenerateReason::NoOnCurvePoints);
    }
    if on_curve_count < 3 {
        return Err(DegenerateReason::TooFewOnCurvePoints(on_curve_count));
    }
    let hull = contour
        .iter()
        .filter_map(|(point, on_curve)| on_curve.then_some(point));
    let solid = emit_fan(hull, settings.fan_origin(), mesh);
    Ok(TriangleCounts { curve: 0, solid })
}
