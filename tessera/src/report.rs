use std::io::Write;

use glyph_mesh::{TessellateSettings, Tessellation, Vertex};
use serde::Serialize;

use crate::{font::OutlineSource, Error};

/// Output format for a tessellated glyph.
#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
pub enum Format {
    /// Human readable counts and diagnostics.
    #[default]
    Summary,
    /// The settings, mesh and diagnostics as JSON.
    Json,
    /// Interleaved `x, y, u, v` f32 vertex data in native byte order.
    Raw,
}

/// Everything known about a single tessellated glyph.
#[derive(Serialize, Debug)]
pub struct GlyphReport<'a> {
    pub glyph_id: u32,
    pub character: Option<char>,
    pub source: OutlineSource,
    pub settings: TessellateSettings,
    pub contour_count: usize,
    pub point_count: usize,
    pub curve_triangles: usize,
    pub solid_triangles: usize,
    pub tessellation: &'a Tessellation,
}

impl<'a> GlyphReport<'a> {
    pub fn new(
        glyph_id: u32,
        character: Option<char>,
        source: OutlineSource,
        settings: TessellateSettings,
        contour_count: usize,
        point_count: usize,
        tessellation: &'a Tessellation,
    ) -> Self {
        let solid_triangles = tessellation
            .mesh
            .triangles()
            .filter(|tri| tri.iter().all(Vertex::is_solid))
            .count();
        Self {
            glyph_id,
            character,
            source,
            settings,
            contour_count,
            point_count,
            curve_triangles: tessellation.mesh.triangle_count() - solid_triangles,
            solid_triangles,
            tessellation,
        }
    }

    pub fn write(&self, format: Format, writer: &mut impl Write) -> Result<(), Error> {
        match format {
            Format::Summary => self.write_summary(writer)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
            }
            Format::Raw => writer.write_all(self.tessellation.mesh.as_bytes())?,
        }
        writer.flush()?;
        Ok(())
    }

    fn write_summary(&self, writer: &mut impl Write) -> std::io::Result<()> {
        let mesh = &self.tessellation.mesh;
        match self.character {
            Some(ch) => writeln!(writer, "glyph: {} ({ch:?})", self.glyph_id)?,
            None => writeln!(writer, "glyph: {}", self.glyph_id)?,
        }
        writeln!(writer, "source: {:?}", self.source)?;
        writeln!(
            writer,
            "fill mode: {:?}, fan origin: {:?}",
            self.settings.fill_mode(),
            self.settings.fan_origin()
        )?;
        writeln!(
            writer,
            "contours: {}, points: {}",
            self.contour_count, self.point_count
        )?;
        writeln!(
            writer,
            "triangles: {} ({} curve, {} solid)",
            mesh.triangle_count(),
            self.curve_triangles,
            self.solid_triangles
        )?;
        writeln!(
            writer,
            "vertices: {} ({} bytes)",
            mesh.vertex_count(),
            mesh.as_bytes().len()
        )?;
        for diagnostic in &self.tessellation.diagnostics {
            writeln!(writer, "warning: {diagnostic}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_mesh::{tessellate, OutlineBuf};
    use pretty_assertions::assert_eq;

    fn lens_and_line() -> (OutlineBuf, Tessellation) {
        let mut outline = OutlineBuf::new();
        outline
            .on_curve((0.0, 0.0))
            .off_curve((50.0, 100.0))
            .on_curve((100.0, 0.0))
            .close_contour()
            .on_curve((0.0, 0.0))
            .on_curve((10.0, 0.0))
            .close_contour();
        let tessellation = tessellate(outline.as_ref(), TessellateSettings::default()).unwrap();
        (outline, tessellation)
    }

    #[test]
    fn summary() {
        let (outline, tessellation) = lens_and_line();
        let report = GlyphReport::new(
            36,
            Some('A'),
            OutlineSource::Glyf,
            TessellateSettings::default(),
            outline.contours.len(),
            outline.points.len(),
            &tessellation,
        );
        let mut out = Vec::new();
        report.write(Format::Summary, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "glyph: 36 ('A')\n\
             source: Glyf\n\
             fill mode: Curves, fan origin: FirstAnchor\n\
             contours: 2, points: 5\n\
             triangles: 1 (1 curve, 0 solid)\n\
             vertices: 3 (48 bytes)\n\
             warning: Skipped degenerate contour 1: only 2 on-curve point(s), too few to enclose an area\n"
        );
    }

    #[test]
    fn raw_is_vertex_buffer() {
        let (_, tessellation) = lens_and_line();
        let report = GlyphReport::new(
            1,
            None,
            OutlineSource::Pen,
            TessellateSettings::default(),
            2,
            5,
            &tessellation,
        );
        let mut out = Vec::new();
        report.write(Format::Raw, &mut out).unwrap();
        assert_eq!(out, tessellation.mesh.as_bytes());
    }

    #[test]
    fn json_fields() {
        let (_, tessellation) = lens_and_line();
        let report = GlyphReport::new(
            7,
            None,
            OutlineSource::Empty,
            TessellateSettings::default(),
            2,
            5,
            &tessellation,
        );
        let mut out = Vec::new();
        report.write(Format::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["glyph_id"], 7);
        assert_eq!(value["curve_triangles"], 1);
        assert_eq!(
            value["tessellation"]["mesh"]["vertices"][1]["tex_coord"],
            serde_json::json!([0.5, 0.0])
        );
        assert_eq!(
            value["tessellation"]["diagnostics"][0]["DegenerateContour"]["contour"],
            1
        );
    }
}
