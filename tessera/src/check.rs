use std::path::Path;

use glyph_mesh::{tessellate_into, Mesh, OutlineBuf, TessellateSettings};
use skrifa::{FontRef, GlyphId};

use crate::{
    font::{glyph_count, load_outline, OutlineSource},
    Error, Font,
};

/// Tallies from tessellating every glyph of one or more fonts.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct CheckStats {
    /// Number of fonts processed, counting each member of a collection.
    pub fonts: usize,
    /// Glyphs that produced a mesh, possibly an empty one.
    pub glyphs: usize,
    /// Glyphs without any outline data.
    pub empty: usize,
    /// Contours skipped as degenerate.
    pub degenerate_contours: usize,
    /// Fonts or glyphs that could not be loaded or tessellated.
    pub failures: usize,
}

impl CheckStats {
    pub fn is_ok(&self) -> bool {
        self.failures == 0
    }
}

impl std::ops::Add for CheckStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            fonts: self.fonts + rhs.fonts,
            glyphs: self.glyphs + rhs.glyphs,
            empty: self.empty + rhs.empty,
            degenerate_contours: self.degenerate_contours + rhs.degenerate_contours,
            failures: self.failures + rhs.failures,
        }
    }
}

/// Tessellates every glyph of every font in the file at `path`.
///
/// Failures are logged and counted rather than returned so that a single
/// broken glyph does not hide problems in the rest of the file.
pub fn check_file(path: &Path, settings: TessellateSettings) -> CheckStats {
    let font = match Font::new(path) {
        Ok(font) => font,
        Err(e) => {
            log::error!("{e}");
            return CheckStats {
                failures: 1,
                ..Default::default()
            };
        }
    };
    let mut stats = CheckStats::default();
    for index in 0..font.count() {
        match font.font_ref(index) {
            Ok(font_ref) => {
                stats = stats + check_font(&font_ref, settings, |e| {
                    log::error!("{}[{index}]: {e}", path.display())
                })
            }
            Err(e) => {
                log::error!("{}[{index}]: {e}", path.display());
                stats.failures += 1;
            }
        }
    }
    stats
}

/// Tessellates every glyph of a single font, passing each failure to
/// `on_error`.
pub fn check_font(
    font: &FontRef,
    settings: TessellateSettings,
    mut on_error: impl FnMut(&Error),
) -> CheckStats {
    let mut stats = CheckStats {
        fonts: 1,
        ..Default::default()
    };
    let mut outline = OutlineBuf::new();
    let mut mesh = Mesh::new();
    for gid in 0..glyph_count(font) {
        let glyph_id = GlyphId::new(gid);
        let result = load_outline(font, glyph_id, &mut outline).and_then(|source| {
            tessellate_into(outline.as_ref(), settings, &mut mesh)
                .map(|diagnostics| (source, diagnostics))
                .map_err(|e| Error::Tessellate(glyph_id, e))
        });
        match result {
            Ok((source, diagnostics)) => {
                stats.glyphs += 1;
                if source == OutlineSource::Empty {
                    stats.empty += 1;
                }
                stats.degenerate_contours += diagnostics.len();
            }
            Err(e) => {
                on_error(&e);
                stats.failures += 1;
            }
        }
    }
    stats
}
