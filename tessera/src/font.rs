use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use glyph_mesh::{OutlineBuf, Point};
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    raw::{tables::glyf::Glyph, FileRef, FontRef, TableProvider},
    GlyphId, MetadataProvider,
};

use crate::{pen::OutlineRecorder, Error};

/// Where the points of a loaded outline came from.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
pub enum OutlineSource {
    /// Read point for point from a simple `glyf` glyph. Implied on-curve
    /// points are left for the tessellator to reconstruct.
    Glyf,
    /// Recorded from the path commands of skrifa's unscaled outline loader.
    Pen,
    /// The glyph has no outline data.
    Empty,
}

/// Memory mapped font file, possibly a collection.
pub struct Font {
    path: PathBuf,
    data: SharedFontData,
    count: u32,
}

impl Font {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_owned();
        let file = std::fs::File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        // The mapping is treated as immutable for the lifetime of the
        // process; the tool never writes to font files.
        let map = unsafe { memmap2::Mmap::map(&file) }.map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let data = SharedFontData(Arc::new(map));
        let count = match FileRef::new(data.0.as_ref())? {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len(),
        };
        Ok(Self { path, data, count })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of fonts in the file.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn font_ref(&self, index: u32) -> Result<FontRef<'_>, Error> {
        if index >= self.count {
            return Err(Error::FontIndex {
                index,
                count: self.count,
            });
        }
        Ok(FontRef::from_index(self.data.0.as_ref(), index)?)
    }
}

struct SharedFontData(Arc<memmap2::Mmap>);

/// Loads the unscaled, unhinted outline of a glyph into `outline`.
pub fn load_outline(
    font: &FontRef,
    glyph_id: GlyphId,
    outline: &mut OutlineBuf,
) -> Result<OutlineSource, Error> {
    outline.clear();
    if glyph_id.to_u32() >= glyph_count(font) {
        return Err(Error::GlyphNotFound(glyph_id));
    }
    if let Some(source) = load_simple_glyf(font, glyph_id, outline)? {
        return Ok(source);
    }
    let glyph = font
        .outline_glyphs()
        .get(glyph_id)
        .ok_or(Error::GlyphNotFound(glyph_id))?;
    let mut pen = OutlineRecorder::new(outline);
    glyph
        .draw(
            DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
            &mut pen,
        )
        .map_err(|e| Error::Draw(glyph_id, e))?;
    if pen.finish() {
        return Err(Error::CubicOutline(glyph_id));
    }
    Ok(if outline.contours.is_empty() {
        OutlineSource::Empty
    } else {
        OutlineSource::Pen
    })
}

/// Reads a simple glyph directly from the `glyf` table.
///
/// Returns `None` for composite glyphs and fonts without `glyf` outlines.
fn load_simple_glyf(
    font: &FontRef,
    glyph_id: GlyphId,
    outline: &mut OutlineBuf,
) -> Result<Option<OutlineSource>, Error> {
    let (Ok(glyf), Ok(loca)) = (font.glyf(), font.loca(None)) else {
        return Ok(None);
    };
    match loca.get_glyf(glyph_id, &glyf)? {
        None => Ok(Some(OutlineSource::Empty)),
        Some(Glyph::Simple(simple)) => {
            for point in simple.points() {
                outline.push(
                    Point::new(point.x as f64, point.y as f64),
                    point.on_curve as u8,
                );
            }
            outline.contours.extend(
                simple
                    .end_pts_of_contours()
                    .iter()
                    .map(|end| end.get() as usize),
            );
            log::debug!(
                "glyph {glyph_id}: {} points in {} contours from glyf",
                outline.points.len(),
                outline.contours.len()
            );
            Ok(Some(OutlineSource::Glyf))
        }
        Some(Glyph::Composite(_)) => Ok(None),
    }
}

/// Number of glyphs in the font.
pub fn glyph_count(font: &FontRef) -> u32 {
    font.maxp()
        .map(|maxp| maxp.num_glyphs() as u32)
        .unwrap_or_default()
}

/// Maps a character to a glyph through the font's preferred cmap subtable.
pub fn map_char(font: &FontRef, ch: char) -> Result<GlyphId, Error> {
    font.charmap().map(ch).ok_or(Error::CharNotMapped(ch))
}
