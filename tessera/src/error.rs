use std::path::PathBuf;

use glyph_mesh::TessellateError;
use skrifa::{outline::DrawError, raw::ReadError, GlyphId};
use thiserror::Error;

/// Errors produced while loading or tessellating a glyph.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to read font data: {0}")]
    Read(ReadError),
    #[error("font index {index} out of range, file contains {count} font(s)")]
    FontIndex { index: u32, count: u32 },
    #[error("no glyph is mapped to {0:?}")]
    CharNotMapped(char),
    #[error("glyph {0} was not found in the font")]
    GlyphNotFound(GlyphId),
    #[error("failed to draw glyph {0}: {1}")]
    Draw(GlyphId, DrawError),
    #[error("glyph {0} contains cubic curves, only quadratic outlines are supported")]
    CubicOutline(GlyphId),
    #[error("failed to tessellate glyph {0}: {1}")]
    Tessellate(GlyphId, TessellateError),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ReadError> for Error {
    fn from(value: ReadError) -> Self {
        Self::Read(value)
    }
}
