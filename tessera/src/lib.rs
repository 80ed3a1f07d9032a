//! Loading glyph outlines from font files and reporting their tessellation.

mod check;
mod error;
mod font;
mod pen;
mod report;
#[cfg(test)]
mod testing;

pub use check::{check_file, check_font, CheckStats};
pub use error::Error;
pub use font::{glyph_count, load_outline, map_char, Font, OutlineSource};
pub use pen::OutlineRecorder;
pub use report::{Format, GlyphReport};
