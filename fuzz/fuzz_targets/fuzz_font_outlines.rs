#![no_main]
//! Loads and tessellates every glyph of an arbitrary font file.
//!
//! Errors are fine, panics are not.

use glyph_mesh::TessellateSettings;
use libfuzzer_sys::fuzz_target;
use skrifa::FontRef;

fuzz_target!(|data: &[u8]| {
    let Ok(font) = FontRef::new(data) else {
        return;
    };
    let _ = tessera::check_font(&font, TessellateSettings::default(), |_| {});
});
