//! Embedded dialogue font loading and text measurement

use crate::io::error::{ComicError, Result};
use ab_glyph::{FontRef, PxScale};
use imageproc::drawing::text_size;

static FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

/// Parse the embedded dialogue font
///
/// The font is bundled into the binary so bubble rendering does not depend
/// on system font paths.
///
/// # Errors
///
/// Returns an error if the embedded font bytes are not a valid TTF
pub fn dialogue_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(FONT_BYTES).map_err(|_invalid| ComicError::FontLoad {
        reason: "embedded font bytes are not a valid TTF",
    })
}

/// Measure the rendered glyph bounding box of `text` at the given scale
pub fn measure_text(font: &FontRef<'_>, scale: f32, text: &str) -> (u32, u32) {
    text_size(PxScale::from(scale), font, text)
}
