//! Tests for the embedded dialogue font and text measurement

#[cfg(test)]
mod tests {
    use panelforge::bubble::font::{dialogue_font, measure_text};

    // Tests the embedded bytes parse as a usable font
    // Verified by truncating the embedded slice
    #[test]
    fn test_embedded_font_parses() {
        assert!(dialogue_font().is_ok());
    }

    // Tests measurement grows with text length and scale
    // Verified by returning a constant measurement
    #[test]
    fn test_measurement_grows_with_text_and_scale() {
        let font = dialogue_font().expect("embedded font should parse");

        let (short_w, short_h) = measure_text(&font, 48.0, "OLÁ");
        let (long_w, _) = measure_text(&font, 48.0, "OLÁ, AMIGOS!");
        assert!(short_w > 0 && short_h > 0);
        assert!(long_w > short_w);

        let (small_w, small_h) = measure_text(&font, 16.0, "OLÁ, AMIGOS!");
        assert!(long_w > small_w);
        let (_, large_h) = measure_text(&font, 48.0, "OLÁ, AMIGOS!");
        assert!(large_h > small_h);
    }
}
