//! Tests for bubble, tail, and dialogue rendering

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use panelforge::bubble::anchor::Placement;
    use panelforge::bubble::draw::overlay_bubble;
    use panelforge::bubble::layout::BubbleStyle;

    const BACKDROP: Rgb<u8> = Rgb([20, 60, 200]);

    fn backdrop(edge: u32) -> RgbImage {
        RgbImage::from_pixel(edge, edge, BACKDROP)
    }

    // Tests the documented example: large style, tag "top", 1024x1024
    // Verified by changing the top anchor or minimum size constants
    #[test]
    fn test_large_top_example_layout() {
        let mut image = backdrop(1024);
        let layout = overlay_bubble(
            &mut image,
            "OLÁ, AMIGOS!",
            Placement::Top,
            BubbleStyle::Large,
        )
        .expect("overlay should succeed");

        assert_eq!((layout.x, layout.y), (256, 60));
        assert!(layout.width >= 400);
        assert!(layout.height >= 120);
    }

    // Tests the image is mutated in place: bubble interior turns white
    // Verified by skipping the ellipse fill
    #[test]
    fn test_bubble_interior_is_white() {
        for style in [BubbleStyle::Classic, BubbleStyle::Large] {
            let mut image = backdrop(1024);
            let layout = overlay_bubble(&mut image, "Oi!", Placement::Top, style)
                .expect("overlay should succeed");

            let cx = (layout.x + i64::from(layout.width) / 2) as u32;
            let cy = (layout.y + i64::from(layout.height) / 2) as u32;
            // Dead center may carry text; probe just inside the left rim instead
            let probe_x = (layout.x + i64::from(style.stroke_width()) + 8) as u32;
            assert_eq!(*image.get_pixel(probe_x, cy), Rgb([255, 255, 255]));
            assert!(cx < 1024 && cy < 1024);
        }
    }

    // Tests pixels outside the bubble region keep the backdrop color
    // Verified by widening the ellipse beyond its layout
    #[test]
    fn test_backdrop_preserved_outside_bubble() {
        let mut image = backdrop(1024);
        overlay_bubble(&mut image, "Oi!", Placement::Top, BubbleStyle::Large)
            .expect("overlay should succeed");

        assert_eq!(*image.get_pixel(0, 1023), BACKDROP);
        assert_eq!(*image.get_pixel(1023, 1023), BACKDROP);
    }

    // Tests the tail triangle renders below a top-anchored bubble
    // Verified by inverting the tail direction predicate
    #[test]
    fn test_tail_points_down_from_top_bubble() {
        let mut image = backdrop(1024);
        let layout = overlay_bubble(&mut image, "Oi!", Placement::Top, BubbleStyle::Large)
            .expect("overlay should succeed");

        // Centroid of the downward tail triangle
        let tx = (layout.x + 100) as u32;
        let ty = (layout.y + i64::from(layout.height) + 6) as u32;
        assert_eq!(*image.get_pixel(tx, ty), Rgb([255, 255, 255]));
    }

    // Tests the tail triangle renders above a bottom-anchored bubble
    // Verified by inverting the tail direction predicate
    #[test]
    fn test_tail_points_up_from_bottom_bubble() {
        let mut image = backdrop(1024);
        let layout = overlay_bubble(&mut image, "Oi!", Placement::Bottom, BubbleStyle::Large)
            .expect("overlay should succeed");

        let tx = (layout.x + 100) as u32;
        let ty = (layout.y - 6) as u32;
        assert_eq!(*image.get_pixel(tx, ty), Rgb([255, 255, 255]));
    }

    // Tests an unrecognized placement falls back to the top anchor end to end
    // Verified by making from_tag error on unknown input
    #[test]
    fn test_unknown_tag_renders_at_top_anchor() {
        let mut image = backdrop(1024);
        let layout = overlay_bubble(
            &mut image,
            "Oi!",
            Placement::from_tag("middle"),
            BubbleStyle::Large,
        )
        .expect("overlay should succeed");

        assert_eq!((layout.x, layout.y), (256, 60));
    }

    // Overlong dialogue renders outside the ellipse rather than wrapping;
    // the call must still succeed and report the clamped classic width
    // Verified by adding wrapping or truncation
    #[test]
    fn test_overlong_dialogue_does_not_error() {
        let mut image = backdrop(1024);
        let text = "THIS DIALOGUE IS FAR TOO LONG TO FIT INSIDE A CLASSIC BUBBLE";
        let layout = overlay_bubble(&mut image, text, Placement::Top, BubbleStyle::Classic)
            .expect("overlay should succeed");
        assert_eq!(layout.width, 250);
    }
}
