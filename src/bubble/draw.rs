//! Ellipse, tail, and dialogue rendering onto panel images

use crate::bubble::anchor::Placement;
use crate::bubble::font::{dialogue_font, measure_text};
use crate::bubble::layout::{BubbleLayout, BubbleStyle, compute_layout};
use crate::io::configuration::SHADOW_OFFSET;
use crate::io::error::Result;
use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_line_segment_mut, draw_polygon_mut, draw_text_mut,
};
use imageproc::point::Point;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const SHADOW_GRAY: Rgb<u8> = Rgb([128, 128, 128]);

/// Render a speech bubble with tail and centered dialogue onto a panel
///
/// The image is mutated in place; the computed bubble region is returned for
/// inspection. Dialogue is assumed to fit: overlong text renders outside the
/// ellipse rather than wrapping or shrinking.
///
/// # Errors
///
/// Returns an error if the embedded dialogue font cannot be parsed
pub fn overlay_bubble(
    image: &mut RgbImage,
    text: &str,
    placement: Placement,
    style: BubbleStyle,
) -> Result<BubbleLayout> {
    let font = dialogue_font()?;
    let text_size = measure_text(&font, style.font_scale(), text);
    let layout = compute_layout(style, placement, image.dimensions(), text, text_size);

    draw_bubble_shape(image, &layout, style.stroke_width());
    draw_tail(image, &layout, placement, style);
    draw_dialogue(image, &layout, text, text_size, &font, style);

    Ok(layout)
}

// Filled black ellipse with a white ellipse inset by the stroke width gives a
// solid outline without gaps at any radius
fn draw_bubble_shape(image: &mut RgbImage, layout: &BubbleLayout, stroke: u32) {
    let rx = (layout.width / 2) as i32;
    let ry = (layout.height / 2) as i32;
    let center = (
        (layout.x + layout.width as i64 / 2) as i32,
        (layout.y + layout.height as i64 / 2) as i32,
    );

    draw_filled_ellipse_mut(image, center, rx, ry, BLACK);
    draw_filled_ellipse_mut(image, center, rx - stroke as i32, ry - stroke as i32, WHITE);
}

fn draw_tail(image: &mut RgbImage, layout: &BubbleLayout, placement: Placement, style: BubbleStyle) {
    let (left, apex, right, inset, drop) = match style {
        BubbleStyle::Classic => (50, 30, 70, 5, 20),
        BubbleStyle::Large => (100, 60, 140, 10, 40),
    };

    let x = layout.x;
    let y = layout.y;
    let bh = layout.height as i64;

    // Tail points downward from a top-anchored bubble, upward otherwise
    let points = if placement.is_top_anchored() {
        [
            Point::new((x + left) as i32, (y + bh - inset) as i32),
            Point::new((x + apex) as i32, (y + bh + drop) as i32),
            Point::new((x + right) as i32, (y + bh - inset) as i32),
        ]
    } else {
        [
            Point::new((x + left) as i32, (y + inset) as i32),
            Point::new((x + apex) as i32, (y - drop) as i32),
            Point::new((x + right) as i32, (y + inset) as i32),
        ]
    };

    draw_polygon_mut(image, &points, WHITE);
    let [p0, p1, p2] = points;
    for (a, b) in [(p0, p1), (p1, p2), (p2, p0)] {
        draw_line_segment_mut(
            image,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            BLACK,
        );
    }
}

fn draw_dialogue(
    image: &mut RgbImage,
    layout: &BubbleLayout,
    text: &str,
    text_size: (u32, u32),
    font: &FontRef<'_>,
    style: BubbleStyle,
) {
    let (text_width, text_height) = text_size;
    let text_x = (layout.x + (layout.width as i64 - text_width as i64) / 2) as i32;
    let text_y = (layout.y + (layout.height as i64 - text_height as i64) / 2) as i32;
    let scale = PxScale::from(style.font_scale());

    if style.draws_shadow() {
        draw_text_mut(
            image,
            SHADOW_GRAY,
            text_x + SHADOW_OFFSET,
            text_y + SHADOW_OFFSET,
            scale,
            font,
            text,
        );
    }
    draw_text_mut(image, BLACK, text_x, text_y, scale, font, text);
}
