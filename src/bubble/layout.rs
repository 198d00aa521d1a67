//! Bubble styles, sizing policies, and layout geometry

use crate::bubble::anchor::Placement;
use crate::io::configuration::{
    CLASSIC_FONT_SCALE, CLASSIC_HEIGHT, CLASSIC_MAX_WIDTH, CLASSIC_MIN_WIDTH, CLASSIC_STROKE,
    CLASSIC_WIDTH_PER_CHAR, LARGE_FONT_SCALE, LARGE_MIN_HEIGHT, LARGE_MIN_WIDTH, LARGE_STROKE,
    LARGE_TEXT_PAD_X, LARGE_TEXT_PAD_Y,
};

/// Bubble rendering style selecting one of the two sizing policies
///
/// `Classic` sizes the bubble purely from the dialogue character count;
/// `Large` measures the rendered glyph bounding box and adds fixed padding,
/// and additionally draws a shadow copy of the text for legibility. Neither
/// policy wraps or shrinks overlong dialogue; text wider than the bubble
/// renders outside the ellipse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleStyle {
    /// Character-count sizing with small fixed-height bubbles
    Classic,
    /// Measured-text sizing with enlarged bubbles and shadowed text
    Large,
}

impl BubbleStyle {
    /// Outline stroke width for this style
    pub const fn stroke_width(self) -> u32 {
        match self {
            Self::Classic => CLASSIC_STROKE,
            Self::Large => LARGE_STROKE,
        }
    }

    /// Dialogue font scale in pixels for this style
    pub const fn font_scale(self) -> f32 {
        match self {
            Self::Classic => CLASSIC_FONT_SCALE,
            Self::Large => LARGE_FONT_SCALE,
        }
    }

    /// Whether this style draws a gray shadow copy beneath the dialogue
    pub const fn draws_shadow(self) -> bool {
        matches!(self, Self::Large)
    }

    /// Bubble dimensions for a dialogue string and its measured text size
    pub fn bubble_size(self, text: &str, text_size: (u32, u32)) -> (u32, u32) {
        match self {
            Self::Classic => {
                let chars = text.chars().count() as u32;
                let width =
                    (chars * CLASSIC_WIDTH_PER_CHAR).clamp(CLASSIC_MIN_WIDTH, CLASSIC_MAX_WIDTH);
                (width, CLASSIC_HEIGHT)
            }
            Self::Large => {
                let (text_width, text_height) = text_size;
                let width = LARGE_MIN_WIDTH.max(text_width + LARGE_TEXT_PAD_X);
                let height = LARGE_MIN_HEIGHT.max(text_height + LARGE_TEXT_PAD_Y);
                (width, height)
            }
        }
    }
}

/// Computed bubble region on a panel image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BubbleLayout {
    /// Left edge of the bubble bounding box
    pub x: i64,
    /// Top edge of the bubble bounding box
    pub y: i64,
    /// Bubble width
    pub width: u32,
    /// Bubble height
    pub height: u32,
}

impl BubbleLayout {
    /// Whether the bounding box lies entirely within an image of the given size
    pub const fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.width as i64 <= image_width as i64
            && self.y + self.height as i64 <= image_height as i64
    }
}

/// Compute the bubble bounding box for a dialogue string on an image
///
/// `text_size` is the measured glyph bounding box of the dialogue at the
/// style's font scale; the classic policy ignores it for sizing but callers
/// still need it to center the text.
pub fn compute_layout(
    style: BubbleStyle,
    placement: Placement,
    image_dimensions: (u32, u32),
    text: &str,
    text_size: (u32, u32),
) -> BubbleLayout {
    let (image_width, image_height) = image_dimensions;
    let (width, height) = style.bubble_size(text, text_size);
    let (x, y) = placement.anchor(style, image_width, image_height, width, height);

    BubbleLayout {
        x,
        y,
        width,
        height,
    }
}
