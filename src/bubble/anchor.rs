//! Placement tags and their anchor coordinate tables

use crate::bubble::layout::BubbleStyle;
use crate::io::configuration::{CLASSIC_HEIGHT, CLASSIC_MAX_WIDTH};

/// Enumerated anchor position controlling where a bubble is drawn on a panel
///
/// Anchors are fixed offset formulas from the image dimensions; they are not
/// content-aware and do not avoid character features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Upper-left quadrant, a quarter of the width in
    Top,
    /// Flush against the right edge at the top
    TopRight,
    /// Lower-left quadrant, a quarter of the width in
    Bottom,
    /// Flush against the right edge at the bottom
    BottomRight,
    /// Centered on the image (large style only)
    Center,
}

impl Placement {
    /// Parse a placement tag, falling back to `Top` for anything unrecognized
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "top-right" => Self::TopRight,
            "bottom" => Self::Bottom,
            "bottom-right" => Self::BottomRight,
            "center" => Self::Center,
            _ => Self::Top,
        }
    }

    /// The lowercase hyphenated tag for this placement
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Bottom => "bottom",
            Self::BottomRight => "bottom-right",
            Self::Center => "center",
        }
    }

    /// Whether the tag contains "top", which decides the tail direction
    pub const fn is_top_anchored(self) -> bool {
        matches!(self, Self::Top | Self::TopRight)
    }

    /// Anchor coordinates for a bubble of the given size on an image
    ///
    /// The classic table uses fixed offsets independent of the bubble size and
    /// has no `center` entry; `center` falls back to the `top` anchor there.
    pub const fn anchor(
        self,
        style: BubbleStyle,
        image_width: u32,
        image_height: u32,
        bubble_width: u32,
        bubble_height: u32,
    ) -> (i64, i64) {
        let w = image_width as i64;
        let h = image_height as i64;
        let bw = bubble_width as i64;
        let bh = bubble_height as i64;

        match style {
            BubbleStyle::Classic => match self {
                Self::Top | Self::Center => (w / 4, 40),
                Self::TopRight => (w - (CLASSIC_MAX_WIDTH as i64 + 50), 40),
                Self::Bottom => (w / 4, h - (CLASSIC_HEIGHT as i64 + 60)),
                Self::BottomRight => (
                    w - (CLASSIC_MAX_WIDTH as i64 + 50),
                    h - (CLASSIC_HEIGHT as i64 + 60),
                ),
            },
            BubbleStyle::Large => match self {
                Self::Top => (w / 4, 60),
                Self::TopRight => (w - bw - 50, 60),
                Self::Bottom => (w / 4, h - bh - 100),
                Self::BottomRight => (w - bw - 50, h - bh - 100),
                Self::Center => ((w - bw) / 2, (h - bh) / 2),
            },
        }
    }
}
