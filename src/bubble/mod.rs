//! Speech bubble placement, sizing, and rendering
//!
//! This module contains the bubble overlay core including:
//! - Placement tags and anchor coordinate tables
//! - The two bubble sizing policies and layout geometry
//! - The embedded dialogue font
//! - Ellipse, tail, and dialogue rendering onto panel images

/// Placement tags and their anchor coordinate tables
pub mod anchor;
/// Ellipse, tail, and dialogue rendering
pub mod draw;
/// Embedded dialogue font loading and measurement
pub mod font;
/// Bubble styles, sizing policies, and layout geometry
pub mod layout;

pub use anchor::Placement;
pub use draw::overlay_bubble;
pub use layout::{BubbleLayout, BubbleStyle};
