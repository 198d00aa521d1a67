//! Comic strip generation pipeline with speech bubble overlay and static HTML assembly
//!
//! The system prepares character reference images, runs a simulated LoRA fine-tuning
//! stage, invokes a text-to-image generation backend per panel, overlays hand-drawn
//! speech bubbles, and assembles the panels into an HTML viewer plus a JSON record.

#![forbid(unsafe_code)]

/// Generation backend boundary: request construction and backend implementations
pub mod backend;
/// Speech bubble placement, sizing, and rendering onto panel images
pub mod bubble;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Reference image preparation and the simulated LoRA training stage
pub mod prep;
/// Metadata serialization and static HTML viewer assembly
pub mod report;
/// Character cast, story scripts, and the sequential panel pipeline
pub mod story;

pub use io::error::{ComicError, Result};
