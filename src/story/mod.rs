//! Character cast, story scripts, and the sequential panel pipeline

/// Fixed character cast and prompt fragments
pub mod characters;
/// Sequential per-panel generation, overlay, and report pipeline
pub mod pipeline;
/// Story definitions and prompt assembly
pub mod script;

pub use characters::{CastMember, Character};
pub use pipeline::{PipelineOptions, run_story};
pub use script::{PageScript, PanelScript, StoryScript};
