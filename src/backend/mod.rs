//! Generation backend boundary
//!
//! The pipeline treats text-to-image generation as an opaque contract: a
//! request built from a backend kind's defaults plus a deterministic seed,
//! answered with an image or a per-panel failure.

/// Backend kinds, generation requests, and the backend trait
pub mod generator;
/// Deterministic placeholder backend for model-free environments
pub mod placeholder;

pub use generator::{BackendKind, GenerationBackend, GenerationRequest};
pub use placeholder::PlaceholderBackend;
