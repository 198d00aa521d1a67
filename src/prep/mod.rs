//! Reference image preparation and the simulated LoRA training stage
//!
//! Preparation is best-effort: individual images that fail to load or
//! convert are reported and skipped without aborting the batch. The training
//! stage performs no numerical work at all; it exists purely as a
//! status-reporting step.

/// Reference image scanning, square fitting, and conversion
pub mod images;
/// Training manifest and the simulated fine-tuning loop
pub mod training;

pub use images::{PrepSummary, fit_square, prepare_reference_images};
pub use training::{TrainingManifest, simulate_lora_training};
