//! Training manifest and the simulated fine-tuning loop

use crate::io::configuration::{
    LEARNING_RATE, LORA_RANK, TRAINING_REPORT_INTERVAL, TRAINING_STEPS,
};
use crate::io::error::Result;
use crate::io::progress::ProgressReporter;
use crate::story::characters::Character;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Descriptive record written alongside a processed reference set
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingManifest {
    /// Dataset identifier
    pub dataset_name: String,
    /// Character the references depict
    pub character: String,
    /// Short textual style description
    pub description: String,
    /// Prompt token intended to bias generation toward this character
    pub trigger_word: String,
    /// Number of processed reference images
    pub num_images: usize,
    /// Planned training step count
    pub training_steps: u32,
    /// Planned learning rate
    pub learning_rate: f64,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

impl TrainingManifest {
    /// Build a manifest for a character's processed reference set
    pub fn for_character(character: &Character, num_images: usize, created_at: String) -> Self {
        Self {
            dataset_name: format!("{}_references", character.slug),
            character: character.name.to_string(),
            description: character.description.to_string(),
            trigger_word: character.trigger_word.to_string(),
            num_images,
            training_steps: TRAINING_STEPS,
            learning_rate: LEARNING_RATE,
            created_at,
        }
    }

    /// Serialize the manifest as pretty-printed JSON into `dir/metadata.json`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(crate::io::configuration::METADATA_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .map_err(|e| crate::io::error::file_system_error(&path, "write manifest", e))?;
        Ok(path)
    }
}

/// Run the simulated LoRA training stage
///
/// This performs no numerical work: it reports the would-be configuration,
/// then emits pseudo-random loss values at fixed intervals with a delay per
/// report. Loss values come from the supplied seeded RNG, so a run's console
/// output is reproducible. Kept as a status stage for behavioral parity with
/// a real fine-tuning step.
pub fn simulate_lora_training(
    manifest: &TrainingManifest,
    rng: &mut StdRng,
    reporter: Option<&ProgressReporter>,
    step_delay: Duration,
) {
    if let Some(reporter) = reporter {
        reporter.notice("Simulating LoRA training");
        reporter.notice(&format!(
            "  rank {LORA_RANK}, lr {LEARNING_RATE}, {TRAINING_STEPS} steps, trigger word '{}'",
            manifest.trigger_word
        ));
    }

    let bar = reporter.map(|r| r.training_bar(TRAINING_STEPS as u64));

    let mut step = TRAINING_REPORT_INTERVAL;
    while step <= TRAINING_STEPS {
        let loss: f64 = rng.random_range(0.05..0.10);
        if let Some(ref bar) = bar {
            bar.set_position(step as u64);
            bar.set_message(format!("loss {loss:.4}"));
        }
        std::thread::sleep(step_delay);
        step += TRAINING_REPORT_INTERVAL;
    }

    if let Some(bar) = bar {
        bar.finish_with_message("training complete (simulated)");
    }
}
