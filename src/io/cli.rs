//! Command-line interface and pipeline orchestration

use crate::backend::generator::BackendKind;
use crate::backend::placeholder::PlaceholderBackend;
use crate::bubble::layout::BubbleStyle;
use crate::io::configuration::{
    BASE_SEED_MAX, BASE_SEED_MIN, BOOK_DIR_PREFIX, PANEL_DELAY_MS, PROCESSED_SUFFIX,
    STRIP_DIR_PREFIX, TRAINING_STEP_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::progress::ProgressReporter;
use crate::prep::images::prepare_reference_images;
use crate::prep::training::{TrainingManifest, simulate_lora_training};
use crate::story::characters::CastMember;
use crate::story::pipeline::{PipelineOptions, run_story};
use crate::story::script::{treasure_hunt_book, treasure_hunt_strip};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "panelforge")]
#[command(
    author,
    version,
    about = "Generate comic strips with speech bubbles and a static HTML viewer"
)]
/// Command-line arguments for the comic generation tool
pub struct Cli {
    /// Which pipeline to run
    #[command(subcommand)]
    pub command: Command,

    /// Base seed for reproducible panel generation (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Generation backend kind, decided here once for the whole run
    #[arg(short, long, value_enum, default_value_t = BackendKind::Sdxl)]
    pub backend: BackendKind,

    /// Root directory that timestamped run directories are created under
    #[arg(short, long, default_value = "comics")]
    pub output: PathBuf,

    /// Delay between panel generations in milliseconds (0 disables throttling)
    #[arg(long, default_value_t = PANEL_DELAY_MS)]
    pub delay_ms: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// The two independent pipelines
#[derive(Subcommand, Clone)]
pub enum Command {
    /// Generate the two-page comic book with classic bubbles
    Book,

    /// Prepare references, simulate LoRA training, then generate the
    /// enlarged-bubble strip
    Strip {
        /// Directory of raw character reference images
        #[arg(value_name = "REFERENCES")]
        references: PathBuf,

        /// Directory for processed references (defaults to `<REFERENCES>_processed`)
        #[arg(long)]
        processed: Option<PathBuf>,

        /// Cast member the references depict (unknown keys fall back to
        /// jimmy_five)
        #[arg(long, default_value = "jimmy_five")]
        character: String,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one pipeline run end to end
pub struct PipelineRunner {
    cli: Cli,
    reporter: Option<ProgressReporter>,
}

impl PipelineRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let reporter = cli.should_show_progress().then(ProgressReporter::new);
        Self { cli, reporter }
    }

    /// Run the selected pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if reference preparation, panel export, or report
    /// writing fails; per-panel backend failures are recorded and skipped
    pub fn run(&mut self) -> Result<()> {
        let base_seed = self
            .cli
            .seed
            .unwrap_or_else(|| rand::rng().random_range(BASE_SEED_MIN..=BASE_SEED_MAX));
        let delay = Duration::from_millis(self.cli.delay_ms);
        let kind = self.cli.backend;

        let result = match self.cli.command.clone() {
            Command::Book => self.run_book(kind, base_seed, delay),
            Command::Strip {
                references,
                processed,
                character,
            } => self.run_strip(kind, base_seed, delay, &references, processed, &character),
        };

        if let Some(ref reporter) = self.reporter {
            reporter.finish();
        }
        result
    }

    fn run_book(&mut self, kind: BackendKind, base_seed: u64, delay: Duration) -> Result<()> {
        let out_dir = self
            .cli
            .output
            .join(format!("{BOOK_DIR_PREFIX}_{}", Utc::now().timestamp()));
        let script = treasure_hunt_book();
        let mut backend = PlaceholderBackend::new(kind);
        let options = PipelineOptions {
            style: BubbleStyle::Classic,
            base_seed,
            panel_delay: delay,
        };

        self.notice(&format!("Generating '{}' (base seed {base_seed})", script.title));
        let metadata = run_story(
            &mut backend,
            &script,
            &options,
            &out_dir,
            self.reporter.as_mut(),
        )?;

        self.notice(&format!(
            "Generated {}/{} panels into {}",
            metadata.generated_count(),
            metadata.panels.len(),
            out_dir.display()
        ));
        Ok(())
    }

    fn run_strip(
        &mut self,
        kind: BackendKind,
        base_seed: u64,
        delay: Duration,
        references: &Path,
        processed: Option<PathBuf>,
        character_key: &str,
    ) -> Result<()> {
        let member = CastMember::from_key(character_key);
        let character = member.reference();
        let processed_dir = processed.unwrap_or_else(|| default_processed_dir(references));

        self.notice(&format!(
            "Preparing reference images from {}",
            references.display()
        ));
        let reporter = self.reporter.as_ref();
        let summary =
            prepare_reference_images(references, &processed_dir, character.slug, |path, error| {
                if let Some(r) = reporter {
                    r.notice(&format!("Skipping {}: {error}", path.display()));
                }
            })?;

        if summary.processed == 0 {
            self.notice("No reference images found; nothing to do");
            return Ok(());
        }
        self.notice(&format!(
            "Processed {} reference images ({} skipped) into {}",
            summary.processed,
            summary.failed,
            processed_dir.display()
        ));

        let manifest = TrainingManifest::for_character(
            character,
            summary.processed,
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        manifest.write(&processed_dir)?;

        let mut training_rng = StdRng::seed_from_u64(base_seed);
        let training_delay = if delay.is_zero() {
            Duration::ZERO
        } else {
            Duration::from_millis(TRAINING_STEP_DELAY_MS)
        };
        simulate_lora_training(
            &manifest,
            &mut training_rng,
            self.reporter.as_ref(),
            training_delay,
        );

        let out_dir = self
            .cli
            .output
            .join(format!("{STRIP_DIR_PREFIX}_{}", Utc::now().timestamp()));
        let script = treasure_hunt_strip();
        let mut backend = PlaceholderBackend::new(kind);
        let options = PipelineOptions {
            style: BubbleStyle::Large,
            base_seed,
            panel_delay: delay,
        };

        self.notice(&format!("Generating '{}' (base seed {base_seed})", script.title));
        let metadata = run_story(
            &mut backend,
            &script,
            &options,
            &out_dir,
            self.reporter.as_mut(),
        )?;

        self.notice(&format!(
            "Generated {}/{} panels into {}",
            metadata.generated_count(),
            metadata.panels.len(),
            out_dir.display()
        ));
        Ok(())
    }

    fn notice(&self, message: &str) {
        if let Some(ref reporter) = self.reporter {
            reporter.notice(message);
        }
    }
}

fn default_processed_dir(references: &Path) -> PathBuf {
    let name = references.file_name().map_or_else(
        || "references".to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    references.with_file_name(format!("{name}{PROCESSED_SUFFIX}"))
}
