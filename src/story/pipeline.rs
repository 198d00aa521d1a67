//! Sequential per-panel generation, overlay, and report pipeline
//!
//! Entirely single-threaded: each panel is generated, bubble-annotated, and
//! saved before the next panel starts. A backend failure marks the panel as
//! not generated and the run continues; there is no retry and no abort.

use crate::backend::generator::{GenerationBackend, GenerationRequest};
use crate::bubble::draw::overlay_bubble;
use crate::bubble::layout::BubbleStyle;
use crate::io::error::{ComicError, Result, file_system_error};
use crate::io::progress::ProgressReporter;
use crate::report::html::{write_book_viewer, write_strip_viewer};
use crate::report::metadata::{CharacterCredit, PanelRecord, StoryMetadata, write_metadata};
use crate::story::script::StoryScript;
use chrono::Local;
use std::path::Path;
use std::time::Duration;

/// Knobs for one pipeline run
#[derive(Clone, Copy, Debug)]
pub struct PipelineOptions {
    /// Bubble rendering style for every panel
    pub style: BubbleStyle,
    /// Base seed; panel seeds drift upward from it by panel ordinal
    pub base_seed: u64,
    /// Fixed delay between panel generations (throttling, not correctness)
    pub panel_delay: Duration,
}

/// Run a story through the backend, panel by panel, and write all outputs
///
/// Produces the annotated panel images, `metadata.json`, and the HTML viewer
/// matching the story layout (book for multi-page scripts, strip otherwise)
/// inside `out_dir`. Returns the story record that was written.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, a generated
/// panel cannot be annotated or saved, or a report cannot be written.
/// Backend failures are recorded per panel and do not abort the run.
pub fn run_story(
    backend: &mut dyn GenerationBackend,
    script: &StoryScript,
    options: &PipelineOptions,
    out_dir: &Path,
    mut reporter: Option<&mut ProgressReporter>,
) -> Result<StoryMetadata> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| file_system_error(out_dir, "create directory", e))?;

    let total = script.panel_count();
    let multi_page = script.pages.len() > 1;
    if let Some(r) = reporter.as_deref_mut() {
        r.start_panels(total);
    }

    let mut records: Vec<PanelRecord> = Vec::with_capacity(total);
    let mut panel_id = 0usize;

    for (page_index, page) in script.pages.iter().enumerate() {
        let page_number = (page_index + 1) as u32;

        for (panel_index, panel) in page.panels.iter().enumerate() {
            panel_id += 1;
            let panel_number = (panel_index + 1) as u32;
            let seed = options.base_seed + panel_id as u64;
            let request = GenerationRequest::for_kind(
                backend.kind(),
                panel.prompt(script.prompt_mode),
                script.negative_prompt.to_string(),
                seed,
            );

            if let Some(r) = reporter.as_deref() {
                r.start_panel(panel_id, panel.dialogue);
            }

            let record = match backend.generate(&request) {
                Ok(mut image) => {
                    overlay_bubble(&mut image, panel.dialogue, panel.placement, options.style)?;

                    let file_name = if multi_page {
                        format!("page{page_number}_panel{panel_number}.png")
                    } else {
                        format!("panel_{panel_id}.png")
                    };
                    let path = out_dir.join(&file_name);
                    image.save(&path).map_err(|e| ComicError::ImageExport {
                        path: path.clone(),
                        source: e,
                    })?;

                    PanelRecord {
                        id: panel_id,
                        page: page_number,
                        panel: panel_number,
                        description: panel.scene.to_string(),
                        dialogue: panel.dialogue.to_string(),
                        image: Some(file_name),
                        generated: true,
                        seed,
                    }
                }
                Err(error) => {
                    if let Some(r) = reporter.as_deref() {
                        r.notice(&format!("Panel {panel_id} failed: {error}"));
                    }
                    PanelRecord {
                        id: panel_id,
                        page: page_number,
                        panel: panel_number,
                        description: panel.scene.to_string(),
                        dialogue: panel.dialogue.to_string(),
                        image: None,
                        generated: false,
                        seed,
                    }
                }
            };

            if let Some(r) = reporter.as_deref() {
                r.complete_panel(record.generated);
            }
            records.push(record);

            if !options.panel_delay.is_zero() {
                std::thread::sleep(options.panel_delay);
            }
        }
    }

    let metadata = StoryMetadata {
        title: script.title.to_string(),
        style: script.style_label.to_string(),
        model: backend.kind().label().to_string(),
        characters: credits(script),
        pages: script.pages.len() as u32,
        panels: records,
        language: script.language.to_string(),
        created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        directory: out_dir.display().to_string(),
        base_seed: options.base_seed,
    };

    write_metadata(out_dir, &metadata)?;
    if multi_page {
        write_book_viewer(out_dir, &metadata)?;
    } else {
        write_strip_viewer(out_dir, &metadata)?;
    }

    Ok(metadata)
}

fn credits(script: &StoryScript) -> Vec<CharacterCredit> {
    script
        .cast()
        .into_iter()
        .map(|member| {
            let character = member.reference();
            let name = if script.language == "French" {
                character.localized_name
            } else {
                character.name
            };
            CharacterCredit {
                name: name.to_string(),
                original: character.source_name.to_string(),
            }
        })
        .collect()
}
