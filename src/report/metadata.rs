//! Serialized story record types

use crate::io::configuration::METADATA_FILENAME;
use crate::io::error::{Result, file_system_error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One panel's outcome in the story record
///
/// Invariant: `image` is `Some` and the named file exists iff `generated`
/// is true.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelRecord {
    /// Ordinal across the whole story, 1-based
    pub id: usize,
    /// Page number, 1-based
    pub page: u32,
    /// Panel number within the page, 1-based
    pub panel: u32,
    /// Scene description fed to the backend
    pub description: String,
    /// Dialogue rendered into the bubble
    pub dialogue: String,
    /// Output image file name, relative to the run directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether generation succeeded
    pub generated: bool,
    /// Seed passed to the backend for this panel
    pub seed: u64,
}

/// Character credit line in the story record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterCredit {
    /// Display name used in the viewer
    pub name: String,
    /// Original Brazilian name
    pub original: String,
}

/// The full descriptive record of one run, written once after generation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoryMetadata {
    /// Story title
    pub title: String,
    /// Art style label
    pub style: String,
    /// Generation backend label
    pub model: String,
    /// Characters appearing in the story
    pub characters: Vec<CharacterCredit>,
    /// Number of pages
    pub pages: u32,
    /// Ordered panel outcomes
    pub panels: Vec<PanelRecord>,
    /// Dialogue language
    pub language: String,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    /// Absolute run directory the files were written into
    pub directory: String,
    /// Base seed the per-panel seeds drift from
    pub base_seed: u64,
}

impl StoryMetadata {
    /// Number of panels that generated successfully
    pub fn generated_count(&self) -> usize {
        self.panels.iter().filter(|panel| panel.generated).count()
    }
}

/// Write the story record as pretty-printed JSON into `dir/metadata.json`
///
/// # Errors
///
/// Returns an error if serialization or the file write fails
pub fn write_metadata(dir: &Path, metadata: &StoryMetadata) -> Result<PathBuf> {
    let path = dir.join(METADATA_FILENAME);
    let json = serde_json::to_string_pretty(metadata)?;
    std::fs::write(&path, json).map_err(|e| file_system_error(&path, "write metadata", e))?;
    Ok(path)
}
