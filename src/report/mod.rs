//! Metadata serialization and static HTML viewer assembly
//!
//! Both outputs are byte-for-byte deterministic given the same panel list
//! and timestamp: plain string assembly for the HTML, pretty-printed
//! `serde_json` for the record.

/// HTML viewer writers for book and strip layouts
pub mod html;
/// Serialized story record types
pub mod metadata;

pub use html::{write_book_viewer, write_strip_viewer};
pub use metadata::{CharacterCredit, PanelRecord, StoryMetadata, write_metadata};
