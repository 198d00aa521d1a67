//! Tests for the static HTML viewers

#[cfg(test)]
mod tests {
    use panelforge::report::html::{write_book_viewer, write_strip_viewer};
    use panelforge::report::metadata::{CharacterCredit, PanelRecord, StoryMetadata};
    use tempfile::TempDir;

    fn record(id: usize, page: u32, generated: bool) -> PanelRecord {
        PanelRecord {
            id,
            page,
            panel: id as u32,
            description: format!("scene {id}"),
            dialogue: format!("line {id}"),
            image: generated.then(|| format!("page{page}_panel{id}.png")),
            generated,
            seed: 100 + id as u64,
        }
    }

    fn book_metadata() -> StoryMetadata {
        StoryMetadata {
            title: "L'Aventure du Trésor Perdu".to_string(),
            style: "Monica's Gang".to_string(),
            model: "SDXL".to_string(),
            characters: vec![
                CharacterCredit {
                    name: "Jimmy Cinq".to_string(),
                    original: "Cebolinha".to_string(),
                },
                CharacterCredit {
                    name: "Monica".to_string(),
                    original: "Mônica".to_string(),
                },
            ],
            pages: 2,
            panels: vec![
                record(1, 1, true),
                record(2, 1, false),
                record(3, 2, true),
            ],
            language: "French".to_string(),
            created_at: "2026-08-30 10:00:00".to_string(),
            directory: "/tmp/comic_book_1".to_string(),
            base_seed: 4242,
        }
    }

    // Tests the book viewer lists pages, character badges, and only the
    // panels that actually generated
    // Verified by rendering failed panels as broken images
    #[test]
    fn test_book_viewer_content() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_book_viewer(dir.path(), &book_metadata()).expect("write");

        assert!(path.ends_with("comic_book.html"));
        let html = std::fs::read_to_string(&path).expect("read");

        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("L'Aventure du Trésor Perdu"));
        assert!(html.contains("Page 1"));
        assert!(html.contains("Page 2"));
        assert!(html.contains("Jimmy Cinq"));
        assert!(html.contains("page1_panel1.png"));
        assert!(html.contains("page2_panel3.png"));
        assert!(!html.contains("page1_panel2.png"));
        assert!(html.contains("Modèle: SDXL"));
    }

    // Tests the strip viewer reports the generated-over-total panel tally
    // Verified by counting failed panels as shown
    #[test]
    fn test_strip_viewer_content() {
        let mut metadata = book_metadata();
        metadata.pages = 1;
        metadata.panels = vec![record(1, 1, true), record(2, 1, false)];

        let dir = TempDir::new().expect("tempdir");
        let path = write_strip_viewer(dir.path(), &metadata).expect("write");

        assert!(path.ends_with("comic.html"));
        let html = std::fs::read_to_string(&path).expect("read");
        assert!(html.contains("page1_panel1.png"));
        assert!(!html.contains("page1_panel2.png"));
        assert!(html.contains("1 / 2 panneaux"));
    }

    // Tests HTML metacharacters in titles and dialogue are escaped
    // Verified by writing fields into the markup verbatim
    #[test]
    fn test_escaping() {
        let mut metadata = book_metadata();
        metadata.title = "Tom & Jerry <3".to_string();
        metadata.panels = vec![PanelRecord {
            dialogue: "\"quoted\" & <tagged>".to_string(),
            ..record(1, 1, true)
        }];

        let dir = TempDir::new().expect("tempdir");
        let path = write_book_viewer(dir.path(), &metadata).expect("write");
        let html = std::fs::read_to_string(&path).expect("read");

        assert!(html.contains("Tom &amp; Jerry &lt;3"));
        assert!(html.contains("&quot;quoted&quot; &amp; &lt;tagged&gt;"));
        assert!(!html.contains("<tagged>"));
    }
}
