//! HTML viewer writers for book and strip layouts

use crate::io::configuration::{BOOK_VIEWER_FILENAME, STRIP_VIEWER_FILENAME};
use crate::io::error::{Result, file_system_error};
use crate::report::metadata::StoryMetadata;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

// Panels that failed to generate are omitted from the grids; the metadata
// record is the place that keeps them.

/// Write the two-page book viewer into `dir/comic_book.html`
///
/// # Errors
///
/// Returns an error if the file write fails
pub fn write_book_viewer(dir: &Path, metadata: &StoryMetadata) -> Result<PathBuf> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(
        html,
        "    <title>{} - Bande Dessinée</title>",
        escape(&metadata.title)
    );
    html.push_str("    <style>\n");
    html.push_str(BOOK_CSS);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"comic-book\">\n");
    let _ = writeln!(
        html,
        "        <div class=\"comic-header\">\n            <h1>{}</h1>\n        </div>",
        escape(&metadata.title)
    );

    html.push_str("        <div class=\"characters-info\">\n            <strong>Personnages:</strong>\n");
    for character in &metadata.characters {
        let _ = writeln!(
            html,
            "            <span class=\"character-badge\">{}</span>",
            escape(&character.name)
        );
    }
    html.push_str("        </div>\n");

    for page in 1..=metadata.pages {
        let _ = writeln!(
            html,
            "        <div class=\"page\">\n            <div class=\"page-title\">Page {page}</div>\n            <div class=\"panels-grid\">"
        );
        for panel in metadata.panels.iter().filter(|p| p.page == page) {
            if let Some(ref image) = panel.image {
                let _ = writeln!(
                    html,
                    "                <div class=\"panel\">\n                    <div class=\"panel-number\">{}</div>\n                    <img src=\"{}\" alt=\"{}\">\n                </div>",
                    panel.panel,
                    escape(image),
                    escape(&panel.dialogue)
                );
            }
        }
        html.push_str("            </div>\n        </div>\n");
    }

    let _ = writeln!(
        html,
        "        <div class=\"comic-header\">\n            <p>Style: {}</p>\n            <p>Créé le: {}</p>\n            <p>Modèle: {}</p>\n        </div>",
        escape(&metadata.style),
        escape(&metadata.created_at),
        escape(&metadata.model)
    );
    html.push_str("    </div>\n</body>\n</html>\n");

    let path = dir.join(BOOK_VIEWER_FILENAME);
    std::fs::write(&path, html).map_err(|e| file_system_error(&path, "write viewer", e))?;
    Ok(path)
}

/// Write the single-strip viewer into `dir/comic.html`
///
/// # Errors
///
/// Returns an error if the file write fails
pub fn write_strip_viewer(dir: &Path, metadata: &StoryMetadata) -> Result<PathBuf> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n");
    let _ = writeln!(html, "    <title>{}</title>", escape(&metadata.title));
    html.push_str("    <style>\n");
    html.push_str(STRIP_CSS);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"comic\">\n");
    let _ = writeln!(html, "        <h1>{}</h1>", escape(&metadata.title));
    html.push_str("        <div class=\"panels\">\n");

    for panel in metadata.panels.iter().filter(|p| p.generated) {
        if let Some(ref image) = panel.image {
            let _ = writeln!(
                html,
                "            <div class=\"panel\">\n                <img src=\"{}\" alt=\"{}\">\n            </div>",
                escape(image),
                escape(&panel.dialogue)
            );
        }
    }

    html.push_str("        </div>\n");
    let _ = writeln!(
        html,
        "        <div class=\"info\">\n            <p>Style: {} | Modèle: {} | {} / {} panneaux</p>\n        </div>",
        escape(&metadata.style),
        escape(&metadata.model),
        metadata.generated_count(),
        metadata.panels.len()
    );
    html.push_str("    </div>\n</body>\n</html>\n");

    let path = dir.join(STRIP_VIEWER_FILENAME);
    std::fs::write(&path, html).map_err(|e| file_system_error(&path, "write viewer", e))?;
    Ok(path)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const BOOK_CSS: &str = "\
        body {
            font-family: 'Kalam', cursive;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        }
        .comic-book { max-width: 1200px; margin: 0 auto; }
        .comic-header {
            text-align: center;
            background: #ffeb3b;
            border: 4px solid #000;
            padding: 20px;
            margin-bottom: 20px;
            border-radius: 10px;
        }
        h1 {
            color: #e91e63;
            text-shadow: 3px 3px 0 #000;
            font-size: 48px;
            margin: 0;
            transform: rotate(-2deg);
        }
        .page {
            background: white;
            border: 4px solid #000;
            padding: 20px;
            margin-bottom: 30px;
            box-shadow: 10px 10px 0 rgba(0,0,0,0.3);
        }
        .page-title {
            background: #2196f3;
            color: white;
            padding: 10px;
            text-align: center;
            border: 2px solid #000;
            margin-bottom: 20px;
            font-size: 24px;
            font-weight: bold;
        }
        .panels-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
        }
        .panel {
            border: 3px solid #000;
            background: #fff;
            position: relative;
        }
        .panel img { width: 100%; height: auto; display: block; }
        .panel-number {
            position: absolute;
            top: 10px;
            left: 10px;
            background: #ff5722;
            color: white;
            width: 30px;
            height: 30px;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: bold;
            border: 2px solid #000;
            z-index: 10;
        }
        .characters-info {
            background: #4caf50;
            color: white;
            padding: 15px;
            border: 3px solid #000;
            margin-bottom: 20px;
            text-align: center;
            font-size: 18px;
        }
        .character-badge {
            display: inline-block;
            background: white;
            color: #4caf50;
            padding: 5px 15px;
            border-radius: 20px;
            margin: 0 10px;
            border: 2px solid #000;
        }
";

const STRIP_CSS: &str = "\
        body {
            font-family: 'Comic Sans MS', cursive;
            background: linear-gradient(135deg, #667eea, #764ba2);
            padding: 20px;
        }
        .comic {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 20px;
            border: 4px solid black;
            border-radius: 10px;
        }
        h1 {
            text-align: center;
            color: #e91e63;
            text-shadow: 3px 3px 0 black;
            font-size: 48px;
        }
        .panels {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
        }
        .panel {
            border: 3px solid black;
            box-shadow: 5px 5px 0 rgba(0,0,0,0.3);
        }
        .panel img { width: 100%; display: block; }
        .info {
            text-align: center;
            margin-top: 20px;
            padding: 15px;
            background: #4caf50;
            color: white;
            border: 3px solid black;
            border-radius: 10px;
        }
";
