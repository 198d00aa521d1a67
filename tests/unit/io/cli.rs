//! Tests for command-line parsing and defaults

#[cfg(test)]
mod tests {
    use clap::Parser;
    use panelforge::backend::generator::BackendKind;
    use panelforge::io::cli::{Cli, Command};
    use std::path::PathBuf;

    // Tests the book subcommand parses with all defaults in place
    // Verified by changing any default value
    #[test]
    fn test_book_defaults() {
        let cli = Cli::try_parse_from(["panelforge", "book"]).expect("parse");

        assert!(matches!(cli.command, Command::Book));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.backend, BackendKind::Sdxl);
        assert_eq!(cli.output, PathBuf::from("comics"));
        assert_eq!(cli.delay_ms, 2000);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests the strip subcommand captures references and its own options
    // Verified by dropping the character default
    #[test]
    fn test_strip_arguments() {
        let cli = Cli::try_parse_from([
            "panelforge",
            "--seed",
            "42",
            "--backend",
            "sd15",
            "--quiet",
            "strip",
            "refs/monica",
            "--character",
            "monica",
        ])
        .expect("parse");

        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.backend, BackendKind::Sd15);
        assert!(!cli.should_show_progress());
        match cli.command {
            Command::Strip {
                references,
                processed,
                character,
            } => {
                assert_eq!(references, PathBuf::from("refs/monica"));
                assert_eq!(processed, None);
                assert_eq!(character, "monica");
            }
            Command::Book => unreachable!("expected strip subcommand"),
        }
    }

    // Tests the strip character falls back to the default cast member
    // Verified by removing the default attribute
    #[test]
    fn test_strip_character_default() {
        let cli = Cli::try_parse_from(["panelforge", "strip", "refs"]).expect("parse");
        match cli.command {
            Command::Strip { character, .. } => assert_eq!(character, "jimmy_five"),
            Command::Book => unreachable!("expected strip subcommand"),
        }
    }

    // Tests unknown backend spellings are rejected at parse time
    // Verified by accepting arbitrary backend strings
    #[test]
    fn test_unknown_backend_rejected() {
        assert!(Cli::try_parse_from(["panelforge", "--backend", "sd3", "book"]).is_err());
    }

    // Tests a subcommand is required
    // Verified by making the subcommand optional
    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["panelforge"]).is_err());
    }
}
