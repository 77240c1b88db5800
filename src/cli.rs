//! Command-line interface for Blockdown.
//!
//! Provides argument parsing for the `bd` binary.

use clap::Parser;
use std::path::PathBuf;

/// Blockdown - a block-document to sanitized HTML renderer.
///
/// Reads JSON block documents and writes sanitized HTML fragments suitable
/// for embedding in a page's content region.
#[derive(Parser, Debug)]
#[command(
    name = "bd",
    author = "Blockdown Contributors",
    version,
    about = "Render JSON block documents to sanitized HTML",
    after_help = "Repository: https://github.com/blockdown/blockdown-rs\n\n\
                  Examples:\n  \
                  cat page.json | bd\n  \
                  bd page.json -o page.html\n  \
                  bd -c custom.toml page.json"
)]
pub struct Cli {
    /// Input document files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use blockdown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["bd"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.config.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.show_paths);
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["bd", "page.json"]);
        assert_eq!(cli.files.len(), 1);
        assert_eq!(cli.files[0], PathBuf::from("page.json"));
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "bd",
            "-l",
            "debug",
            "-o",
            "out.html",
            "-c",
            "custom.toml",
            "page.json",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.files.len(), 1);
    }

    #[test]
    fn test_should_read_stdin() {
        let cli = Cli::parse_from(["bd"]);
        assert!(cli.should_read_stdin());

        let cli = Cli::parse_from(["bd", "page.json"]);
        assert!(!cli.should_read_stdin());
    }
}
