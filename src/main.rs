//! Blockdown - a block-document to sanitized HTML renderer.
//!
//! This binary provides the CLI interface to the blockdown library,
//! reading JSON block documents from files or stdin and writing HTML.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use blockdown_config::Config;
use blockdown_core::{BlockdownError, LogSink, Result};
use blockdown_render::{RenderOptions, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Blockdown v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    // Load and merge configuration
    let config = load_config(cli);
    let options = RenderOptions::from_config(&config.render);
    debug!("Render options: {:?}", options);

    let mut output = String::new();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        output.push_str(&render_input(&input, &options)?);
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let input = fs::read_to_string(path)?;
            output.push_str(&render_input(&input, &options)?);
        }
    }

    match &cli.output {
        Some(path) => fs::write(path, output)?,
        None => {
            io::stdout().write_all(output.as_bytes())?;
            io::stdout().flush()?;
        }
    }

    Ok(())
}

/// Load configuration with optional overrides. Falls back to defaults on
/// failure so a bad config never blocks rendering.
fn load_config(cli: &Cli) -> Config {
    match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            Config::default()
        }
    }
}

/// Decode one JSON document and render it. Render diagnostics go to the log;
/// only undecodable input is an error.
fn render_input(input: &str, options: &RenderOptions) -> Result<String> {
    let doc: serde_json::Value =
        serde_json::from_str(input).map_err(|e| BlockdownError::Parse(e.to_string()))?;

    let mut sink = LogSink;
    Ok(Renderer::with_options(options.clone(), &mut sink).render(&doc))
}
