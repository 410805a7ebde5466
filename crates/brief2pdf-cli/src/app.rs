//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use brief2pdf_pdf::TypstPageBuilder;

use crate::config::Settings;
use crate::converter::Converter;

#[derive(Parser, Debug)]
#[command(name = "brief2pdf")]
#[command(author, version, about = "Render a project brief to PDF", long_about = None)]
pub struct Cli {
    /// Project root; relative paths are resolved against it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to brief2pdf.toml in the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source brief, overriding the configured path
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output PDF, overriding the configured path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI application
///
/// Prints the absolute output path on success.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = convert_command(&cli)?;
    println!("{}", output.display());

    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` takes precedence over `verbose`
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings for the invocation
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::discover(&cli.root)?,
    };

    if let Some(source) = &cli.source {
        settings.paths.source = source.clone();
    }
    if let Some(output) = &cli.output {
        settings.paths.output = output.clone();
    }

    Ok(settings)
}

/// Execute the conversion and return the absolute output path
pub fn convert_command(cli: &Cli) -> Result<PathBuf> {
    let settings = load_settings(cli).context("Failed to load configuration")?;
    debug!(?settings, "loaded settings");

    convert_with_settings(&settings, &cli.root)
}

/// Convert using already loaded settings
pub fn convert_with_settings(settings: &Settings, root: &Path) -> Result<PathBuf> {
    let config = settings.to_converter_config(root);
    let builder = TypstPageBuilder::new().with_fonts(settings.font_paths(root));
    let source = config.source.clone();

    Converter::new(config, builder)
        .run()
        .with_context(|| format!("Failed to convert {}", source.display()))
}
