//! brief2pdf CLI - Command-line interface library
//!
//! Wires the classifier and the PDF backend into a one-shot conversion:
//!
//! ```ignore
//! use brief2pdf_cli::{Converter, ConverterConfig};
//!
//! let config = ConverterConfig::new("brief.md", "brief.pdf");
//! let output = Converter::with_typst(config).run()?;
//! println!("{}", output.display());
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render AgentGuard_Project_Brief.md in the current directory
//! brief2pdf
//!
//! # Render another brief
//! brief2pdf --root docs --source q3.md --output q3.pdf
//! ```

pub mod app;
pub mod config;
pub mod converter;

pub use app::{convert_command, convert_with_settings, init_logging, load_settings, run_cli, Cli};
pub use config::{ConverterConfig, FontSettings, PathSettings, Settings, SettingsError};
pub use converter::{ConvertError, Converter};
