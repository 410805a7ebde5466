//! Configuration
//!
//! Settings are loaded from `brief2pdf.toml` in the project root when it
//! exists. Every section is optional; an empty file reproduces the
//! built-in defaults.
//!
//! ```toml
//! [paths]
//! source = "AgentGuard_Project_Brief.md"
//! output = "AgentGuard_Project_Brief.pdf"
//!
//! [document]
//! title = "AgentGuard Project Brief"
//! author = "AgentGuard"
//!
//! [page]
//! size = "a4"
//!
//! [page.margins]
//! left = 18.0
//! right = 18.0
//! top = 16.0
//! bottom = 16.0
//!
//! [fonts]
//! paths = ["fonts/Inter-Regular.ttf"]
//! ```

use std::path::{Path, PathBuf};

use brief2pdf_ast::{DocumentMeta, PageLayout, StyleSheet};
use brief2pdf_pdf::LayoutConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "brief2pdf.toml";

/// Errors loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub document: DocumentMeta,
    pub page: PageLayout,
    pub fonts: FontSettings,
}

/// Source and output locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            source: PathBuf::from("AgentGuard_Project_Brief.md"),
            output: PathBuf::from("AgentGuard_Project_Brief.pdf"),
        }
    }
}

/// Extra font files handed to the layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FontSettings {
    pub paths: Vec<PathBuf>,
}

/// Fully resolved inputs for one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub layout: LayoutConfig,
}

impl ConverterConfig {
    /// Default layout with the given paths
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `brief2pdf.toml` from `root`, or defaults if there is none
    pub fn discover(root: &Path) -> Result<Self, SettingsError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve paths against `root` into a converter configuration
    pub fn to_converter_config(&self, root: &Path) -> ConverterConfig {
        ConverterConfig {
            source: root.join(&self.paths.source),
            destination: root.join(&self.paths.output),
            layout: LayoutConfig {
                page: self.page,
                meta: self.document.clone(),
                styles: StyleSheet::brief(),
            },
        }
    }

    /// Font files resolved against `root`
    pub fn font_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.fonts.paths.iter().map(|p| root.join(p)).collect()
    }
}
