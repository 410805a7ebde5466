//! brief2pdf-ast - Content model for brief documents
//!
//! This crate provides the types shared by the classifier, the PDF
//! backend and the command-line driver:
//!
//! - [`ContentBlock`] / [`BlockKind`] - one semantic unit per source line
//! - [`Style`] / [`StyleSheet`] - per-kind visual formatting
//! - [`PageLayout`] / [`DocumentMeta`] - page geometry and PDF metadata

pub mod block;
pub mod layout;
pub mod style;

pub use block::{BlockKind, ContentBlock};
pub use layout::{DocumentMeta, Margins, PageLayout, PageSize};
pub use style::{Color, ColorError, FontWeight, Style, StyleSheet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
