//! brief2pdf-pdf - PDF generation via Typst
//!
//! # Architecture
//!
//! The PDF generation pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts content blocks plus layout to Typst markup
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! Both are wrapped by [`TypstPageBuilder`], the default [`PageBuilder`].
//!
//! # Example
//!
//! ```ignore
//! use brief2pdf_core::assemble_text;
//! use brief2pdf_pdf::{LayoutConfig, PageBuilder, TypstPageBuilder};
//!
//! let blocks = assemble_text("# Brief\n\nOverview line.\n");
//! let pdf = TypstPageBuilder::new().build(&blocks, &LayoutConfig::default())?;
//! ```

mod builder;
mod compiler;
mod error;
mod transpiler;

pub use builder::{LayoutConfig, PageBuilder, TypstPageBuilder};
pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;
