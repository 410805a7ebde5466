//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. The engine always
//! searches system fonts and carries the fonts embedded in typst-kit, so
//! text is shaped even when no font files are configured.

use std::path::Path;

use tracing::{debug, warn};
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&Path>(markup, &[])
    }

    /// Compile with extra font files (TTF/OTF) made available to Typst
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let mut builder = TypstEngine::builder()
            .main_file(markup.to_string())
            .search_fonts_with(TypstKitFontOptions::default());

        for font_path in font_paths {
            let font_path = font_path.as_ref();
            let font_bytes = std::fs::read(font_path).map_err(|source| PdfError::Font {
                path: font_path.to_path_buf(),
                source,
            })?;
            debug!(font = %font_path.display(), "loaded font");
            builder = builder.fonts([font_bytes]);
        }

        let engine = builder.build();
        let compiled = engine.compile();

        for warning in &compiled.warnings {
            warn!("typst: {}", warning.message);
        }

        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}
