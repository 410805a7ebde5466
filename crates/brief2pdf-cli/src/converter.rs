//! Rendering driver
//!
//! One-shot conversion: check the source exists, read it, classify its
//! lines, hand the blocks to a [`PageBuilder`] and write the PDF. Any
//! failure aborts the whole run; a partially written output is left as is.

use std::fs;
use std::path::PathBuf;

use brief2pdf_ast::ContentBlock;
use brief2pdf_core::{assemble_text, BlockStats};
use brief2pdf_pdf::{PageBuilder, PdfError, TypstPageBuilder};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ConverterConfig;

/// Result type for conversions
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Source brief not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render PDF: {0}")]
    Render(#[from] PdfError),

    #[error("Failed to write output {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Converts one brief to one PDF
pub struct Converter<B: PageBuilder> {
    config: ConverterConfig,
    builder: B,
}

impl Converter<TypstPageBuilder> {
    /// Converter using the Typst backend with built-in fonts
    pub fn with_typst(config: ConverterConfig) -> Self {
        Self::new(config, TypstPageBuilder::new())
    }
}

impl<B: PageBuilder> Converter<B> {
    pub fn new(config: ConverterConfig, builder: B) -> Self {
        Self { config, builder }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Read and classify the source without rendering
    pub fn blocks(&self) -> Result<Vec<ContentBlock>> {
        let source = &self.config.source;
        if !source.exists() {
            return Err(ConvertError::SourceNotFound(source.clone()));
        }

        let text = fs::read_to_string(source).map_err(|e| ConvertError::Read {
            path: source.clone(),
            source: e,
        })?;

        let blocks = assemble_text(&text);
        info!(source = %source.display(), "{}", BlockStats::from_blocks(&blocks));
        Ok(blocks)
    }

    /// Run the conversion and return the absolute output path
    pub fn run(&self) -> Result<PathBuf> {
        let blocks = self.blocks()?;

        let pdf = self.builder.build(&blocks, &self.config.layout)?;

        let destination = &self.config.destination;
        fs::write(destination, &pdf).map_err(|e| ConvertError::Write {
            path: destination.clone(),
            source: e,
        })?;
        debug!(bytes = pdf.len(), output = %destination.display(), "wrote pdf");

        Ok(fs::canonicalize(destination).unwrap_or_else(|_| destination.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief2pdf_pdf::LayoutConfig;

    struct FixedBuilder;

    impl PageBuilder for FixedBuilder {
        fn build(
            &self,
            blocks: &[ContentBlock],
            _config: &LayoutConfig,
        ) -> brief2pdf_pdf::Result<Vec<u8>> {
            Ok(format!("%PDF fake {}", blocks.len()).into_bytes())
        }
    }

    struct FailingBuilder;

    impl PageBuilder for FailingBuilder {
        fn build(
            &self,
            _blocks: &[ContentBlock],
            _config: &LayoutConfig,
        ) -> brief2pdf_pdf::Result<Vec<u8>> {
            Err(PdfError::Compilation("boom".to_string()))
        }
    }

    #[test]
    fn test_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::new(dir.path().join("missing.md"), dir.path().join("out.pdf"));
        let err = Converter::new(config, FixedBuilder).run().unwrap_err();

        assert!(matches!(err, ConvertError::SourceNotFound(_)));
        assert!(err.to_string().starts_with("Source brief not found:"));
        assert!(!dir.path().join("out.pdf").exists());
    }

    #[test]
    fn test_run_writes_builder_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("brief.md");
        fs::write(&source, "# A\n\nb\n").unwrap();
        let config = ConverterConfig::new(&source, dir.path().join("out.pdf"));

        let output = Converter::new(config, FixedBuilder).run().unwrap();

        assert!(output.is_absolute());
        assert_eq!(fs::read(&output).unwrap(), b"%PDF fake 3");
    }

    #[test]
    fn test_render_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("brief.md");
        fs::write(&source, "text").unwrap();
        let config = ConverterConfig::new(&source, dir.path().join("out.pdf"));

        let err = Converter::new(config, FailingBuilder).run().unwrap_err();
        assert!(matches!(err, ConvertError::Render(PdfError::Compilation(_))));
        assert!(!dir.path().join("out.pdf").exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("brief.md");
        fs::write(&source, "text").unwrap();
        let config = ConverterConfig::new(&source, dir.path().join("no/such/dir/out.pdf"));

        let err = Converter::new(config, FixedBuilder).run().unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }

    #[test]
    fn test_non_utf8_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("brief.md");
        fs::write(&source, [0xff, 0xfe, 0x00]).unwrap();
        let config = ConverterConfig::new(&source, dir.path().join("out.pdf"));

        let err = Converter::new(config, FixedBuilder).blocks().unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
    }
}
