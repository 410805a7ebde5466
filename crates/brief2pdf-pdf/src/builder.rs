//! Page builder abstraction
//!
//! The driver only needs "blocks + layout in, PDF bytes out". Keeping that
//! behind [`PageBuilder`] lets callers swap the Typst backend for a test
//! double.

use std::path::PathBuf;

use brief2pdf_ast::{ContentBlock, DocumentMeta, PageLayout, StyleSheet};
use tracing::debug;

use crate::compiler::Compiler;
use crate::error::Result;
use crate::transpiler::Transpiler;

/// Everything the layout engine needs besides the blocks themselves
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutConfig {
    pub page: PageLayout,
    pub meta: DocumentMeta,
    pub styles: StyleSheet,
}

/// Paginates styled blocks into a PDF byte stream
pub trait PageBuilder {
    /// Lay out `blocks` in order and return the encoded PDF
    fn build(&self, blocks: &[ContentBlock], config: &LayoutConfig) -> Result<Vec<u8>>;
}

/// [`PageBuilder`] backed by Typst
#[derive(Debug, Clone, Default)]
pub struct TypstPageBuilder {
    font_paths: Vec<PathBuf>,
}

impl TypstPageBuilder {
    /// Create a builder using only the engine's built-in fonts
    pub fn new() -> Self {
        Self::default()
    }

    /// Add font files made available to the engine
    pub fn with_fonts(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.font_paths.extend(paths);
        self
    }

    /// Configured font files
    pub fn font_paths(&self) -> &[PathBuf] {
        &self.font_paths
    }
}

impl PageBuilder for TypstPageBuilder {
    fn build(&self, blocks: &[ContentBlock], config: &LayoutConfig) -> Result<Vec<u8>> {
        let markup = Transpiler::transpile(blocks, config);
        debug!(
            blocks = blocks.len(),
            markup_bytes = markup.len(),
            "transpiled blocks to typst"
        );

        let pdf = Compiler::compile_with_fonts(&markup, &self.font_paths)?;
        debug!(pdf_bytes = pdf.len(), "compiled pdf");
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_fonts() {
        let builder = TypstPageBuilder::new().with_fonts([PathBuf::from("a.ttf")]);
        assert_eq!(builder.font_paths(), &[PathBuf::from("a.ttf")]);
    }

    #[test]
    fn test_build_produces_pdf() {
        let blocks = vec![
            ContentBlock::heading("Brief"),
            ContentBlock::spacer(),
            ContentBlock::paragraph("Overview line."),
            ContentBlock::bullet("point a"),
        ];
        let pdf = TypstPageBuilder::new()
            .build(&blocks, &LayoutConfig::default())
            .expect("build failed");
        assert!(pdf.starts_with(b"%PDF"));
        assert!(
            pdf.windows(5).any(|w| w == b"/Font"),
            "text was laid out without a font"
        );
    }

    #[test]
    fn test_build_empty_document() {
        let pdf = TypstPageBuilder::new()
            .build(&[], &LayoutConfig::default())
            .expect("build failed");
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_trait_object() {
        let builder: Box<dyn PageBuilder> = Box::new(TypstPageBuilder::new());
        let pdf = builder
            .build(&[ContentBlock::paragraph("x")], &LayoutConfig::default())
            .expect("build failed");
        assert!(!pdf.is_empty());
    }
}
