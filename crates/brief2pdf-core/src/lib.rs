//! brief2pdf-core - Brief text to content blocks
//!
//! Classifies each line of a brief by its prefix and assembles the
//! ordered block sequence handed to the PDF backend.
//!
//! # Example
//!
//! ```
//! use brief2pdf_ast::ContentBlock;
//! use brief2pdf_core::assemble_text;
//!
//! let blocks = assemble_text("# Brief\n\n- point a\n");
//! assert_eq!(
//!     blocks,
//!     vec![
//!         ContentBlock::heading("Brief"),
//!         ContentBlock::spacer(),
//!         ContentBlock::bullet("point a"),
//!     ]
//! );
//! ```

pub mod assembler;
pub mod classifier;

pub use assembler::{assemble, assemble_text, split_lines, BlockStats};
pub use classifier::classify_line;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
