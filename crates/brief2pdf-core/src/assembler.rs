//! Document assembler
//!
//! Splits source text into lines and classifies them in order. The output
//! always has one block per line: nothing is merged, dropped or reordered.

use brief2pdf_ast::{BlockKind, ContentBlock};

use crate::classifier::classify_line;

/// Split text into lines, accepting `\n`, `\r\n` and lone `\r`
///
/// A terminator at the very end does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Classify every line, preserving order
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Vec<ContentBlock> {
    lines.iter().map(|line| classify_line(line.as_ref())).collect()
}

/// Split and classify a whole source text
pub fn assemble_text(text: &str) -> Vec<ContentBlock> {
    assemble(&split_lines(text))
}

/// Block counts per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockStats {
    pub headings: usize,
    pub sub_headings: usize,
    pub bullets: usize,
    pub paragraphs: usize,
    pub spacers: usize,
}

impl BlockStats {
    /// Count the blocks of each kind
    pub fn from_blocks(blocks: &[ContentBlock]) -> Self {
        let mut stats = Self::default();
        for block in blocks {
            match block.kind() {
                BlockKind::Heading => stats.headings += 1,
                BlockKind::SubHeading => stats.sub_headings += 1,
                BlockKind::BulletItem => stats.bullets += 1,
                BlockKind::Paragraph => stats.paragraphs += 1,
                BlockKind::Spacer => stats.spacers += 1,
            }
        }
        stats
    }

    /// Total number of blocks
    pub fn total(&self) -> usize {
        self.headings + self.sub_headings + self.bullets + self.paragraphs + self.spacers
    }
}

impl std::fmt::Display for BlockStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} blocks ({} headings, {} sub-headings, {} bullets, {} paragraphs, {} spacers)",
            self.total(),
            self.headings,
            self.sub_headings,
            self.bullets,
            self.paragraphs,
            self.spacers
        )
    }
}
