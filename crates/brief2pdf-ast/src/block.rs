//! Content blocks produced from source lines
//!
//! Every source line maps to exactly one [`ContentBlock`]. Blank lines
//! become spacers; everything else carries its display text.

use serde::{Deserialize, Serialize};

/// Kind of a content block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Top-level heading (`# `)
    Heading,
    /// Section heading (`## `)
    SubHeading,
    /// Bullet list item (`- `)
    BulletItem,
    /// Plain paragraph
    Paragraph,
    /// Vertical gap for a blank line
    Spacer,
}

impl BlockKind {
    /// Whether blocks of this kind carry display text
    pub fn has_text(self) -> bool {
        self != BlockKind::Spacer
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockKind::Heading => "heading",
            BlockKind::SubHeading => "sub-heading",
            BlockKind::BulletItem => "bullet",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Spacer => "spacer",
        };
        f.write_str(name)
    }
}

/// A single semantic unit derived from one source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    kind: BlockKind,
    text: String,
}

impl ContentBlock {
    /// Create a heading block
    pub fn heading(text: impl Into<String>) -> Self {
        Self::with_text(BlockKind::Heading, text)
    }

    /// Create a sub-heading block
    pub fn sub_heading(text: impl Into<String>) -> Self {
        Self::with_text(BlockKind::SubHeading, text)
    }

    /// Create a bullet item block
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::with_text(BlockKind::BulletItem, text)
    }

    /// Create a paragraph block
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_text(BlockKind::Paragraph, text)
    }

    /// Create a spacer block
    pub fn spacer() -> Self {
        Self {
            kind: BlockKind::Spacer,
            text: String::new(),
        }
    }

    fn with_text(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The block kind
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Display text, `None` for spacers
    pub fn text(&self) -> Option<&str> {
        if self.kind.has_text() {
            Some(&self.text)
        } else {
            None
        }
    }

    /// Check if this block is a spacer
    pub fn is_spacer(&self) -> bool {
        self.kind == BlockKind::Spacer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_has_no_text() {
        let block = ContentBlock::spacer();
        assert!(block.is_spacer());
        assert_eq!(block.text(), None);
    }

    #[test]
    fn test_heading_with_empty_text() {
        let block = ContentBlock::heading("");
        assert_eq!(block.kind(), BlockKind::Heading);
        assert_eq!(block.text(), Some(""));
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(ContentBlock::sub_heading("a").kind(), BlockKind::SubHeading);
        assert_eq!(ContentBlock::bullet("a").kind(), BlockKind::BulletItem);
        assert_eq!(ContentBlock::paragraph("a").kind(), BlockKind::Paragraph);
    }

    #[test]
    fn test_serialize_block() {
        let json = serde_json::to_string(&ContentBlock::bullet("point a")).unwrap();
        assert_eq!(json, r#"{"kind":"bullet_item","text":"point a"}"#);
    }

    #[test]
    fn test_serialize_spacer_has_empty_text() {
        let json = serde_json::to_string(&ContentBlock::spacer()).unwrap();
        assert_eq!(json, r#"{"kind":"spacer","text":""}"#);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BlockKind::SubHeading.to_string(), "sub-heading");
        assert_eq!(BlockKind::Spacer.to_string(), "spacer");
    }
}
