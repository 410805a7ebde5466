//! Page geometry and document metadata

use serde::{Deserialize, Serialize};

/// Page size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4, 210 x 297 mm
    #[default]
    A4,
    /// Arbitrary size in millimetres
    Custom { width_mm: f64, height_mm: f64 },
}

impl PageSize {
    /// Width and height in millimetres
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 18.0,
            right: 18.0,
            top: 16.0,
            bottom: 16.0,
        }
    }
}

/// Page geometry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub size: PageSize,
    pub margins: Margins,
}

/// Document-level PDF metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMeta {
    pub title: String,
    pub author: String,
}

impl DocumentMeta {
    /// Create metadata with a title and author
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::new("AgentGuard Project Brief", "AgentGuard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_a4() {
        let layout = PageLayout::default();
        assert_eq!(layout.size.dimensions_mm(), (210.0, 297.0));
        assert_eq!(layout.margins.left, 18.0);
        assert_eq!(layout.margins.bottom, 16.0);
    }

    #[test]
    fn test_custom_size() {
        let size = PageSize::Custom {
            width_mm: 100.0,
            height_mm: 150.0,
        };
        assert_eq!(size.dimensions_mm(), (100.0, 150.0));
    }

    #[test]
    fn test_default_meta() {
        let meta = DocumentMeta::default();
        assert_eq!(meta.title, "AgentGuard Project Brief");
        assert_eq!(meta.author, "AgentGuard");
    }
}
