//! Content blocks to Typst markup transpiler
//!
//! Every block becomes one top-level Typst element. Display text is
//! always passed as a string literal, never as markup, so characters
//! such as `*`, `#` or `_` in the brief are printed verbatim.

use std::fmt::Write as _;

use brief2pdf_ast::{BlockKind, ContentBlock, FontWeight, PageSize, Style};

use crate::builder::LayoutConfig;

/// Transpiler for converting content blocks to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a block sequence with its layout to a Typst document
    pub fn transpile(blocks: &[ContentBlock], config: &LayoutConfig) -> String {
        let mut output = Self::preamble(config);

        for block in blocks {
            output.push_str(&Self::transpile_block(block, config));
            output.push('\n');
        }

        output
    }

    /// Document metadata and page setup
    fn preamble(config: &LayoutConfig) -> String {
        let mut output = String::new();
        let margins = &config.page.margins;

        let _ = writeln!(
            output,
            "#set document(title: \"{}\", author: \"{}\")",
            escape_string(&config.meta.title),
            escape_string(&config.meta.author)
        );

        let size = match config.page.size {
            PageSize::A4 => "paper: \"a4\"".to_string(),
            PageSize::Custom {
                width_mm,
                height_mm,
            } => format!("width: {}mm, height: {}mm", width_mm, height_mm),
        };
        let _ = writeln!(
            output,
            "#set page({}, margin: (left: {}mm, right: {}mm, top: {}mm, bottom: {}mm))",
            size, margins.left, margins.right, margins.top, margins.bottom
        );
        output.push_str("#set par(justify: false)\n\n");

        output
    }

    /// Transpile a single block
    fn transpile_block(block: &ContentBlock, config: &LayoutConfig) -> String {
        let styles = &config.styles;
        let text = block.text().unwrap_or_default();

        match block.kind() {
            BlockKind::Spacer => format!("#v({}pt)", styles.spacer_height),
            BlockKind::Heading => Self::text_block(&styles.heading, text),
            BlockKind::SubHeading => Self::text_block(&styles.sub_heading, text),
            BlockKind::Paragraph => Self::text_block(&styles.paragraph, text),
            BlockKind::BulletItem => {
                let style = &styles.bullet;
                let gutter = (style.left_indent - style.bullet_indent).max(0.0);
                let body = format!(
                    "pad(left: {}pt, grid(columns: ({}pt, 1fr), {}, {}))",
                    style.bullet_indent,
                    gutter,
                    Self::text(style, &styles.bullet_glyph),
                    Self::text(style, text)
                );
                Self::styled_block(style, &body)
            }
        }
    }

    fn text_block(style: &Style, text: &str) -> String {
        Self::styled_block(style, &Self::text(style, text))
    }

    /// Wrap a code-mode body in a block carrying the style's spacing
    fn styled_block(style: &Style, body: &str) -> String {
        format!(
            "#block(above: {}pt, below: {}pt, {{ set par(leading: {}pt); {} }})",
            style.space_before,
            style.space_after,
            style.line_gap(),
            body
        )
    }

    /// A `text(...)` call with the style's font attributes
    fn text(style: &Style, content: &str) -> String {
        let mut args = String::new();

        if !style.fonts.is_empty() {
            let families: Vec<String> = style
                .fonts
                .iter()
                .map(|f| format!("\"{}\"", escape_string(f)))
                .collect();
            // a one-element Typst array needs the trailing comma
            let _ = write!(args, "font: ({},), ", families.join(", "));
        }

        // one-em line boxes make par leading the gap between em boxes
        args.push_str("top-edge: 1em, bottom-edge: \"baseline\", ");

        let weight = match style.weight {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
        };
        let _ = write!(
            args,
            "weight: \"{}\", size: {}pt, fill: rgb(\"{}\"), \"{}\"",
            weight,
            style.size,
            style.color.to_hex(),
            escape_string(content)
        );

        format!("text({})", args)
    }
}

/// Escape a value for use inside a Typst string literal
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
