//! Line classifier
//!
//! Grammar, checked in order on the line without its terminator:
//!
//! - blank -> spacer
//! - `# ` -> heading
//! - `## ` -> sub-heading
//! - `- ` -> bullet item
//! - anything else -> paragraph

use brief2pdf_ast::ContentBlock;

const HEADING_PREFIX: &str = "# ";
const SUB_HEADING_PREFIX: &str = "## ";
const BULLET_PREFIX: &str = "- ";

/// Classify one raw source line into a content block
///
/// Total: every line yields exactly one block. Prefixes are matched
/// before trailing whitespace is dropped, so `"# "` is an empty heading.
pub fn classify_line(raw: &str) -> ContentBlock {
    let line = raw.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return ContentBlock::spacer();
    }

    if let Some(rest) = line.strip_prefix(HEADING_PREFIX) {
        return ContentBlock::heading(rest.trim());
    }

    if let Some(rest) = line.strip_prefix(SUB_HEADING_PREFIX) {
        return ContentBlock::sub_heading(rest.trim());
    }

    if let Some(rest) = line.strip_prefix(BULLET_PREFIX) {
        return ContentBlock::bullet(rest.trim());
    }

    ContentBlock::paragraph(line.trim())
}
