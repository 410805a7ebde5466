//! Behavioral tests for the brief grammar
//!
//! Literal classification cases, the end-to-end block sequence and the
//! one-block-per-line property.

use brief2pdf_ast::{BlockKind, ContentBlock};
use brief2pdf_core::{assemble, assemble_text, classify_line, split_lines};
use proptest::prelude::*;

#[test]
fn test_heading() {
    assert_eq!(classify_line("# Title"), ContentBlock::heading("Title"));
}

#[test]
fn test_sub_heading() {
    assert_eq!(classify_line("## Section"), ContentBlock::sub_heading("Section"));
}

#[test]
fn test_bullet_item() {
    assert_eq!(classify_line("- item one"), ContentBlock::bullet("item one"));
}

#[test]
fn test_empty_line() {
    assert_eq!(classify_line(""), ContentBlock::spacer());
}

#[test]
fn test_paragraph() {
    assert_eq!(
        classify_line("Just a sentence."),
        ContentBlock::paragraph("Just a sentence.")
    );
}

#[test]
fn test_hash_without_space_is_paragraph() {
    assert_eq!(classify_line("#NoSpace"), ContentBlock::paragraph("#NoSpace"));
}

/// Input:
/// ```text
/// # Brief
///
/// Overview line.
/// - point a
/// - point b
/// ```
#[test]
fn test_end_to_end_sequence() {
    let blocks = assemble_text("# Brief\n\nOverview line.\n- point a\n- point b\n");

    assert_eq!(
        blocks,
        vec![
            ContentBlock::heading("Brief"),
            ContentBlock::spacer(),
            ContentBlock::paragraph("Overview line."),
            ContentBlock::bullet("point a"),
            ContentBlock::bullet("point b"),
        ]
    );
}

#[test]
fn test_assembly_is_idempotent() {
    let text = "# A\n## B\n\n- c\nd\n";
    assert_eq!(assemble_text(text), assemble_text(text));
}

#[test]
fn test_text_is_none_only_for_spacers() {
    for block in assemble_text("# a\n\n## b\n- c\nd") {
        assert_eq!(block.text().is_none(), block.kind() == BlockKind::Spacer);
    }
}

proptest! {
    #[test]
    fn prop_one_block_per_line(text in "([#\\- a-z]{0,12}(\n|\r\n|\r))*[#\\- a-z]{0,12}") {
        let lines = split_lines(&text);
        let blocks = assemble(&lines);
        prop_assert_eq!(blocks.len(), lines.len());
    }

    #[test]
    fn prop_blank_lines_become_spacers(lines in prop::collection::vec("[ \t]{0,4}|[a-z#\\- ]{1,10}", 0..20)) {
        let blocks = assemble(&lines);
        prop_assert_eq!(blocks.len(), lines.len());
        for (line, block) in lines.iter().zip(&blocks) {
            prop_assert_eq!(line.trim().is_empty(), block.is_spacer());
        }
    }
}
