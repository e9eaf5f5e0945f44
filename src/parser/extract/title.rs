use crate::parser::blocks::{Block, BlockKind};
use crate::parser::patterns::{TITLE_FALLBACK_MAX_LEN, TITLE_MAX_LEN};

pub const DEFAULT_TITLE: &str = "Untitled Recipe";

/// Styled candidates are considered within the first five blocks.
const SCAN_WINDOW: usize = 5;
/// The unstyled fallback only looks at the first three.
const FALLBACK_WINDOW: usize = 3;

/// Ordered heuristics over the top of the document, first success wins:
/// heading, bold-majority paragraph, centered block, then any short leading
/// text. Each tier is stricter about styling and looser about position than
/// the last. Returns None when nothing qualifies; the caller substitutes
/// [`DEFAULT_TITLE`].
pub fn detect(blocks: &[Block]) -> Option<String> {
    let window = &blocks[..blocks.len().min(SCAN_WINDOW)];

    if let Some(block) = window
        .iter()
        .find(|b| matches!(b.kind, BlockKind::Heading(1..=3)) && styled_len_ok(&b.text))
    {
        return Some(block.text.trim().to_string());
    }

    if let Some(block) = window
        .iter()
        .find(|b| b.kind == BlockKind::Paragraph && b.bold_majority && styled_len_ok(&b.text))
    {
        return Some(block.text.trim().to_string());
    }

    if let Some(block) = window.iter().find(|b| b.centered && styled_len_ok(&b.text)) {
        return Some(block.text.trim().to_string());
    }

    blocks[..blocks.len().min(FALLBACK_WINDOW)]
        .iter()
        .map(|b| b.text.trim())
        .find(|t| !t.is_empty() && t.len() < TITLE_FALLBACK_MAX_LEN)
        .map(str::to_string)
}

fn styled_len_ok(text: &str) -> bool {
    let len = text.trim().len();
    len > 0 && len < TITLE_MAX_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_wins() {
        let blocks = vec![
            Block::paragraph("posted by admin"),
            Block::heading(1, "Grandma's Soup"),
        ];
        assert_eq!(detect(&blocks).as_deref(), Some("Grandma's Soup"));
    }

    #[test]
    fn bold_paragraph_beats_centered() {
        let mut bold = Block::paragraph("Weeknight Chili");
        bold.bold_majority = true;
        let mut centered = Block::paragraph("a centered caption");
        centered.centered = true;
        let blocks = vec![centered, bold];
        assert_eq!(detect(&blocks).as_deref(), Some("Weeknight Chili"));
    }

    #[test]
    fn centered_fallback() {
        let mut centered = Block::paragraph("Picnic Salad");
        centered.centered = true;
        let blocks = vec![Block::new(crate::parser::blocks::BlockKind::Other, ""), centered];
        assert_eq!(detect(&blocks).as_deref(), Some("Picnic Salad"));
    }

    #[test]
    fn short_leading_text_fallback() {
        let blocks = vec![
            Block::paragraph("Quick Pickled Onions"),
            Block::paragraph("1 red onion"),
        ];
        assert_eq!(detect(&blocks).as_deref(), Some("Quick Pickled Onions"));
    }

    #[test]
    fn fallback_ignores_long_text() {
        let blocks = vec![Block::paragraph(&"a".repeat(150))];
        assert_eq!(detect(&blocks), None);
    }

    #[test]
    fn overlong_heading_rejected() {
        let blocks = vec![Block::heading(1, &"t".repeat(250))];
        assert_eq!(detect(&blocks), None);
    }

    #[test]
    fn heading_outside_window_ignored() {
        let mut blocks: Vec<Block> = (0..5)
            .map(|_| Block::new(crate::parser::blocks::BlockKind::Other, ""))
            .collect();
        blocks.push(Block::heading(1, "Too Late"));
        assert_eq!(detect(&blocks), None);
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(detect(&[]), None);
    }
}
