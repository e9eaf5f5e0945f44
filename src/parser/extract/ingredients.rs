use crate::parser::blocks::{Block, BlockKind};
use crate::parser::extract::list_items;
use crate::parser::patterns::{has_measurement, strip_bullet_prefix};
use crate::parser::sections::{content_blocks, find_span, SectionKind, SectionSpan};

/// Positional-fallback candidates must have text length inside (3, 200).
const MIN_FALLBACK_LEN: usize = 3;
const MAX_FALLBACK_LEN: usize = 200;

type Strategy = fn(&[SectionSpan], &[Block]) -> Option<Vec<String>>;

/// Tried in order; stronger structural signals win over weaker textual ones.
const STRATEGIES: &[Strategy] = &[
    from_section,
    from_measured_lists,
    from_inline_bullets,
    from_leading_measurements,
];

pub fn extract(spans: &[SectionSpan], blocks: &[Block]) -> Vec<String> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(spans, blocks))
        .unwrap_or_default()
}

/// An explicit ingredients header is trusted over every heuristic, even when
/// its content range turns out to be empty.
fn from_section(spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    find_span(spans, SectionKind::Ingredients)
        .map(|span| list_items(content_blocks(span, blocks)))
}

/// Every list whose items are more than half measurement-bearing contributes
/// all of its items.
fn from_measured_lists(_spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    let mut out = Vec::new();
    for block in blocks.iter().filter(|b| b.is_list()) {
        let items: Vec<&str> = block
            .items
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect();
        if items.is_empty() {
            continue;
        }
        let measured = items.iter().filter(|i| has_measurement(i)).count();
        if measured * 2 > items.len() {
            out.extend(items.iter().map(|i| i.to_string()));
        }
    }
    (!out.is_empty()).then_some(out)
}

/// Paragraphs written as "• 2 cups flour" lines, bullet stripped.
fn from_inline_bullets(_spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    let out: Vec<String> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Paragraph)
        .filter_map(|b| strip_bullet_prefix(b.text.trim()))
        .filter(|rest| has_measurement(rest))
        .map(str::to_string)
        .collect();
    (!out.is_empty()).then_some(out)
}

/// Anything measurement-like before the instructions begin.
fn from_leading_measurements(spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    let limit = find_span(spans, SectionKind::Instructions)
        .map(|s| s.start)
        .unwrap_or(blocks.len());
    let out: Vec<String> = blocks[..limit]
        .iter()
        .map(|b| b.text.trim())
        .filter(|t| t.len() > MIN_FALLBACK_LEN && t.len() < MAX_FALLBACK_LEN && has_measurement(t))
        .map(str::to_string)
        .collect();
    (!out.is_empty()).then_some(out)
}
