use crate::parser::blocks::{Block, BlockKind};
use crate::parser::extract::list_items;
use crate::parser::patterns::{has_measurement, strip_step_prefix};
use crate::parser::sections::{content_blocks, find_span, SectionKind, SectionSpan};

/// Prose candidates must be longer than a fragment and shorter than a wall
/// of text.
const MIN_PROSE_LEN: usize = 20;
const MAX_PROSE_LEN: usize = 1000;

type Strategy = fn(&[SectionSpan], &[Block]) -> Option<Vec<String>>;

const STRATEGIES: &[Strategy] = &[
    from_section,
    from_ordered_lists,
    from_inline_steps,
    from_trailing_prose,
];

pub fn extract(spans: &[SectionSpan], blocks: &[Block]) -> Vec<String> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(spans, blocks))
        .unwrap_or_default()
}

/// An explicit instructions header is trusted over every heuristic, even when
/// its content range turns out to be empty.
fn from_section(spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    find_span(spans, SectionKind::Instructions)
        .map(|span| list_items(content_blocks(span, blocks)))
}

/// Ordered lists are a strong instruction signal; every item of every ordered
/// list is taken unconditionally.
fn from_ordered_lists(_spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    let out: Vec<String> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::OrderedList)
        .flat_map(|b| b.items.iter())
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();
    (!out.is_empty()).then_some(out)
}

/// "Step 1:" prefixes are stripped; otherwise long non-measurement text is
/// treated as prose, i.e. a step.
fn from_inline_steps(_spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    let mut out = Vec::new();
    for block in blocks.iter().filter(|b| b.kind == BlockKind::Paragraph) {
        let text = block.text.trim();
        if let Some(rest) = strip_step_prefix(text) {
            if !rest.is_empty() {
                out.push(rest.to_string());
            }
        } else if text.len() > MIN_PROSE_LEN && !has_measurement(text) {
            out.push(text.to_string());
        }
    }
    (!out.is_empty()).then_some(out)
}

/// Paragraph-sized text after the ingredients end.
fn from_trailing_prose(spans: &[SectionSpan], blocks: &[Block]) -> Option<Vec<String>> {
    let start = find_span(spans, SectionKind::Ingredients)
        .map(|s| s.end)
        .unwrap_or(0);
    let out: Vec<String> = blocks[start.min(blocks.len())..]
        .iter()
        .filter(|b| b.kind == BlockKind::Paragraph)
        .map(|b| b.text.trim())
        .filter(|t| t.len() > MIN_PROSE_LEN && t.len() < MAX_PROSE_LEN)
        .map(str::to_string)
        .collect();
    (!out.is_empty()).then_some(out)
}
