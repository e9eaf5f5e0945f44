use serde::Serialize;

use super::blocks::Block;
use super::patterns::{
    INGREDIENT_KEYWORDS, INSTRUCTION_KEYWORDS, METADATA_KEYWORDS, NOTES_KEYWORDS,
    SECTION_HEADER_MAX_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Ingredients,
    Instructions,
    Notes,
    Metadata,
}

impl SectionKind {
    /// Fixed detection order; a header block matches at most one kind.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Ingredients,
        SectionKind::Instructions,
        SectionKind::Notes,
        SectionKind::Metadata,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Ingredients => INGREDIENT_KEYWORDS,
            SectionKind::Instructions => INSTRUCTION_KEYWORDS,
            SectionKind::Notes => NOTES_KEYWORDS,
            SectionKind::Metadata => METADATA_KEYWORDS,
        }
    }
}

/// A detected section: `start` is the header block's index, `end` the next
/// span's start (or the sequence length). Content range is `[start+1, end)`.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSpan {
    pub kind: SectionKind,
    pub start: usize,
    pub end: usize,
    pub header_text: String,
}

/// One scan over the sequence, tagging short keyword-bearing blocks as
/// section headers, then chaining each span's end to the next span's start.
/// A document with no matches yields an empty list; downstream detectors
/// fall back to structural heuristics.
pub fn detect_sections(blocks: &[Block]) -> Vec<SectionSpan> {
    let mut spans: Vec<SectionSpan> = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        let text = block.text.trim().to_lowercase();
        if text.is_empty() || text.len() >= SECTION_HEADER_MAX_LEN {
            continue;
        }
        let matched = SectionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.keywords().iter().any(|kw| text.contains(kw)));
        if let Some(kind) = matched {
            spans.push(SectionSpan {
                kind,
                start: i,
                end: blocks.len(),
                header_text: block.text.clone(),
            });
        }
    }

    let next_starts: Vec<usize> = spans.iter().skip(1).map(|s| s.start).collect();
    for (span, next) in spans.iter_mut().zip(next_starts) {
        span.end = next;
    }

    spans
}

pub fn find_span(spans: &[SectionSpan], kind: SectionKind) -> Option<&SectionSpan> {
    spans.iter().find(|s| s.kind == kind)
}

/// The blocks strictly inside a span, header excluded.
pub fn content_blocks<'a>(span: &SectionSpan, blocks: &'a [Block]) -> &'a [Block] {
    let start = (span.start + 1).min(span.end);
    &blocks[start..span.end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::blocks::Block;

    #[test]
    fn headers_found_in_document_order() {
        let blocks = vec![
            Block::heading(1, "Lentil Stew"),
            Block::heading(2, "Ingredients"),
            Block::unordered_list(&["1 cup lentils"]),
            Block::heading(2, "Directions"),
            Block::paragraph("Simmer everything until tender, then season and serve."),
            Block::heading(2, "Notes"),
            Block::paragraph("Keeps for a week."),
        ];
        let spans = detect_sections(&blocks);
        let kinds: Vec<SectionKind> = spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Ingredients,
                SectionKind::Instructions,
                SectionKind::Notes
            ]
        );
        assert_eq!(spans[0].start, 1);
        assert_eq!(spans[0].end, 3);
        assert_eq!(spans[1].end, 5);
        assert_eq!(spans[2].end, 7);
    }

    #[test]
    fn first_kind_wins_for_ambiguous_headers() {
        let blocks = vec![Block::heading(2, "Ingredients and Method")];
        let spans = detect_sections(&blocks);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SectionKind::Ingredients);
    }

    #[test]
    fn long_blocks_are_not_headers() {
        let long = format!("ingredients {}", "x".repeat(120));
        let blocks = vec![Block::paragraph(&long)];
        assert!(detect_sections(&blocks).is_empty());
    }

    #[test]
    fn no_keywords_no_spans() {
        let blocks = vec![
            Block::heading(1, "Soup"),
            Block::paragraph("Boil water and add everything."),
        ];
        assert!(detect_sections(&blocks).is_empty());
    }

    #[test]
    fn content_range_excludes_header() {
        let blocks = vec![
            Block::heading(2, "Ingredients"),
            Block::paragraph("2 cups flour"),
        ];
        let spans = detect_sections(&blocks);
        let content = content_blocks(&spans[0], &blocks);
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].text, "2 cups flour");
    }

    #[test]
    fn adjacent_headers_have_empty_content() {
        let blocks = vec![
            Block::heading(2, "Ingredients"),
            Block::heading(2, "Directions"),
            Block::paragraph("Stir the pot slowly until it thickens."),
        ];
        let spans = detect_sections(&blocks);
        assert!(content_blocks(&spans[0], &blocks).is_empty());
        assert_eq!(content_blocks(&spans[1], &blocks).len(), 1);
    }
}
