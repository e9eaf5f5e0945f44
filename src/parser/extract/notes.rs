use crate::parser::blocks::Block;
use crate::parser::sections::{content_blocks, find_span, SectionKind, SectionSpan};

/// The notes section sliced verbatim; no fallback heuristics, notes are
/// optional and not worth guessing.
pub fn extract(spans: &[SectionSpan], blocks: &[Block]) -> String {
    let Some(span) = find_span(spans, SectionKind::Notes) else {
        return String::new();
    };
    content_blocks(span, blocks)
        .iter()
        .map(|b| b.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::detect_sections;

    #[test]
    fn notes_section_joined() {
        let blocks = vec![
            Block::heading(2, "Notes"),
            Block::paragraph("Chill the dough."),
            Block::new(crate::parser::blocks::BlockKind::Other, ""),
            Block::paragraph("Freezes well."),
        ];
        let spans = detect_sections(&blocks);
        assert_eq!(extract(&spans, &blocks), "Chill the dough.\nFreezes well.");
    }

    #[test]
    fn absent_section_yields_empty() {
        let blocks = vec![Block::paragraph("Chill the dough.")];
        let spans = detect_sections(&blocks);
        assert_eq!(extract(&spans, &blocks), "");
    }
}
