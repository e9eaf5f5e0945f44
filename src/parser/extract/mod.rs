pub mod ingredients;
pub mod instructions;
pub mod metadata;
pub mod notes;
pub mod title;

use serde::Serialize;

use super::blocks::{Block, BlockKind};
use super::sections::SectionSpan;

/// The assembled draft for one parse call. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: String,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<u32>,
    pub sections: Vec<SectionSpan>,
    /// Embedded images as data URIs, passed through from conversion.
    pub images: Vec<String>,
}

/// Run every field detector over one block sequence and its section spans.
pub fn extract_all(blocks: &[Block], spans: &[SectionSpan]) -> ParsedRecipe {
    let meta = metadata::extract(blocks);
    ParsedRecipe {
        title: title::detect(blocks).unwrap_or_else(|| title::DEFAULT_TITLE.to_string()),
        ingredients: ingredients::extract(spans, blocks),
        instructions: instructions::extract(spans, blocks),
        notes: notes::extract(spans, blocks),
        prep_time: meta.prep_time,
        cook_time: meta.cook_time,
        servings: meta.servings,
        sections: spans.to_vec(),
        images: Vec::new(),
    }
}

/// List blocks contribute their non-empty items and paragraphs their text;
/// other kinds contribute nothing. Document order; duplicates kept.
pub fn list_items(blocks: &[Block]) -> Vec<String> {
    let mut out = Vec::new();
    for block in blocks {
        match block.kind {
            BlockKind::OrderedList | BlockKind::UnorderedList => out.extend(
                block
                    .items
                    .iter()
                    .map(|i| i.trim().to_string())
                    .filter(|i| !i.is_empty()),
            ),
            BlockKind::Paragraph => {
                let t = block.text.trim();
                if !t.is_empty() {
                    out.push(t.to_string());
                }
            }
            _ => {}
        }
    }
    out
}
