pub mod blocks;
pub mod confidence;
pub mod extract;
pub mod patterns;
pub mod sections;

use serde::Serialize;

use crate::convert::{ConvertedMarkup, MarkupConverter};
use blocks::Block;
use confidence::ConfidenceScore;
use extract::ParsedRecipe;
use sections::SectionSpan;

/// The output boundary record. `success` is false only for conversion
/// failures; structural absence (no title, no sections, nothing extracted)
/// is a successful parse with low confidence.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub success: bool,
    pub recipe: Option<ParsedRecipe>,
    pub confidence: ConfidenceScore,
    pub raw_markup: String,
    pub parse_messages: Vec<String>,
    pub sections: Vec<SectionSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseOutcome {
    /// Structured failure record for an upstream conversion error.
    pub fn failure(message: String) -> Self {
        ParseOutcome {
            success: false,
            recipe: None,
            confidence: ConfidenceScore::default(),
            raw_markup: String::new(),
            parse_messages: Vec::new(),
            sections: Vec::new(),
            error: Some(message),
        }
    }
}

/// Heuristic pipeline over one block sequence: sections, then the field
/// detectors, then confidence. Pure and total; an empty sequence yields an
/// empty draft, never an error.
pub fn parse_blocks(blocks: &[Block]) -> (ParsedRecipe, ConfidenceScore) {
    let spans = sections::detect_sections(blocks);
    let recipe = extract::extract_all(blocks, &spans);
    let confidence = confidence::score(&recipe);
    (recipe, confidence)
}

/// Parse already-converted markup into the final outcome record.
pub fn parse_markup(converted: ConvertedMarkup) -> ParseOutcome {
    let blocks = blocks::from_html(&converted.html);
    let (recipe, confidence) = parse_blocks(&blocks);
    let sections = recipe.sections.clone();
    let recipe = ParsedRecipe {
        images: converted.images,
        ..recipe
    };
    ParseOutcome {
        success: true,
        recipe: Some(recipe),
        confidence,
        raw_markup: converted.html,
        parse_messages: converted.messages,
        sections,
        error: None,
    }
}

/// Convert an opaque document payload and parse the result. Conversion is
/// the only failure path in the whole pipeline; it is caught here and folded
/// into the outcome record rather than propagated.
pub async fn parse_payload<C: MarkupConverter>(converter: &C, payload: &[u8]) -> ParseOutcome {
    match converter.convert(payload).await {
        Ok(converted) => parse_markup(converted),
        Err(e) => ParseOutcome::failure(e.to_string()),
    }
}
