use crate::parser::blocks::Block;
use crate::parser::patterns;

#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<u32>,
}

/// Matches run over the joined, lower-cased document text; the three fields
/// are independent of each other. Time values are reported as the author
/// wrote them; a phrase that does not fit the expected shape is left unset.
pub fn extract(blocks: &[Block]) -> Metadata {
    let joined = blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();

    Metadata {
        prep_time: patterns::prep_time(&joined),
        cook_time: patterns::cook_time(&joined),
        servings: patterns::servings(&joined),
    }
}
