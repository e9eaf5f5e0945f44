//! Heuristic recipe-structure extraction from converted documents: blocks,
//! section spans, field detectors, and per-field confidence scoring.

pub mod convert;
pub mod parser;

pub use convert::{ConvertedMarkup, HtmlPassthrough, MarkupConverter};
pub use parser::blocks::{Block, BlockKind};
pub use parser::confidence::ConfidenceScore;
pub use parser::extract::ParsedRecipe;
pub use parser::sections::{SectionKind, SectionSpan};
pub use parser::{parse_blocks, parse_markup, parse_payload, ParseOutcome};
