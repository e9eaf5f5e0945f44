use serde::Serialize;

use super::extract::{title::DEFAULT_TITLE, ParsedRecipe};
use super::patterns::has_measurement;

/// Ratio cutoffs for measurement-bearing ingredient items. Tuned empirically;
/// kept as constants rather than derived.
const RATIO_HIGH: f32 = 0.7;
const RATIO_MID: f32 = 0.4;
/// Three or more items look like a real list even without measurements.
const SOLID_COUNT: usize = 3;
/// Instruction steps this long read as prose rather than fragments.
const PROSE_MIN_AVG_LEN: f32 = 20.0;
/// Titles under this length are trusted fully.
const SHORT_TITLE_LEN: usize = 100;

const TITLE_WEIGHT: f32 = 0.2;
const INGREDIENTS_WEIGHT: f32 = 0.4;
const INSTRUCTIONS_WEIGHT: f32 = 0.4;

/// Per-field and overall extraction confidence, 0-100. Derived purely from
/// the shape of the extracted data, recomputed on every parse call.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConfidenceScore {
    pub title: u8,
    pub ingredients: u8,
    pub instructions: u8,
    pub overall: u8,
}

pub fn score(recipe: &ParsedRecipe) -> ConfidenceScore {
    let title = score_title(&recipe.title);
    let ingredients = score_ingredients(&recipe.ingredients);
    let instructions = score_instructions(&recipe.instructions);
    ConfidenceScore {
        title,
        ingredients,
        instructions,
        overall: overall(title, ingredients, instructions),
    }
}

fn score_title(title: &str) -> u8 {
    if title.is_empty() || title == DEFAULT_TITLE {
        20
    } else if title.len() < SHORT_TITLE_LEN {
        90
    } else {
        70
    }
}

fn score_ingredients(items: &[String]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let measured = items.iter().filter(|i| has_measurement(i)).count();
    let ratio = measured as f32 / items.len() as f32;
    if ratio > RATIO_HIGH {
        95
    } else if ratio > RATIO_MID {
        75
    } else if items.len() >= SOLID_COUNT {
        60
    } else {
        30
    }
}

fn score_instructions(items: &[String]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let avg = items.iter().map(|i| i.len()).sum::<usize>() as f32 / items.len() as f32;
    if items.len() >= 3 && avg > PROSE_MIN_AVG_LEN {
        90
    } else if items.len() >= 2 {
        70
    } else {
        40
    }
}

fn overall(title: u8, ingredients: u8, instructions: u8) -> u8 {
    (f32::from(title) * TITLE_WEIGHT
        + f32::from(ingredients) * INGREDIENTS_WEIGHT
        + f32::from(instructions) * INSTRUCTIONS_WEIGHT)
        .round() as u8
}
