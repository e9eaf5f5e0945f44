use std::sync::LazyLock;

use regex::Regex;

/// Keyword sets for section header candidates, tried in detection order.
/// A header block matches the first set containing any of its keywords.
pub const INGREDIENT_KEYWORDS: &[&str] = &[
    "ingredients",
    "what you need",
    "you will need",
    "shopping list",
];
pub const INSTRUCTION_KEYWORDS: &[&str] = &[
    "instructions",
    "directions",
    "method",
    "steps",
    "preparation",
];
pub const NOTES_KEYWORDS: &[&str] = &["notes", "tips", "note:"];
pub const METADATA_KEYWORDS: &[&str] = &[
    "prep time",
    "cook time",
    "total time",
    "servings",
    "yield",
];

/// Header candidates at or above this length are body text, not section labels.
pub const SECTION_HEADER_MAX_LEN: usize = 100;
/// Styled title candidates (heading / bold / centered) must stay under this.
pub const TITLE_MAX_LEN: usize = 200;
/// The unstyled leading-text title fallback uses the stricter cap.
pub const TITLE_FALLBACK_MAX_LEN: usize = 100;
/// Bold runs must cover more than this share of a block's text.
pub const BOLD_MAJORITY_RATIO: f32 = 0.7;

const UNIT_VOCABULARY: &str = "cups?|tablespoons?|tbsps?|tbs|teaspoons?|tsps?\
|ounces?|oz|pounds?|lbs?|grams?|g|kilograms?|kg|milligrams?|mg\
|milliliters?|millilitres?|ml|liters?|litres?|l\
|quarts?|qts?|pints?|pts?|gallons?|gals?\
|sticks?|cloves?|pinch(?:es)?|dash(?:es)?|cans?|packages?|pkgs?\
|slices?|bunch(?:es)?|sprigs?|heads?|stalks?";

static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b\d+(?:\.\d+)?\s*(?:{UNIT_VOCABULARY})\b")).unwrap()
});
static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\s*/\s*\d+").unwrap());
static VULGAR_FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]").unwrap());
static COUNT_NOUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+[A-Za-z]").unwrap());

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•◦▪●○‣·*–—-]\s*").unwrap());
static STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:step\s*)?\d+\s*[.):-]\s+").unwrap());

static PREP_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"prep(?:aration)?\s*time\s*:\s*(\d+(?:\s*-\s*\d+)?)\s*(minutes?|mins?|hours?|hrs?)")
        .unwrap()
});
static COOK_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cook(?:ing)?\s*time\s*:\s*(\d+(?:\s*-\s*\d+)?)\s*(minutes?|mins?|hours?|hrs?)")
        .unwrap()
});
static SERVINGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:serves|servings|yield|makes)\s*:?\s*(\d+)").unwrap());

/// True when the text looks like it carries an ingredient quantity: a number
/// with a unit word, a numeric or vulgar fraction, or a leading count before
/// a noun ("2 eggs"). Permissive on purpose; it gates cascade tiers and
/// confidence, not final inclusion.
pub fn has_measurement(text: &str) -> bool {
    UNIT_RE.is_match(text)
        || FRACTION_RE.is_match(text)
        || VULGAR_FRACTION_RE.is_match(text)
        || COUNT_NOUN_RE.is_match(text)
}

/// Strip a leading bullet glyph (or hyphen/asterisk) and following space.
/// Returns the remainder, or None when there is no bullet prefix.
pub fn strip_bullet_prefix(text: &str) -> Option<&str> {
    BULLET_RE.find(text).map(|m| text[m.end()..].trim())
}

/// Strip a leading step marker: optional "step" keyword, digits, punctuation.
/// Returns the remainder, or None when there is no step prefix.
pub fn strip_step_prefix(text: &str) -> Option<&str> {
    STEP_RE.find(text).map(|m| text[m.end()..].trim())
}

/// "prep time: 15 minutes" -> "15 minutes". Expects lower-cased input; the
/// value is kept as the author wrote it, not normalized to a canonical unit.
pub fn prep_time(text: &str) -> Option<String> {
    PREP_TIME_RE
        .captures(text)
        .map(|c| format!("{} {}", c[1].trim(), &c[2]))
}

/// "cook time: 10-12 minutes" -> "10-12 minutes". Expects lower-cased input.
pub fn cook_time(text: &str) -> Option<String> {
    COOK_TIME_RE
        .captures(text)
        .map(|c| format!("{} {}", c[1].trim(), &c[2]))
}

/// "serves: 4" -> 4. Expects lower-cased input.
pub fn servings(text: &str) -> Option<u32> {
    SERVINGS_RE
        .captures(text)
        .and_then(|c| c[1].parse::<u32>().ok())
}
