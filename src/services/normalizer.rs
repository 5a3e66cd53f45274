//! Ingredient normalization
//!
//! Turns raw ingredient text ("2 cups Flour (sifted)") into the lowercase
//! tokens the matcher compares ("flour"). User input and recipe ingredients
//! go through the same rules so substring checks line up.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{IngredientsInput, RawIngredients};

// Parenthesized annotations, including an unclosed trailing one
const PARENTHESES_PATTERN: &str = r"\([^)]*(?:\)|$)";

// Leading quantity (whole, decimal, fraction, mixed number, range, or
// vulgar fraction), then a unit and optional "of" when more words follow.
// A unit word with nothing after it ("2 cloves") is kept as the name.
const QUANTITY_PATTERN: &str = r"^(?:(?:\d+\s+)?\d+(?:[./]\d+)?|[½⅓⅔¼¾⅛⅜⅝⅞])(?:\s*-\s*\d+(?:[./]\d+)?)?(?:\s*(?:cups?|tablespoons?|tbsps?|tbs|teaspoons?|tsps?|pounds?|lbs?|ounces?|oz|grams?|g|kilograms?|kg|milligrams?|mg|liters?|litres?|l|milliliters?|millilitres?|ml|pints?|quarts?|gallons?|pinch(?:es)?|dash(?:es)?|cloves?|cans?|slices?|sticks?|pieces?|handfuls?|bunch(?:es)?|packages?|pkgs?)\b\.?\s+(?:of\s+)?|\s+|$)";

lazy_static! {
    static ref PARENTHESES_REGEX: Regex =
        Regex::new(PARENTHESES_PATTERN).expect("Parentheses pattern should be valid");
    static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity pattern should be valid");
}

/// Normalizes a single ingredient string
///
/// Returns `None` when nothing is left after stripping.
pub fn normalize_token(raw: &str) -> Option<String> {
    let without_notes = PARENTHESES_REGEX.replace_all(raw, " ");
    let lowered = without_notes.to_lowercase();
    let trimmed = lowered.trim();
    let without_quantity = QUANTITY_REGEX.replace(trimmed, "");

    let token = without_quantity
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Normalizes comma-separated user input
///
/// Order is preserved and duplicates are kept. Empty or whitespace-only
/// input yields an empty list.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_token).collect()
}

/// Normalizes each entry of an already-split ingredient list
pub fn normalize_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| normalize_token(item.as_ref()))
        .collect()
}

/// Normalizes user input in either accepted shape
pub fn normalize_input(input: &IngredientsInput) -> Vec<String> {
    match input {
        IngredientsInput::Text(text) => normalize(text),
        IngredientsInput::List(items) => normalize_list(items),
    }
}

/// Splits a recipe-side ingredient string on `|` or `,`
///
/// The pieces stay raw; only surrounding whitespace and empty pieces are
/// dropped.
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(['|', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flattens a raw catalog ingredient field into a list of raw strings
pub fn raw_ingredient_list(raw: RawIngredients) -> Vec<String> {
    match raw {
        RawIngredients::List(items) => items,
        RawIngredients::Delimited(text) => split_delimited(&text),
    }
}
