use std::collections::HashSet;

use crate::{models::MatchResult, services::normalizer};

/// Matches normalized user ingredients against one recipe's raw ingredients
///
/// A user token matches a recipe token when it occurs anywhere inside it
/// ("rice" matches "white rice", not the other way around). The ratio is
/// taken over the recipe's own ingredient count.
///
/// Returns `None` when the recipe has no ingredients left after
/// normalization, since its ratio is undefined.
pub fn match_recipe<S: AsRef<str>>(user_tokens: &[String], recipe_ingredients: &[S]) -> Option<MatchResult> {
    let recipe_tokens = normalizer::normalize_list(recipe_ingredients);
    let total_count = recipe_tokens.len();

    if total_count == 0 {
        return None;
    }

    let distinct_user: HashSet<&str> = user_tokens.iter().map(String::as_str).collect();

    let hits = distinct_user
        .iter()
        .filter(|user| recipe_tokens.iter().any(|recipe| recipe.contains(**user)))
        .count();
    let matched_count = hits.min(total_count);

    let (matched, missing): (Vec<String>, Vec<String>) = recipe_tokens
        .into_iter()
        .partition(|recipe| distinct_user.iter().any(|user| recipe.contains(*user)));

    Some(MatchResult {
        matched_count,
        total_count,
        match_ratio: matched_count as f64 / total_count as f64,
        matched,
        missing,
    })
}
