use crate::{
    models::{MatchThreshold, RankedRecipe, Recipe},
    services::matcher,
};

/// Ranks a candidate pool against the user's normalized ingredients
///
/// Keeps recipes whose match ratio reaches the threshold, best ratio first.
/// Equal ratios are ordered by matched count, and anything still tied keeps
/// its position from the pool. An empty pool or an empty ingredient list
/// ranks nothing.
pub fn rank(user_tokens: &[String], pool: Vec<Recipe>, threshold: MatchThreshold) -> Vec<RankedRecipe> {
    if user_tokens.is_empty() {
        return Vec::new();
    }

    let pool_size = pool.len();

    let mut ranked: Vec<RankedRecipe> = pool
        .into_iter()
        .filter_map(|recipe| {
            let result = matcher::match_recipe(user_tokens, &recipe.ingredients)?;
            (result.match_ratio >= threshold.value()).then_some(RankedRecipe { recipe, result })
        })
        .collect();

    // sort_by is stable, which keeps pool order for full ties
    ranked.sort_by(|a, b| {
        b.result
            .match_ratio
            .total_cmp(&a.result.match_ratio)
            .then_with(|| b.result.matched_count.cmp(&a.result.matched_count))
    });

    tracing::debug!(
        pool_size,
        ranked = ranked.len(),
        threshold = threshold.value(),
        "Ranked recipe pool"
    );

    ranked
}

/// Like [`rank`], keeping at most `limit` recipes
pub fn rank_with_limit(
    user_tokens: &[String],
    pool: Vec<Recipe>,
    threshold: MatchThreshold,
    limit: usize,
) -> Vec<RankedRecipe> {
    let mut ranked = rank(user_tokens, pool, threshold);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeId;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId::Catalog(id.to_string()),
            title: id.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: None,
            url: None,
            image: None,
        }
    }

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn threshold(value: f64) -> MatchThreshold {
        MatchThreshold::new(value).unwrap()
    }

    fn ids(ranked: &[RankedRecipe]) -> Vec<String> {
        ranked.iter().map(|r| r.recipe.id.to_string()).collect()
    }

    fn sample_pool() -> Vec<Recipe> {
        vec![
            recipe("stir-fry", &["chicken breast", "white rice", "salt", "pepper"]),
            recipe("beef-stew", &["beef", "onion"]),
            recipe("fried-rice", &["rice", "egg", "chicken"]),
            recipe("empty", &[]),
            recipe("plain-rice", &["rice"]),
        ]
    }

    #[test]
    fn test_threshold_filters_and_orders() {
        let user = tokens(&["chicken", "rice"]);
        let ranked = rank(&user, sample_pool(), threshold(0.3));

        assert_eq!(ids(&ranked), vec!["plain-rice", "fried-rice", "stir-fry"]);
        for entry in &ranked {
            assert!(entry.result.match_ratio >= 0.3);
        }
    }

    #[test]
    fn test_included_recipe_details() {
        let user = tokens(&["chicken", "rice"]);
        let ranked = rank(&user, sample_pool(), threshold(0.3));
        let stir_fry = ranked
            .iter()
            .find(|r| r.recipe.id == RecipeId::Catalog("stir-fry".to_string()))
            .unwrap();

        assert_eq!(stir_fry.result.matched_count, 2);
        assert_eq!(stir_fry.result.total_count, 4);
        assert_eq!(stir_fry.result.match_ratio, 0.5);
        assert_eq!(stir_fry.result.missing, vec!["salt", "pepper"]);
    }

    #[test]
    fn test_zero_ratio_excluded() {
        let user = tokens(&["tofu"]);
        let ranked = rank(&user, vec![recipe("beef-stew", &["beef", "onion"])], threshold(0.3));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_recipe_excluded_even_at_zero_threshold() {
        let user = tokens(&["tofu"]);
        let ranked = rank(&user, sample_pool(), threshold(0.0));
        assert!(!ids(&ranked).contains(&"empty".to_string()));
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn test_ties_broken_by_matched_count() {
        let user = tokens(&["egg", "milk"]);
        let pool = vec![
            recipe("one-of-two", &["egg", "flour"]),
            recipe("two-of-four", &["egg", "milk", "flour", "sugar"]),
        ];
        let ranked = rank(&user, pool, threshold(0.0));
        assert_eq!(ids(&ranked), vec!["two-of-four", "one-of-two"]);
    }

    #[test]
    fn test_full_ties_keep_pool_order() {
        let user = tokens(&["egg"]);
        let pool = vec![
            recipe("b", &["egg", "flour"]),
            recipe("a", &["egg", "sugar"]),
            recipe("c", &["egg", "milk"]),
        ];
        let ranked = rank(&user, pool, threshold(0.5));
        assert_eq!(ids(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_inputs_rank_nothing() {
        assert!(rank(&[], sample_pool(), threshold(0.0)).is_empty());
        assert!(rank(&tokens(&["rice"]), Vec::new(), threshold(0.0)).is_empty());
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let user = tokens(&["chicken", "rice", "egg"]);
        let first = rank(&user, sample_pool(), threshold(0.2));
        let second = rank(&user, sample_pool(), threshold(0.2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_sorted_subset() {
        let user = tokens(&["rice", "onion", "salt"]);
        let pool = sample_pool();
        let ranked = rank(&user, pool.clone(), threshold(0.1));

        for entry in &ranked {
            assert!(pool.contains(&entry.recipe));
        }
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0].result, &pair[1].result);
            assert!(
                a.match_ratio > b.match_ratio
                    || (a.match_ratio == b.match_ratio && a.matched_count >= b.matched_count)
            );
        }
    }

    #[test]
    fn test_rank_with_limit() {
        let user = tokens(&["chicken", "rice"]);
        let ranked = rank_with_limit(&user, sample_pool(), threshold(0.3), 2);
        assert_eq!(ids(&ranked), vec!["plain-rice", "fried-rice"]);
    }
}
