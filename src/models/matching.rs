use serde::{Deserialize, Serialize};

use super::Recipe;
use crate::error::{AppError, AppResult};

/// How a single recipe lines up against the user's ingredients
///
/// `matched` and `missing` partition the recipe's normalized ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Distinct user ingredients found in the recipe, capped at `total_count`
    pub matched_count: usize,
    /// Number of recipe ingredients after normalization (always > 0)
    pub total_count: usize,
    /// `matched_count / total_count`, in `[0, 1]`
    pub match_ratio: f64,
    /// Recipe ingredients covered by at least one user ingredient
    pub matched: Vec<String>,
    /// Recipe ingredients no user ingredient covers
    pub missing: Vec<String>,
}

impl MatchResult {
    /// Match ratio as a percentage rounded to one decimal place
    pub fn match_percentage(&self) -> f64 {
        (self.match_ratio * 1000.0).round() / 10.0
    }
}

/// Minimum match ratio a recipe needs to be suggested
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MatchThreshold(f64);

impl MatchThreshold {
    pub fn new(value: f64) -> AppResult<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::InvalidInput(format!(
                "Match threshold must be between 0 and 1, got {}",
                value
            )))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for MatchThreshold {
    type Error = AppError;

    fn try_from(value: f64) -> AppResult<Self> {
        Self::new(value)
    }
}

impl From<MatchThreshold> for f64 {
    fn from(threshold: MatchThreshold) -> Self {
        threshold.0
    }
}

/// A recipe that passed the threshold, paired with its match result
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecipe {
    pub recipe: Recipe,
    pub result: MatchResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert!(MatchThreshold::new(0.0).is_ok());
        assert!(MatchThreshold::new(1.0).is_ok());
        assert!(MatchThreshold::new(0.75).is_ok());
        assert!(MatchThreshold::new(-0.1).is_err());
        assert!(MatchThreshold::new(1.01).is_err());
        assert!(MatchThreshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_deserialize_validates() {
        let ok: MatchThreshold = serde_json::from_str("0.3").unwrap();
        assert_eq!(ok.value(), 0.3);
        assert!(serde_json::from_str::<MatchThreshold>("2.0").is_err());
    }

    #[test]
    fn test_match_percentage_rounding() {
        let result = MatchResult {
            matched_count: 1,
            total_count: 3,
            match_ratio: 1.0 / 3.0,
            matched: vec!["tomato".to_string()],
            missing: vec!["onion".to_string(), "garlic".to_string()],
        };
        assert_eq!(result.match_percentage(), 33.3);
    }
}
