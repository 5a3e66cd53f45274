use crate::models::QueryKind;

// Leading words that mark a sentence rather than an ingredient list
const QUESTION_WORDS: &[&str] = &[
    "how", "what", "why", "when", "where", "which", "who", "can", "could", "should", "would",
    "is", "are", "do", "does", "give", "suggest", "tell", "show", "recommend", "help", "find",
    "make", "cook",
];

/// Classifies free-text input as an ingredient list or a question
///
/// A fixed word list stands in for a trained model. Anything ending in `?`
/// is a question. Comma-separated input is an ingredient list even when it
/// opens with a word like "can" or "cook". Otherwise a leading question or
/// request word marks a question.
pub fn classify(text: &str) -> QueryKind {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return QueryKind::Empty;
    }

    if trimmed.ends_with('?') {
        return QueryKind::Question;
    }

    if trimmed.contains(',') {
        return QueryKind::Ingredients;
    }

    let mut words = trimmed.split_whitespace();
    let first_word = words.next().unwrap_or_default();

    // A lone "cook" or "make" is an ingredient, not a request
    let is_single_word = words.next().is_none();

    if QUESTION_WORDS.contains(&first_word.to_lowercase().as_str()) && !is_single_word {
        QueryKind::Question
    } else {
        QueryKind::Ingredients
    }
}
