pub mod matcher;
pub mod normalizer;
pub mod providers;
pub mod query_kind;
pub mod ranker;
pub mod suggestions;

pub use suggestions::SuggestionSettings;
