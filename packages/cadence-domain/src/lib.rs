pub mod candidate;
pub mod ranking;
pub mod song;

pub use candidate::{CandidateDocument, metadata_keys};
pub use ranking::{ItemOutcome, RankingError, RankingItem, SkipReason};
pub use song::{RecommendationResult, Song, sanitize_text};
