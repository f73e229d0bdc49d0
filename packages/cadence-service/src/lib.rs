pub mod backends;
pub mod prompt;
pub mod recommend;
pub mod rerank;
pub mod retrieval;

mod error;

pub use error::{Error, Result};
pub use recommend::{RecommendRequest, RecommendationService};
pub use rerank::{RerankError, RerankOutcome, Reranker};

use std::{future::Future, pin::Pin, sync::Arc};

use cadence_domain::{CandidateDocument, Song};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Vector similarity search over the song collection.
pub trait SimilaritySearch
where
	Self: Send + Sync,
{
	/// Returns at most `top_k` hits scoring at least `threshold`, most similar first.
	fn similarity_search<'a>(
		&'a self,
		query: &'a str,
		top_k: u32,
		threshold: f32,
	) -> BoxFuture<'a, Result<Vec<CandidateDocument>>>;
}

/// Text generation from a single user prompt.
pub trait LanguageModel
where
	Self: Send + Sync,
{
	/// `Ok(None)` means the model answered without any generated text.
	fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<Option<String>>>;
}

/// Lookup of persisted songs by identifier.
pub trait SongStore
where
	Self: Send + Sync,
{
	fn find_by_id<'a>(&'a self, song_id: &'a str) -> BoxFuture<'a, Result<Option<Song>>>;
}

#[derive(Clone)]
pub struct Capabilities {
	pub search: Arc<dyn SimilaritySearch>,
	pub model: Arc<dyn LanguageModel>,
	pub songs: Arc<dyn SongStore>,
}
impl Capabilities {
	pub fn new(
		search: Arc<dyn SimilaritySearch>,
		model: Arc<dyn LanguageModel>,
		songs: Arc<dyn SongStore>,
	) -> Self {
		Self { search, model, songs }
	}
}
