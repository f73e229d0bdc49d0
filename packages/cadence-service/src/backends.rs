//! Capability bindings onto the HTTP providers, Qdrant, and Postgres.

use std::sync::Arc;

use cadence_config::Config;
use cadence_domain::{CandidateDocument, Song};
use cadence_providers::{chat, embedding};
use cadence_storage::{
	db::Db,
	qdrant::{self, QdrantStore},
	songs,
};

use crate::{BoxFuture, Capabilities, Error, LanguageModel, Result, SimilaritySearch, SongStore};

/// Embeds the query text and searches the song vector collection.
pub struct VectorSearch {
	cfg: Arc<Config>,
	qdrant: QdrantStore,
}
impl VectorSearch {
	pub fn new(cfg: Arc<Config>, qdrant: QdrantStore) -> Self {
		Self { cfg, qdrant }
	}

	async fn search(
		&self,
		query: &str,
		top_k: u32,
		threshold: f32,
	) -> Result<Vec<CandidateDocument>> {
		let embeddings =
			embedding::embed(&self.cfg.providers.embedding, &[query.to_string()]).await?;
		let Some(vector) = embeddings.into_iter().next() else {
			return Err(Error::Provider {
				message: "Embedding provider returned no vectors.".to_string(),
			});
		};

		if vector.len() != self.qdrant.vector_dim as usize {
			return Err(Error::Provider {
				message: "Embedding vector dimension mismatch.".to_string(),
			});
		}

		let points = self.qdrant.search(vector, u64::from(top_k), threshold).await?;
		let mut out = Vec::with_capacity(points.len());

		for point in points {
			let Some(id) = point.id.as_ref().and_then(qdrant::point_id_to_string) else {
				tracing::warn!("Song vector hit is missing a point id.");

				continue;
			};
			let metadata = qdrant::payload_to_metadata(&point.payload);

			out.push(CandidateDocument::new(id, metadata).with_similarity(point.score));
		}

		Ok(out)
	}
}

impl SimilaritySearch for VectorSearch {
	fn similarity_search<'a>(
		&'a self,
		query: &'a str,
		top_k: u32,
		threshold: f32,
	) -> BoxFuture<'a, Result<Vec<CandidateDocument>>> {
		Box::pin(self.search(query, top_k, threshold))
	}
}

/// Chat-completion model used for reranking.
pub struct ChatModel {
	cfg: Arc<Config>,
}
impl ChatModel {
	pub fn new(cfg: Arc<Config>) -> Self {
		Self { cfg }
	}
}

impl LanguageModel for ChatModel {
	fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
		Box::pin(async move {
			chat::complete(&self.cfg.providers.llm_rerank, prompt).await.map_err(Error::from)
		})
	}
}

pub struct PostgresSongStore {
	db: Db,
}
impl PostgresSongStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}

impl SongStore for PostgresSongStore {
	fn find_by_id<'a>(&'a self, song_id: &'a str) -> BoxFuture<'a, Result<Option<Song>>> {
		Box::pin(async move { songs::get_song(&self.db, song_id).await.map_err(Error::from) })
	}
}

impl Capabilities {
	pub fn from_backends(cfg: Arc<Config>, db: Db, qdrant: QdrantStore) -> Self {
		Self::new(
			Arc::new(VectorSearch::new(cfg.clone(), qdrant)),
			Arc::new(ChatModel::new(cfg)),
			Arc::new(PostgresSongStore::new(db)),
		)
	}
}
