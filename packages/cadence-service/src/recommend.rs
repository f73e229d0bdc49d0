use std::sync::Arc;

use serde::Deserialize;

use cadence_config::Config;
use cadence_domain::{CandidateDocument, RecommendationResult};

use crate::{Capabilities, Error, Result, Reranker, retrieval};

pub const DEFAULT_REASON: &str = "Recommended based on mood similarity";

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
	pub mood: String,
	pub limit: Option<u32>,
}

pub struct RecommendationService {
	pub cfg: Arc<Config>,
	pub capabilities: Capabilities,
}
impl RecommendationService {
	pub fn new(cfg: Arc<Config>, capabilities: Capabilities) -> Self {
		Self { cfg, capabilities }
	}

	/// Recommends up to `limit` songs for `mood`.
	///
	/// Only a failed candidate search fails the call. A failed rerank falls back to retrieval
	/// order, and candidates that cannot be resolved to a stored song are dropped, so the result
	/// may be shorter than `limit`.
	pub async fn recommend(
		&self,
		mood: &str,
		limit: Option<u32>,
	) -> Result<Vec<RecommendationResult>> {
		if mood.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "mood must be non-empty.".to_string() });
		}

		let limit = self.resolve_limit(limit)?;

		tracing::info!(mood, limit, "Requesting song recommendations.");

		let settings = &self.cfg.recommend;
		let candidates =
			retrieval::retrieve(self.capabilities.search.as_ref(), settings, mood, limit).await?;

		if candidates.is_empty() {
			tracing::info!(mood, "No candidate songs found.");

			return Ok(Vec::new());
		}

		let reranker = Reranker::new(
			self.capabilities.model.as_ref(),
			settings.max_rerank_candidates as usize,
		);
		let ordered = reranker.rerank_or_fallback(mood, candidates).await.into_candidates();
		let mut recommendations = Vec::with_capacity(ordered.len().min(limit as usize));

		for candidate in ordered.iter().take(limit as usize) {
			if let Some(recommendation) = self.resolve_candidate(candidate).await {
				recommendations.push(recommendation);
			}
		}

		tracing::info!(
			mood,
			recommendations = recommendations.len(),
			"Generated song recommendations."
		);

		Ok(recommendations)
	}

	fn resolve_limit(&self, limit: Option<u32>) -> Result<u32> {
		let settings = &self.cfg.recommend;
		let limit = limit.unwrap_or(settings.default_limit);

		if limit == 0 {
			return Err(Error::InvalidRequest {
				message: "limit must be greater than zero.".to_string(),
			});
		}
		if settings.enforce_max_limit && limit > settings.max_limit {
			tracing::info!(requested = limit, max = settings.max_limit, "Clamping limit.");

			return Ok(settings.max_limit);
		}

		Ok(limit)
	}

	async fn resolve_candidate(
		&self,
		candidate: &CandidateDocument,
	) -> Option<RecommendationResult> {
		let Some(song_id) = candidate.song_id().filter(|id| !id.trim().is_empty()) else {
			tracing::warn!(id = candidate.id.as_str(), "Candidate is missing songId metadata.");

			return None;
		};
		let song = match self.capabilities.songs.find_by_id(&song_id).await {
			Ok(Some(song)) => song,
			Ok(None) => {
				tracing::warn!(song_id = song_id.as_str(), "Song not found.");

				return None;
			},
			Err(err) => {
				tracing::warn!(
					song_id = song_id.as_str(),
					error = %err,
					"Song lookup failed; treating as not found."
				);

				return None;
			},
		};
		let reason = candidate.motivation().unwrap_or_else(|| DEFAULT_REASON.to_string());

		tracing::debug!(
			song_id = song_id.as_str(),
			title = song.title.as_deref().unwrap_or_default(),
			"Mapped candidate to recommendation."
		);

		Some(RecommendationResult::from_song(&song, &reason))
	}
}
