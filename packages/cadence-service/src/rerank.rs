//! LLM reranking of retrieved candidates.

use cadence_domain::{
	CandidateDocument,
	ranking::{self, ItemOutcome, RankingEntry, RankingError},
};

use crate::{LanguageModel, prompt};

#[derive(Debug, thiserror::Error)]
pub enum RerankError {
	#[error("Ranking model query failed: {message}")]
	Query { message: String },
	#[error("Ranking model returned no generated text.")]
	NoOutput,
	#[error(transparent)]
	Ranking(#[from] RankingError),
}

/// Result of a rerank attempt that never fails outward.
#[derive(Debug)]
pub enum RerankOutcome {
	Reranked(Vec<CandidateDocument>),
	/// The unreranked candidates, returned unchanged.
	Fallback { candidates: Vec<CandidateDocument>, reason: RerankError },
}
impl RerankOutcome {
	pub fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback { .. })
	}

	pub fn into_candidates(self) -> Vec<CandidateDocument> {
		match self {
			Self::Reranked(candidates) | Self::Fallback { candidates, .. } => candidates,
		}
	}
}

pub struct Reranker<'a> {
	model: &'a dyn LanguageModel,
	max_candidates: usize,
}
impl<'a> Reranker<'a> {
	pub fn new(model: &'a dyn LanguageModel, max_candidates: usize) -> Self {
		Self { model, max_candidates }
	}

	/// Reorders `candidates` by the model's judgement and attaches a motivation to each
	/// returned candidate.
	///
	/// Only the first `max_candidates` candidates are shown to the model. The output follows
	/// the order of the model's array; entries that do not address a shown candidate are
	/// dropped, and repeated entries repeat the candidate.
	pub async fn rerank(
		&self,
		mood: &str,
		candidates: &[CandidateDocument],
	) -> Result<Vec<CandidateDocument>, RerankError> {
		tracing::info!(candidates = candidates.len(), mood, "Reranking candidates.");

		let batch = self.limit(candidates);
		let prompt = prompt::build_rerank_prompt(mood, batch);

		tracing::debug!(prompt_chars = prompt.len(), "Sending rerank prompt.");

		let raw = self
			.model
			.generate(&prompt)
			.await
			.map_err(|err| RerankError::Query { message: err.to_string() })?
			.ok_or(RerankError::NoOutput)?;

		tracing::debug!(response = raw.as_str(), "Received rerank response.");

		let entries = ranking::parse_ranking(&raw)?;
		let reranked = apply_ranking(batch, &entries);

		tracing::info!(
			reranked = reranked.len(),
			candidates = candidates.len(),
			mood,
			"Reranked candidates."
		);

		Ok(reranked)
	}

	/// Like [`Reranker::rerank`], but hands back the original candidates on any failure.
	pub async fn rerank_or_fallback(
		&self,
		mood: &str,
		candidates: Vec<CandidateDocument>,
	) -> RerankOutcome {
		match self.rerank(mood, &candidates).await {
			Ok(reranked) => RerankOutcome::Reranked(reranked),
			Err(reason) => {
				tracing::warn!(
					error = %reason,
					mood,
					"Reranking failed; keeping retrieval order."
				);

				RerankOutcome::Fallback { candidates, reason }
			},
		}
	}

	fn limit<'c>(&self, candidates: &'c [CandidateDocument]) -> &'c [CandidateDocument] {
		if candidates.len() <= self.max_candidates {
			return candidates;
		}

		tracing::info!(
			from = candidates.len(),
			to = self.max_candidates,
			"Limiting candidates for reranking."
		);

		&candidates[..self.max_candidates]
	}
}

/// Places each ranking entry onto the batch it refers to, in entry order.
pub fn apply_ranking(
	batch: &[CandidateDocument],
	entries: &[RankingEntry],
) -> Vec<CandidateDocument> {
	entries.iter().enumerate().fold(Vec::with_capacity(entries.len()), |mut out, (pos, entry)| {
		let placed = match ranking::read_item(entry) {
			ItemOutcome::Ranked(item) =>
				item.position(batch.len()).map(|index| (index, item.motivation)),
			ItemOutcome::Skipped(reason) => Err(reason),
		};

		match placed {
			Ok((index, motivation)) =>
				if let Some(doc) = batch.get(index) {
					let mut doc = doc.clone();

					doc.set_motivation(motivation);
					out.push(doc);
				},
			Err(reason) => {
				tracing::warn!(entry = pos, %reason, "Skipping ranking entry.");
			},
		}

		out
	})
}
