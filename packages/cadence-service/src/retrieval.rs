use std::collections::HashSet;

use cadence_config::Recommend;
use cadence_domain::CandidateDocument;

use crate::{Error, Result, SimilaritySearch};

pub fn build_semantic_query(mood: &str) -> String {
	format!("Mood: {mood}. Search for songs that match this mood.")
}

/// Fetches `over_fetch_factor * limit` candidates for `mood`, most similar first.
///
/// A `limit` of zero is treated as one. Search failures are not retried.
pub async fn retrieve(
	search: &dyn SimilaritySearch,
	settings: &Recommend,
	mood: &str,
	limit: u32,
) -> Result<Vec<CandidateDocument>> {
	let query = build_semantic_query(mood);
	let top_k = limit.max(1).saturating_mul(settings.over_fetch_factor);

	tracing::info!(query = query.as_str(), top_k, "Running semantic candidate search.");

	let hits = search
		.similarity_search(&query, top_k, settings.similarity_threshold)
		.await
		.map_err(|err| Error::Retrieval { message: err.to_string() })?;

	Ok(dedup_by_id(hits))
}

fn dedup_by_id(hits: Vec<CandidateDocument>) -> Vec<CandidateDocument> {
	let mut seen = HashSet::new();

	hits.into_iter()
		.filter(|hit| {
			let fresh = seen.insert(hit.id.clone());

			if !fresh {
				tracing::warn!(id = hit.id.as_str(), "Dropping duplicate search hit.");
			}

			fresh
		})
		.collect()
}
