//! Decoding of model-produced rankings.
//!
//! The reranking model answers with a JSON array such as
//! `[{"doc_index": 1, "score": 0.95, "motivation": "..."}]`, often wrapped in a fenced code
//! block. Only three conditions reject a whole response: no text, text that is not a JSON array
//! of objects, and an array that is empty or has an entry missing `doc_index` or `motivation`.
//! Everything else is judged one entry at a time by [`read_item`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

pub const DOC_INDEX_KEY: &str = "doc_index";
pub const SCORE_KEY: &str = "score";
pub const MOTIVATION_KEY: &str = "motivation";
pub const DEFAULT_MOTIVATION: &str = "Relevant to the requested mood";

static FENCE_OPENER: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"(?i)```json\s*").ok());

pub type RankingEntry = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
	#[error("Empty response from the ranking model.")]
	EmptyResponse,
	#[error("Invalid JSON response from the ranking model: {0}")]
	InvalidJson(#[from] serde_json::Error),
	#[error("Empty ranking response from the ranking model.")]
	EmptyRanking,
	#[error("Invalid ranking item structure at position {position}: missing required fields.")]
	MissingFields { position: usize },
}

/// One decoded ranking entry. `doc_index` is 1-based as the model wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingItem {
	pub doc_index: i64,
	/// Accepted but not used for ordering; array order is authoritative.
	pub score: Option<f64>,
	pub motivation: String,
}
impl RankingItem {
	/// Zero-based position in the batch sent to the model, if it addresses one.
	pub fn position(&self, batch_len: usize) -> Result<usize, SkipReason> {
		let zero_based = self.doc_index.saturating_sub(1);

		usize::try_from(zero_based)
			.ok()
			.filter(|position| *position < batch_len)
			.ok_or(SkipReason::IndexOutOfRange { doc_index: self.doc_index, batch_len })
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
	NonNumericIndex { value: Value },
	IndexOutOfRange { doc_index: i64, batch_len: usize },
}
impl std::fmt::Display for SkipReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NonNumericIndex { value } => write!(f, "doc_index {value} is not a number"),
			Self::IndexOutOfRange { doc_index, batch_len } => {
				write!(f, "doc_index {doc_index} is outside 1..={batch_len}")
			},
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
	Ranked(RankingItem),
	Skipped(SkipReason),
}

/// Strips code fences from raw model output.
pub fn clean_response(raw: &str) -> Result<String, RankingError> {
	if raw.trim().is_empty() {
		return Err(RankingError::EmptyResponse);
	}

	let without_opener = match FENCE_OPENER.as_ref() {
		Some(opener) => opener.replace_all(raw, "").into_owned(),
		None => raw.to_string(),
	};
	let cleaned = without_opener.replace("```", "");
	let cleaned = cleaned.trim();

	if cleaned.is_empty() {
		return Err(RankingError::EmptyResponse);
	}

	Ok(cleaned.to_string())
}

/// Decodes cleaned text into ranking entries and checks the required keys on each one.
pub fn decode_ranking(cleaned: &str) -> Result<Vec<RankingEntry>, RankingError> {
	let entries: Vec<RankingEntry> = serde_json::from_str(cleaned)?;

	if entries.is_empty() {
		return Err(RankingError::EmptyRanking);
	}

	if let Some(position) = entries
		.iter()
		.position(|entry| !entry.contains_key(DOC_INDEX_KEY) || !entry.contains_key(MOTIVATION_KEY))
	{
		return Err(RankingError::MissingFields { position });
	}

	Ok(entries)
}

pub fn parse_ranking(raw: &str) -> Result<Vec<RankingEntry>, RankingError> {
	let cleaned = clean_response(raw)?;

	decode_ranking(&cleaned)
}

pub fn read_item(entry: &RankingEntry) -> ItemOutcome {
	let raw_index = entry.get(DOC_INDEX_KEY).cloned().unwrap_or(Value::Null);
	let Some(doc_index) = json_integer(&raw_index) else {
		return ItemOutcome::Skipped(SkipReason::NonNumericIndex { value: raw_index });
	};
	let score = entry.get(SCORE_KEY).and_then(Value::as_f64);
	let motivation = read_motivation(entry.get(MOTIVATION_KEY));

	ItemOutcome::Ranked(RankingItem { doc_index, score, motivation })
}

// Fractional indices truncate toward zero.
fn json_integer(value: &Value) -> Option<i64> {
	let Value::Number(number) = value else {
		return None;
	};

	number.as_i64().or_else(|| number.as_f64().filter(|v| v.is_finite()).map(|v| v as i64))
}

fn read_motivation(value: Option<&Value>) -> String {
	let text = match value {
		None | Some(Value::Null) => None,
		Some(Value::String(text)) => Some(text.trim().to_string()),
		Some(other) => Some(other.to_string()),
	};

	text.filter(|text| !text.is_empty()).unwrap_or_else(|| DEFAULT_MOTIVATION.to_string())
}
