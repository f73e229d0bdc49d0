use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod metadata_keys {
	pub const SONG_ID: &str = "songId";
	pub const ARTIST: &str = "artist";
	pub const TITLE: &str = "title";
	pub const GENRE: &str = "genre";
	pub const MOTIVATION: &str = "motivation";
}

/// A semantic-search hit. Its position in a batch is its relevance rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
	/// Vector-store identifier, unique within one retrieval batch.
	pub id: String,
	#[serde(default)]
	pub metadata: Map<String, Value>,
	/// Similarity reported by the vector store, when it reports one.
	#[serde(default)]
	pub similarity: Option<f32>,
}
impl CandidateDocument {
	pub fn new(id: impl Into<String>, metadata: Map<String, Value>) -> Self {
		Self { id: id.into(), metadata, similarity: None }
	}

	pub fn with_similarity(mut self, similarity: f32) -> Self {
		self.similarity = Some(similarity);

		self
	}

	/// Renders a metadata value as text. Strings are returned verbatim, other scalars use their
	/// JSON rendering, and null or absent values yield `None`.
	pub fn metadata_text(&self, key: &str) -> Option<String> {
		match self.metadata.get(key)? {
			Value::Null => None,
			Value::String(text) => Some(text.clone()),
			other => Some(other.to_string()),
		}
	}

	pub fn song_id(&self) -> Option<String> {
		self.metadata_text(metadata_keys::SONG_ID)
	}

	pub fn motivation(&self) -> Option<String> {
		self.metadata_text(metadata_keys::MOTIVATION)
	}

	/// Overwrites any motivation already attached.
	pub fn set_motivation(&mut self, motivation: impl Into<String>) {
		let key = metadata_keys::MOTIVATION.to_string();

		self.metadata.insert(key, Value::String(motivation.into()));
	}
}
