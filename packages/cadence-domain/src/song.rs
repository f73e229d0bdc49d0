use serde::{Deserialize, Serialize};

/// A persisted song record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
	pub song_id: String,
	pub title: Option<String>,
	pub artist: Option<String>,
	pub album: Option<String>,
	pub genre: Option<String>,
	pub lyrics: Option<String>,
	pub description: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	pub release_year: Option<i32>,
}

/// The outward projection of a recommended song. Text fields are trimmed and never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
	pub title: String,
	pub artist: String,
	pub album: String,
	pub genre: String,
	pub release_year: Option<i32>,
	pub reason_for_recommendation: String,
}
impl RecommendationResult {
	pub fn from_song(song: &Song, reason: &str) -> Self {
		Self {
			title: sanitize_text(song.title.as_deref()),
			artist: sanitize_text(song.artist.as_deref()),
			album: sanitize_text(song.album.as_deref()),
			genre: sanitize_text(song.genre.as_deref()),
			release_year: song.release_year,
			reason_for_recommendation: sanitize_text(Some(reason)),
		}
	}
}

pub fn sanitize_text(text: Option<&str>) -> String {
	text.map(str::trim).unwrap_or_default().to_string()
}
