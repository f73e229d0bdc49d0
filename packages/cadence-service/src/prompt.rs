use cadence_domain::{CandidateDocument, metadata_keys};

const UNKNOWN: &str = "Unknown";

/// Removes quote and backtick characters so the mood cannot break out of the prompt text.
pub fn sanitize_mood(mood: &str) -> String {
	mood.chars().filter(|c| !matches!(c, '"' | '\'' | '`')).collect::<String>().trim().to_string()
}

/// Renders the rerank instruction prompt. Documents are numbered from 1 in slice order.
pub fn build_rerank_prompt(mood: &str, docs: &[CandidateDocument]) -> String {
	let mut documents = String::new();

	for (i, doc) in docs.iter().enumerate() {
		let artist = field_or_unknown(doc, metadata_keys::ARTIST);
		let title = field_or_unknown(doc, metadata_keys::TITLE);

		documents.push_str(&format!("Doc {}: Artist: {artist}, Title: {title}", i + 1));

		if let Some(genre) = present_field(doc, metadata_keys::GENRE) {
			documents.push_str(&format!(", Genre: {genre}"));
		}

		documents.push('\n');
	}

	format!(
		"\
You are a music recommendation ranking assistant.

Rank the following songs based on their semantic relevance to the requested mood.
Consider the artist, title, genre, and overall musical style when determining relevance.
Provide a brief motivation for each ranking without referencing other songs.

Requested Mood: {mood}

Songs to rank:
{documents}
Instructions:
- Return ONLY a JSON array
- Include ALL documents in your response
- Sort by relevance (most relevant first)
- Score should be between 0.0 and 1.0
- Keep motivations concise (max 100 characters)

Expected format:
[{{\"doc_index\": 1, \"score\": 0.95, \"motivation\": \"Upbeat tempo matches energetic mood\"}}]
",
		mood = sanitize_mood(mood),
	)
}

fn present_field(doc: &CandidateDocument, key: &str) -> Option<String> {
	doc.metadata_text(key).map(|text| text.trim().to_string()).filter(|text| !text.is_empty())
}

fn field_or_unknown(doc: &CandidateDocument, key: &str) -> String {
	present_field(doc, key).unwrap_or_else(|| UNKNOWN.to_string())
}
