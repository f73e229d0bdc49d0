//! Single-turn chat completion against an OpenAI-compatible endpoint.

use serde_json::Value;

use crate::Result;

/// Sends `prompt` as one user message and returns the generated text.
///
/// `Ok(None)` means the endpoint answered but produced no text content. Transport and HTTP status
/// failures are errors. There is no retry.
pub async fn complete(
	cfg: &cadence_config::LlmProviderConfig,
	prompt: &str,
) -> Result<Option<String>> {
	let client = crate::http_client(cfg.timeout_ms)?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": [{ "role": "user", "content": prompt }],
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	Ok(parse_completion_text(&json))
}

fn parse_completion_text(json: &Value) -> Option<String> {
	json.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.map(str::to_string)
}
