use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub recommend: Recommend,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	pub collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub llm_rerank: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

/// Knobs for the retrieval and rerank pipeline.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Recommend {
	/// Used when a request carries no limit.
	pub default_limit: u32,
	/// Upper bound on the requested limit. Only applied when `enforce_max_limit` is set.
	pub max_limit: u32,
	pub enforce_max_limit: bool,
	/// Retrieval asks the vector store for `over_fetch_factor * limit` candidates.
	pub over_fetch_factor: u32,
	/// Minimum similarity a vector hit must reach to become a candidate.
	pub similarity_threshold: f32,
	/// Candidates beyond this count are cut before the rerank prompt is built.
	pub max_rerank_candidates: u32,
}
impl Default for Recommend {
	fn default() -> Self {
		Self {
			default_limit: 10,
			max_limit: 100,
			enforce_max_limit: false,
			over_fetch_factor: 2,
			similarity_threshold: 0.6,
			max_rerank_candidates: 50,
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
	pub api_auth_token: Option<String>,
}
