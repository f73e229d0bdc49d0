mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, EmbeddingProviderConfig, LlmProviderConfig, Postgres, Providers, Qdrant, Recommend,
	Security, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse_at(&raw, path)
}

/// Parses, normalizes, and validates an in-memory TOML document.
pub fn parse(raw: &str) -> Result<Config> {
	parse_at(raw, Path::new("<inline>"))
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::validation("service.http_bind must be non-empty."));
	}
	if cfg.storage.qdrant.collection.trim().is_empty() {
		return Err(Error::validation("storage.qdrant.collection must be non-empty."));
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::validation(
			"providers.embedding.dimensions must be greater than zero.",
		));
	}
	if cfg.providers.embedding.dimensions != cfg.storage.qdrant.vector_dim {
		return Err(Error::validation(
			"providers.embedding.dimensions must match storage.qdrant.vector_dim.",
		));
	}

	let temperature = cfg.providers.llm_rerank.temperature;

	if !temperature.is_finite() {
		return Err(Error::validation(
			"providers.llm_rerank.temperature must be a finite number.",
		));
	}
	if temperature < 0.0 {
		return Err(Error::validation("providers.llm_rerank.temperature must be zero or greater."));
	}

	for (label, key) in [
		("embedding", &cfg.providers.embedding.api_key),
		("llm_rerank", &cfg.providers.llm_rerank.api_key),
	] {
		if key.trim().is_empty() {
			return Err(Error::validation(format!("Provider {label} api_key must be non-empty.")));
		}
	}

	validate_recommend(&cfg.recommend)
}

fn validate_recommend(recommend: &Recommend) -> Result<()> {
	if recommend.default_limit == 0 {
		return Err(Error::validation("recommend.default_limit must be greater than zero."));
	}
	if recommend.max_limit < recommend.default_limit {
		return Err(Error::validation(
			"recommend.max_limit must be greater than or equal to recommend.default_limit.",
		));
	}
	if recommend.over_fetch_factor == 0 {
		return Err(Error::validation("recommend.over_fetch_factor must be greater than zero."));
	}
	if !recommend.similarity_threshold.is_finite() {
		return Err(Error::validation("recommend.similarity_threshold must be a finite number."));
	}
	if !(0.0..=1.0).contains(&recommend.similarity_threshold) {
		return Err(Error::validation(
			"recommend.similarity_threshold must be in the range 0.0-1.0.",
		));
	}
	if recommend.max_rerank_candidates == 0 {
		return Err(Error::validation(
			"recommend.max_rerank_candidates must be greater than zero.",
		));
	}

	Ok(())
}

fn parse_at(raw: &str, path: &Path) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

fn normalize(cfg: &mut Config) {
	if cfg.security.api_auth_token.as_deref().map(|token| token.trim().is_empty()).unwrap_or(false)
	{
		cfg.security.api_auth_token = None;
	}
}
