use std::sync::Arc;

use cadence_service::{Capabilities, RecommendationService};
use cadence_storage::{db::Db, qdrant::QdrantStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<RecommendationService>,
}
impl AppState {
	pub async fn new(config: cadence_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let qdrant = QdrantStore::new(&config.storage.qdrant)?;
		let config = Arc::new(config);
		let capabilities = Capabilities::from_backends(config.clone(), db, qdrant);

		Ok(Self::from_service(RecommendationService::new(config, capabilities)))
	}

	pub fn from_service(service: RecommendationService) -> Self {
		Self { service: Arc::new(service) }
	}
}
