use std::collections::HashMap;

use qdrant_client::qdrant::{
	PointId, Query, QueryPointsBuilder, ScoredPoint, Value, point_id::PointIdOptions, value::Kind,
};
use serde_json::{Map, Number, Value as JsonValue};

use crate::Result;

pub struct QdrantStore {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
}
impl QdrantStore {
	pub fn new(cfg: &cadence_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone(), vector_dim: cfg.vector_dim })
	}

	/// Nearest-neighbour search over song vectors. Points scoring below `score_threshold` are
	/// left out by the server.
	pub async fn search(
		&self,
		vector: Vec<f32>,
		top_k: u64,
		score_threshold: f32,
	) -> Result<Vec<ScoredPoint>> {
		let search = QueryPointsBuilder::new(self.collection.clone())
			.query(Query::new_nearest(vector))
			.score_threshold(score_threshold)
			.with_payload(true)
			.limit(top_k);
		let response = self.client.query(search).await?;

		Ok(response.result)
	}
}

pub fn point_id_to_string(point_id: &PointId) -> Option<String> {
	match point_id.point_id_options.as_ref()? {
		PointIdOptions::Uuid(id) => Some(id.clone()),
		PointIdOptions::Num(num) => Some(num.to_string()),
	}
}

pub fn payload_to_metadata(payload: &HashMap<String, Value>) -> Map<String, JsonValue> {
	payload.iter().map(|(key, value)| (key.clone(), value_to_json(value))).collect()
}

fn value_to_json(value: &Value) -> JsonValue {
	match &value.kind {
		None | Some(Kind::NullValue(_)) => JsonValue::Null,
		Some(Kind::BoolValue(flag)) => JsonValue::Bool(*flag),
		Some(Kind::IntegerValue(number)) => JsonValue::from(*number),
		Some(Kind::DoubleValue(number)) =>
			Number::from_f64(*number).map(JsonValue::Number).unwrap_or(JsonValue::Null),
		Some(Kind::StringValue(text)) => JsonValue::String(text.clone()),
		Some(Kind::ListValue(list)) =>
			JsonValue::Array(list.values.iter().map(value_to_json).collect()),
		Some(Kind::StructValue(object)) => JsonValue::Object(
			object.fields.iter().map(|(key, value)| (key.clone(), value_to_json(value))).collect(),
		),
	}
}
