use axum::{
	Json, Router,
	extract::State,
	http::{HeaderMap, StatusCode, header::AUTHORIZATION},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use cadence_domain::RecommendationResult;
use cadence_service::{Error, RecommendRequest};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/songs/v1/recommendations", post(recommend))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn recommend(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(payload): Json<RecommendRequest>,
) -> Result<Json<Vec<RecommendationResult>>, ApiError> {
	if let Some(expected) = state.service.cfg.security.api_auth_token.as_deref()
		&& read_bearer_token(&headers) != Some(expected)
	{
		return Err(ApiError::new(
			StatusCode::UNAUTHORIZED,
			"unauthorized",
			"A valid bearer token is required.",
		));
	}

	let response = state.service.recommend(&payload.mood, payload.limit).await?;

	Ok(Json(response))
}

fn read_bearer_token(headers: &HeaderMap) -> Option<&str> {
	let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
	let token = value.strip_prefix("Bearer ")?.trim();

	if token.is_empty() { None } else { Some(token) }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			Error::Retrieval { .. } => {
				tracing::error!(error = %err, "Recommendation generation failed.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "retrieval_failed", err.to_string())
			},
			Error::Provider { .. } | Error::Storage { .. } | Error::Qdrant { .. } => {
				tracing::error!(error = %err, "Recommendation generation failed.");

				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"recommendation_failed",
					err.to_string(),
				)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
