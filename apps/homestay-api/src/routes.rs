use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::{StatusCode, header},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use homestay_service::{Error as ServiceError, SearchRequest};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/v1/areas", get(areas))
		.route("/api/v1/houses", get(houses))
		.route("/api/v1/houses/index", get(houses_index))
		.route("/api/v1/houses/{house_id}", get(house_detail))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn areas(State(state): State<AppState>) -> Result<Response, ApiError> {
	let body = state.service.areas().await?;

	Ok(json_body(body))
}

async fn houses(
	State(state): State<AppState>,
	Query(params): Query<SearchRequest>,
) -> Result<Response, ApiError> {
	let body = state.service.search(&params).await?;

	Ok(json_body(body))
}

async fn houses_index(State(state): State<AppState>) -> Result<Response, ApiError> {
	let body = state.service.home_widget().await?;

	Ok(json_body(body))
}

async fn house_detail(
	State(state): State<AppState>,
	Path(house_id): Path<i64>,
) -> Result<Response, ApiError> {
	let body = state.service.house_detail(house_id).await?;

	Ok(json_body(body))
}

/// Service responses are pre-serialized so cache hits replay verbatim.
fn json_body(body: String) -> Response {
	([(header::CONTENT_TYPE, "application/json")], body).into_response()
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

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidFilter { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_filter", message),
			ServiceError::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::StoreUnavailable { message } =>
				Self::new(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
