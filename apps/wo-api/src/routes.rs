use axum::{
	Json, Router,
	extract::{State, rejection::JsonRejection},
	routing::{get, post},
};
use serde::Serialize;

use wo_service::{Error as ServiceError, SearchFormData, SearchRequest, SearchResponse};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "SAP Portal API";

/// `GET` routes answer `HEAD` as well.
pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(root))
		.route("/api", get(api_root))
		.route("/health", get(health))
		.route("/api/sap/work-orders/search", post(search))
		.route("/api/sap/work-orders/form-data", get(form_data))
		.with_state(state)
}

#[derive(Debug, Serialize)]
struct Banner {
	message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	version: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct Health {
	status: &'static str,
	service: &'static str,
}

async fn root() -> Json<Banner> {
	Json(Banner { message: format!("{SERVICE_NAME} is running"), version: None })
}

async fn api_root() -> Json<Banner> {
	Json(Banner { message: SERVICE_NAME.to_string(), version: Some(wo_cli::VERSION) })
}

async fn health() -> Json<Health> {
	Json(Health { status: "healthy", service: SERVICE_NAME })
}

/// Always answers with the search envelope, including for bodies that fail to deserialize.
async fn search(
	State(state): State<AppState>,
	payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Json<SearchResponse> {
	let response = match payload {
		Ok(Json(request)) => state.service.search(request).await,
		Err(rejection) => {
			let err = ServiceError::InvalidRequest { message: rejection.body_text() };

			tracing::warn!(status = %rejection.status(), error = %err, "Rejected search body.");

			SearchResponse::failed(&err)
		},
	};

	Json(response)
}

async fn form_data(State(state): State<AppState>) -> Json<SearchFormData> {
	Json(state.service.form_data())
}
