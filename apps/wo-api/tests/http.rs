use std::sync::Arc;

use axum::{
	Router,
	body::{self, Body},
	http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tower::util::ServiceExt;

use wo_api::{routes, state::AppState};
use wo_config::{Config, RequestDefaults, Service, Source, Strategy};
use wo_service::WorkOrderService;
use wo_source::MockTable;
use wo_testkit::sample_records;

fn test_config() -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		request: RequestDefaults::default(),
		source: Source { kind: "mock".to_string(), mock: None, odata: None },
		strategy: Strategy::default(),
	}
}

fn test_app() -> Router {
	let service = WorkOrderService::with_source(
		test_config(),
		Arc::new(MockTable::new(sample_records())),
	);

	routes::router(AppState::from_service(service))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
	let response = app.oneshot(request).await.expect("Failed to call router.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Response body must be JSON.")
	};

	(status, json)
}

fn search_request(body: &str) -> Request<Body> {
	Request::builder()
		.method(Method::POST)
		.uri("/api/sap/work-orders/search")
		.header(CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("Failed to build request.")
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request.")
}

fn wonos(json: &Value) -> Vec<String> {
	json["work_orders"]
		.as_array()
		.expect("work_orders must be an array.")
		.iter()
		.map(|record| record["wono"].as_str().unwrap_or_default().to_string())
		.collect()
}

#[tokio::test]
async fn health_ok() {
	let (status, json) = send(test_app(), get("/health")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["status"], "healthy");
	assert_eq!(json["service"], routes::SERVICE_NAME);
}

#[tokio::test]
async fn root_banner_answers_get_and_head() {
	let (status, json) = send(test_app(), get("/")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["message"], "SAP Portal API is running");
	assert!(json.get("version").is_none(), "Root banner must not carry a version: {json}");

	let head = Request::builder()
		.method(Method::HEAD)
		.uri("/")
		.body(Body::empty())
		.expect("Failed to build request.");
	let (status, json) = send(test_app(), head).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, Value::Null);
}

#[tokio::test]
async fn api_root_answers_get_and_head() {
	let (status, json) = send(test_app(), get("/api")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["message"], routes::SERVICE_NAME);
	assert_eq!(json["version"], wo_cli::VERSION);

	let head = Request::builder()
		.method(Method::HEAD)
		.uri("/api")
		.body(Body::empty())
		.expect("Failed to build request.");
	let (status, _) = send(test_app(), head).await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn search_scenario_over_http() {
	let (status, json) = send(
		test_app(),
		search_request(
			r#"{"vin": "abc123", "date_from": "2024-03-01", "date_to": "2024-03-31", "germany": true}"#,
		),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["success"], true);
	assert_eq!(wonos(&json), vec!["WO-1001"]);
	assert_eq!(json["work_orders"][0]["credate"], "2024-03-10");
	assert_eq!(json["work_orders"][0]["strategy"], "GERMANY");

	let (_, json) = send(
		test_app(),
		search_request(
			r#"{"vin": "abc123", "date_from": "2024-03-01", "date_to": "2024-03-31", "france": true}"#,
		),
	)
	.await;

	assert_eq!(json["success"], true);
	assert_eq!(json["work_orders"], serde_json::json!([]));
}

#[tokio::test]
async fn identity_only_request_returns_everything() {
	let (_, json) =
		send(test_app(), search_request(r#"{"i_lang": "EN", "i_usercode": "TESTUSER"}"#)).await;

	assert_eq!(json["success"], true);
	assert_eq!(wonos(&json), vec!["WO-1001", "WO-1002", "WO-1003", "WO-1004", "WO-2001"]);
}

#[tokio::test]
async fn inverted_range_is_reported_in_the_envelope() {
	let (status, json) = send(
		test_app(),
		search_request(r#"{"date_from": "2024-04-01", "date_to": "2024-03-01"}"#),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["success"], false);
	assert_eq!(json["error_type"], "validation_error");
	assert_eq!(json["work_orders"], serde_json::json!([]));
	assert!(
		json["message"].as_str().unwrap_or_default().starts_with("Search failed: "),
		"Unexpected message: {}",
		json["message"]
	);
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
	let (status, json) = send(test_app(), search_request(r#"{"germany": "yes please"}"#)).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["success"], false);
	assert_eq!(json["error_type"], "validation_error");
	assert_eq!(json["work_orders"], serde_json::json!([]));
}

#[tokio::test]
async fn form_data_lists_strategies() {
	let (status, json) = send(test_app(), get("/api/sap/work-orders/form-data")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["strategies"].as_array().map(Vec::len), Some(5));
	assert_eq!(json["strategies"][1]["value"], "TEMSA_GLOBAL_GWTK");
	assert_eq!(json["wo_types"][0]["text"], "Warranty Repair");
}
