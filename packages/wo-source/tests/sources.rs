use std::{
	env, fs,
	future::IntoFuture,
	sync::{Arc, Mutex},
};

use axum::{
	Json, Router,
	extract::{RawQuery, State},
	http::StatusCode,
	response::IntoResponse,
	routing,
};
use serde_json::{Map, Value};
use tokio::{
	net::TcpListener,
	sync::{oneshot, oneshot::Sender},
};

use wo_domain::StrategyId;
use wo_source::{Error, MockTable, ODataClient, StrategyClassifier};
use wo_testkit::sample_records;

const ENTITY_PATH: &str = "/sap/opu/odata/sap/ZTEM_TEST_CATS_SRV/WOHeaderSet";

#[derive(Clone, Default)]
struct Seen {
	query: Arc<Mutex<Option<String>>>,
}

fn odata_config(base_url: String) -> wo_config::ODataSource {
	wo_config::ODataSource {
		base_url,
		service_path: "/sap/opu/odata/sap/ZTEM_TEST_CATS_SRV".to_string(),
		entity_set: "WOHeaderSet".to_string(),
		timeout_ms: 2_000,
		top: Some(100),
		sap_client: Some("100".to_string()),
		username: None,
		password: None,
		default_headers: Map::new(),
	}
}

fn classifier() -> StrategyClassifier {
	StrategyClassifier::from_config(&wo_config::Strategy::default())
		.expect("Default mapping should be valid.")
}

async fn start_sap_server(app: Router) -> (String, Sender<()>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind SAP server.");
	let addr = listener.local_addr().expect("Failed to read SAP server address.");
	let (tx, rx) = oneshot::channel();
	let server = axum::serve(listener, app).with_graceful_shutdown(async move {
		let _ = rx.await;
	});

	tokio::spawn(async move {
		let _ = server.into_future().await;
	});

	(format!("http://{addr}"), tx)
}

async fn entity_set_handler(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
	*seen.query.lock().unwrap_or_else(|err| err.into_inner()) = query;

	Json(serde_json::json!({
		"d": { "results": [
			{ "Vin": "ABC123XYZ", "DealerCode": "D001", "Wono": "1", "Landx": "Germany",
			  "Credate": "/Date(1710028800000)/", "Wonay": "X" },
			{ "Vin": "TMS777TR4", "DealerCode": "TR-221", "Wono": "2", "Landx": "Turkey",
			  "Credate": "/Date(1711843200000)/", "Wonay": "" }
		] }
	}))
}

async fn failing_handler() -> impl IntoResponse {
	(StatusCode::SERVICE_UNAVAILABLE, "gateway maintenance")
}

async fn atom_feed_handler() -> impl IntoResponse {
	(StatusCode::OK, "<feed xmlns=\"http://www.w3.org/2005/Atom\"/>")
}

async fn overflowing_credate_handler() -> Json<Value> {
	Json(serde_json::json!({
		"d": { "results": [
			{ "Vin": "ABC123XYZ", "Landx": "Germany",
			  "Credate": "/Date(170141183460469231731687303715884105727)/" }
		] }
	}))
}

#[tokio::test]
async fn odata_client_fetches_and_maps_the_entity_set() {
	let seen = Seen::default();
	let app =
		Router::new().route(ENTITY_PATH, routing::get(entity_set_handler)).with_state(seen.clone());
	let (base_url, shutdown) = start_sap_server(app).await;
	let client = ODataClient::new(&odata_config(format!("{base_url}/")), classifier())
		.expect("Failed to build client.");
	let records = client.fetch_work_orders("DE").await.expect("Fetch should succeed.");

	assert_eq!(client.url(), format!("{base_url}{ENTITY_PATH}"));
	assert_eq!(records.len(), 2);
	assert_eq!(records[0].strategy, StrategyId::Germany);
	assert!(records[0].enability_button);
	assert_eq!(records[1].strategy, StrategyId::TemsaGlobal);
	assert_eq!(records[1].credate.map(|date| date.to_string()), Some("2024-03-31".to_string()));

	let query = seen
		.query
		.lock()
		.unwrap_or_else(|err| err.into_inner())
		.clone()
		.expect("Expected a query string.");

	assert!(query.contains("%24format=json") || query.contains("$format=json"), "{query}");
	assert!(query.contains("top=100"), "{query}");
	assert!(query.contains("sap-client=100"), "{query}");
	assert!(query.contains("sap-language=DE"), "{query}");
	assert!(!query.contains("filter"), "{query}");

	let _ = shutdown.send(());
}

#[tokio::test]
async fn odata_http_errors_surface_status_and_body() {
	let app = Router::new().route(ENTITY_PATH, routing::get(failing_handler));
	let (base_url, shutdown) = start_sap_server(app).await;
	let client =
		ODataClient::new(&odata_config(base_url), classifier()).expect("Failed to build client.");
	let err = client.fetch_work_orders("EN").await.expect_err("Expected status error.");

	assert!(matches!(err, Error::Status { status: 503, .. }), "Unexpected error: {err:?}");
	assert_eq!(err.to_string(), "SAP server returned error 503: gateway maintenance");

	let _ = shutdown.send(());
}

#[tokio::test]
async fn odata_non_json_payload_is_an_invalid_response() {
	let app = Router::new().route(ENTITY_PATH, routing::get(atom_feed_handler));
	let (base_url, shutdown) = start_sap_server(app).await;
	let client =
		ODataClient::new(&odata_config(base_url), classifier()).expect("Failed to build client.");
	let err = client.fetch_work_orders("EN").await.expect_err("Expected invalid response.");

	assert!(matches!(err, Error::InvalidResponse { .. }), "Unexpected error: {err:?}");

	let _ = shutdown.send(());
}

#[tokio::test]
async fn odata_out_of_range_credate_is_an_invalid_response() {
	let app = Router::new().route(ENTITY_PATH, routing::get(overflowing_credate_handler));
	let (base_url, shutdown) = start_sap_server(app).await;
	let client =
		ODataClient::new(&odata_config(base_url), classifier()).expect("Failed to build client.");
	let err = client.fetch_work_orders("EN").await.expect_err("Expected invalid response.");

	assert!(matches!(err, Error::InvalidResponse { .. }), "Unexpected error: {err:?}");
	assert!(err.to_string().contains("invalid Credate"), "Unexpected error: {err}");

	let _ = shutdown.send(());
}

#[tokio::test]
async fn odata_unreachable_backend_is_reported() {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind spare port.");
	let addr = listener.local_addr().expect("Failed to read spare address.");

	drop(listener);

	let client = ODataClient::new(&odata_config(format!("http://{addr}")), classifier())
		.expect("Failed to build client.");
	let err = client.fetch_work_orders("EN").await.expect_err("Expected connect error.");

	assert!(matches!(err, Error::Unreachable { .. }), "Unexpected error: {err:?}");
	assert!(err.to_string().starts_with("SAP backend is not accessible."));
}

#[test]
fn mock_table_loads_records_in_file_order() {
	let records = sample_records();
	let mut path = env::temp_dir();

	path.push(format!("wo_source_mock_{}.json", std::process::id()));
	fs::write(&path, serde_json::to_string(&records).expect("Failed to render records."))
		.expect("Failed to write mock table.");

	let table = MockTable::load(&path);

	fs::remove_file(&path).expect("Failed to remove mock table.");

	let table = table.expect("Mock table should load.");

	assert_eq!(table.records(), records.as_slice());
	assert_eq!(table.snapshot(), records);
}

#[test]
fn mock_table_reports_unreadable_and_malformed_files() {
	let mut missing = env::temp_dir();

	missing.push("wo_source_mock_missing.json");

	let err = MockTable::load(&missing).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadTable { .. }), "Unexpected error: {err:?}");

	let mut malformed = env::temp_dir();

	malformed.push(format!("wo_source_mock_malformed_{}.json", std::process::id()));
	fs::write(&malformed, r#"[{"vin": "V1"}]"#).expect("Failed to write mock table.");

	let err = MockTable::load(&malformed);

	fs::remove_file(&malformed).expect("Failed to remove mock table.");

	assert!(
		matches!(err, Err(Error::ParseTable { .. })),
		"A record without a strategy should be rejected."
	);
}

#[test]
fn mock_table_without_path_is_empty() {
	let table = MockTable::from_config(Some(&wo_config::MockSource { path: None }))
		.expect("Empty table should build.");

	assert!(table.records().is_empty());
	assert!(MockTable::from_config(None).expect("Empty table should build.").records().is_empty());
}
