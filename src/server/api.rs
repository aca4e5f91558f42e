use crate::constants::APP_INFO;
use crate::models::{AssetClass, Period, Theme};
use crate::server::widgets::registry;
use crate::server::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

/// Query parameters for the `*_performance` endpoints
#[derive(Debug, Deserialize)]
pub struct PerformanceQuery {
    /// Period token (5d, mtd, ytd, 5y, 10y); unknown values fall back to ytd
    pub start_date: Option<String>,
    /// Display theme: dark (default) or light
    pub theme: Option<String>,
}

/// GET / - Application info
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "Info": APP_INFO }))
}

/// GET /health - Liveness probe
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /widgets.json - Widget metadata keyed by endpoint
#[instrument]
pub async fn widgets_handler() -> Json<Value> {
    let widgets = registry();
    debug!(count = widgets.len(), "Returning widget registry");
    Json(Value::Object(widgets))
}

/// GET /templates.json - Dashboard templates, served verbatim
#[instrument(skip(state))]
pub async fn templates_handler(State(state): State<AppState>) -> Response {
    let path = &state.templates_path;

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to read templates file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Failed to read templates: {}", e) })),
            )
                .into_response();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(templates) => (StatusCode::OK, Json(templates)).into_response(),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to parse templates file");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Failed to parse templates: {}", e) })),
            )
                .into_response()
        }
    }
}

/// GET /{class}_table - Performance metrics for one basket
///
/// Always 200; symbols that cannot be computed are left out of the rows.
#[instrument(skip(state))]
pub async fn table_handler(state: AppState, class: AssetClass) -> Response {
    let now = Local::now().naive_local();
    let rows = state.assembler.table(class, now).await;

    info!(asset_class = %class, rows = rows.len(), "Returning metrics table");
    (StatusCode::OK, Json(rows)).into_response()
}

/// GET /{class}_performance?start_date=ytd&theme=dark - Normalized chart
#[instrument(skip(state))]
pub async fn performance_handler(state: AppState, class: AssetClass, params: PerformanceQuery) -> Response {
    let period = Period::parse_or_default(params.start_date.as_deref());
    let theme = Theme::parse_or_default(params.theme.as_deref());
    let now = Local::now().naive_local();

    let figure = state.assembler.performance(class, period, theme, now).await;

    info!(
        asset_class = %class,
        period = %period,
        traces = figure.data.len(),
        "Returning performance chart"
    );
    (StatusCode::OK, Json(figure)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_router;
    use crate::services::report::tests::StubSource;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::Router;
    use chrono::{Datelike, Duration};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(stub: StubSource, templates_path: PathBuf) -> Router {
        router_with(Arc::new(stub), templates_path)
    }

    fn router_with(stub: Arc<StubSource>, templates_path: PathBuf) -> Router {
        let state = AppState::new(stub, "yfinance", templates_path);
        build_router(state, &["https://pro.openbb.co".to_string()])
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Two daily closes ending today, so every short window has data
    fn recent(first: f64, last: f64) -> Vec<(chrono::NaiveDate, f64)> {
        let today = Local::now().date_naive();
        vec![(today - Duration::days(1), first), (today, last)]
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let app = router(StubSource::default(), PathBuf::from("missing.json"));
        let (status, body) = get_json(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "Info": "HarmoniQ Insights App" }));

        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_table_route_skips_unavailable_symbols() {
        let stub = StubSource::default().with("BTC-USD", &recent(100.0, 110.0));
        let app = router(stub, PathBuf::from("missing.json"));

        let (status, body) = get_json(app, "/digital_assets_table").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Asset"], "Bitcoin USD");
        assert_eq!(rows[0]["Value"], 110.0);
        assert_eq!(rows[0]["5D"], 10.0);
        assert!(rows[0]["10Y (CAGR)"].is_number());
    }

    #[tokio::test]
    async fn test_table_route_with_no_data_is_empty_list() {
        let app = router(StubSource::default(), PathBuf::from("missing.json"));
        let (status, body) = get_json(app, "/volatility_table").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_performance_route_normalizes_traces() {
        let stub = StubSource::default().with("^VIX", &recent(20.0, 25.0));
        let app = router(stub, PathBuf::from("missing.json"));

        let (status, body) = get_json(app, "/volatility_performance?start_date=5d&theme=light").await;
        assert_eq!(status, StatusCode::OK);
        let traces = body["data"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["name"], "VIX");
        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(traces[0]["y"], json!([100.0, 125.0]));
        assert_eq!(body["layout"]["yaxis"]["title"]["text"], "Normalized Price (Base=100)");
        assert_eq!(body["layout"]["paper_bgcolor"], "#FFFFFF");
    }

    #[tokio::test]
    async fn test_performance_route_falls_back_to_ytd_and_dark() {
        let stub = Arc::new(StubSource::default());
        let app = router_with(stub.clone(), PathBuf::from("missing.json"));

        let (status, body) = get_json(app, "/equity_performance?start_date=XYZ&theme=neon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["layout"]["paper_bgcolor"], "#151518");

        let year = Local::now().year();
        let queries = stub.queries.lock().unwrap();
        assert_eq!(queries.len(), 6);
        assert!(queries.iter().all(|q| q.start_date.ordinal() == 1 && q.start_date.year() == year));
    }

    #[tokio::test]
    async fn test_widgets_route_lists_every_endpoint() {
        let app = router(StubSource::default(), PathBuf::from("missing.json"));
        let (status, body) = get_json(app, "/widgets.json").await;
        assert_eq!(status, StatusCode::OK);
        let widgets = body.as_object().unwrap();
        assert_eq!(widgets.len(), 12);
        assert_eq!(widgets["bonds_table"]["name"], "Bonds Overview");
        assert_eq!(widgets["digital_assets_performance"]["gridData"]["w"], 40);
    }

    #[tokio::test]
    async fn test_templates_route() {
        let path = std::env::temp_dir().join(format!("harmoniq-templates-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"name":"Markets"}]"#).unwrap();

        let (status, body) = get_json(router(StubSource::default(), path.clone()), "/templates.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "name": "Markets" }]));

        std::fs::write(&path, "not json").unwrap();
        let (status, body) = get_json(router(StubSource::default(), path.clone()), "/templates.json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
        std::fs::remove_file(&path).unwrap();

        let (status, _) = get_json(router(StubSource::default(), path), "/templates.json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_cors_allows_dashboard_origin() {
        let app = router(StubSource::default(), PathBuf::from("missing.json"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://pro.openbb.co")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://pro.openbb.co"
        );
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}
