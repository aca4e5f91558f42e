pub mod api;
pub mod widgets;

use crate::error::Result;
use crate::services::{PriceSource, ReportAssembler, YahooClient};
use crate::utils::{
    get_allowed_origins, get_provider, get_templates_path, get_upstream_timeout, get_yahoo_base_url,
};
use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use widgets::{WidgetKind, WIDGETS};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assembler: ReportAssembler,
    pub templates_path: PathBuf,
}

impl AppState {
    pub fn new(source: Arc<dyn PriceSource>, provider: impl Into<String>, templates_path: PathBuf) -> Self {
        Self {
            assembler: ReportAssembler::new(source, provider),
            templates_path,
        }
    }

    /// Build state against Yahoo Finance using environment configuration
    pub fn from_env() -> Result<Self> {
        let client = YahooClient::new(get_yahoo_base_url(), get_upstream_timeout())?;
        Ok(Self::new(Arc::new(client), get_provider(), get_templates_path()))
    }
}

/// Initialize the global tracing subscriber (`RUST_LOG` overrides `info`)
///
/// Logs go to stderr so CLI commands can print JSON on stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// CORS for the dashboard host; credentials rule out wildcard methods and headers
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the router: fixed routes plus one route per registered widget
pub fn build_router(state: AppState, origins: &[String]) -> Router {
    let mut router = Router::new()
        .route("/", get(api::root_handler))
        .route("/health", get(api::health_handler))
        .route("/widgets.json", get(api::widgets_handler))
        .route("/templates.json", get(api::templates_handler));

    for widget in WIDGETS {
        let class = widget.class;
        router = match widget.kind {
            WidgetKind::Table => router.route(
                &widget.path(),
                get(move |State(state): State<AppState>| api::table_handler(state, class)),
            ),
            WidgetKind::Chart => router.route(
                &widget.path(),
                get(
                    move |State(state): State<AppState>, Query(params): Query<api::PerformanceQuery>| {
                        api::performance_handler(state, class, params)
                    },
                ),
            ),
        };
    }

    router
        .layer(cors_layer(origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the axum server
pub async fn serve(port: u16) -> Result<()> {
    tracing::info!("Starting harmoniq server");

    let state = AppState::from_env()?;
    let origins = get_allowed_origins();
    tracing::info!(?origins, templates = %state.templates_path.display(), "Loaded configuration");

    tracing::info!("Registering routes:");
    tracing::info!("  GET /");
    tracing::info!("  GET /health");
    tracing::info!("  GET /widgets.json");
    tracing::info!("  GET /templates.json");
    for widget in WIDGETS {
        tracing::info!("  GET {}", widget.path());
    }

    let app = build_router(state, &origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
