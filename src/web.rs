//! Web server for the closest-price lookup
//!
//! Serves the search page and a single JSON endpoint, `POST /search`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::catalog::Catalog;
use crate::error::SearchError;
use crate::matcher::{search, PriceMatch};

/// Shared application state (read-only catalog, absent if loading failed)
#[derive(Clone)]
struct AppState {
    catalog: Option<Arc<Catalog>>,
}

/// Search request body
#[derive(Deserialize)]
struct SearchRequest {
    #[serde(default)]
    price: Option<Value>,
}

impl SearchRequest {
    /// Textual form of the price field; numbers are accepted, other JSON types are not
    fn price_text(&self) -> Option<String> {
        match &self.price {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Successful search response
#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    closest_cession_price: f64,
    sales_price: f64,
    item_code: String,
}

impl From<PriceMatch> for SearchResponse {
    fn from(found: PriceMatch) -> Self {
        Self {
            success: true,
            closest_cession_price: found.reference_price,
            sales_price: found.sales_price,
            item_code: found.item_code,
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.user_message())
    }
}

/// GET / - Serve the search page
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// POST /search {"price": "12,5"}
async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            log::warn!("Rejected search request body: {}", rejection.body_text());
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    let price = request.price_text();

    match search(state.catalog.as_deref(), price.as_deref()) {
        Ok(found) => {
            log::debug!(
                "Search {:?} matched item {} at {}",
                price,
                found.item_code,
                found.reference_price
            );
            Json(SearchResponse::from(found)).into_response()
        }
        Err(e) => {
            log::debug!("Search {:?} failed: {}", price, e);
            e.into_response()
        }
    }
}

/// Build the web server router
///
/// `static_dir`, when set, is served under `/static`.
pub fn create_router(catalog: Option<Arc<Catalog>>, static_dir: Option<PathBuf>) -> Router {
    let state = AppState { catalog };

    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/search", post(search_handler));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.with_state(state)
}

/// Start the web server and run until Ctrl-C or SIGTERM
pub async fn serve(
    catalog: Option<Arc<Catalog>>,
    static_dir: Option<PathBuf>,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(catalog, static_dir);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received");
}
