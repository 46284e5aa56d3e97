//! oilfinder HTTP surface: axum router over a shared [`Catalog`].
//!
//! # Endpoints
//!
//! | Route | Answer |
//! |-------|--------|
//! | `GET /api/status` | dataset load state |
//! | `GET /api/makes` | derived categories |
//! | `GET /api/models/{make}` | compound keys under a make |
//! | `GET /api/years/{make}/{*model_key}` | year ranges of a model key |
//! | `GET /api/details/{make}/{model_key}/{year_range}` | one record, links normalized |
//! | `GET /api/details?model=&year=` | same, keys as query parameters |
//! | `GET /api/search?q=` | records whose key text contains `q` |
//! | `GET /api/suggest?q=` | make and model suggestions |
//! | `GET /api/products?oil=` | retailer search link for an oil type |

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use oilfinder_core::Catalog;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// State shared by every handler. Cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Build the router over `catalog`.
pub fn router(catalog: Arc<Catalog>) -> Router {
    let state = AppState { catalog };
    Router::new()
        .route("/api/status", get(routes::status))
        .route("/api/makes", get(routes::makes))
        .route("/api/models/{make}", get(routes::models))
        .route("/api/years/{make}/{*model_key}", get(routes::years))
        .route(
            "/api/details/{make}/{model_key}/{year_range}",
            get(routes::details_by_path),
        )
        .route("/api/details", get(routes::details_by_query))
        .route("/api/search", get(routes::search))
        .route("/api/suggest", get(routes::suggest))
        .route("/api/products", get(routes::product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(catalog: Arc<Catalog>, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, status = %catalog.status(), "oilfinder listening");
    axum::serve(listener, router(catalog)).await?;
    Ok(())
}
