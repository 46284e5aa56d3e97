//! Request handlers. Each one is a thin wrapper over a [`Catalog`] method.

use crate::error::ApiError;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use oilfinder_core::{DataStatus, DetailRecord, Suggestions};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TextQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub model: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub oil: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductLink {
    pub url: String,
}

pub async fn status(State(state): State<AppState>) -> Json<DataStatus> {
    Json(state.catalog.status().clone())
}

pub async fn makes(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.list_categories().to_vec())
}

pub async fn models(
    State(state): State<AppState>,
    Path(make): Path<String>,
) -> Json<Vec<String>> {
    Json(state.catalog.list_children(&make))
}

/// The make segment is informational; the model key alone selects the entry.
pub async fn years(
    State(state): State<AppState>,
    Path((_make, model_key)): Path<(String, String)>,
) -> Json<Vec<String>> {
    Json(state.catalog.list_year_ranges(&model_key))
}

pub async fn details_by_path(
    State(state): State<AppState>,
    Path((make, model_key, year_range)): Path<(String, String, String)>,
) -> Result<Json<DetailRecord>, ApiError> {
    tracing::debug!(%make, %model_key, %year_range, "details");
    Ok(Json(state.catalog.get_details(&model_key, &year_range)?))
}

pub async fn details_by_query(
    State(state): State<AppState>,
    params: Result<Query<DetailsQuery>, QueryRejection>,
) -> Result<Json<DetailRecord>, ApiError> {
    let Query(params) = params?;
    let model = params.model.ok_or_else(|| ApiError::missing_param("model"))?;
    let year = params.year.ok_or_else(|| ApiError::missing_param("year"))?;
    Ok(Json(state.catalog.get_details(&model, &year)?))
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Vec<DetailRecord>>, ApiError> {
    let Query(params) = params?;
    let query = params.q.ok_or_else(|| ApiError::missing_param("q"))?;
    Ok(Json(state.catalog.search(&query)?))
}

pub async fn suggest(
    State(state): State<AppState>,
    params: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Suggestions>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.catalog.suggest(params.q.as_deref().unwrap_or_default())))
}

pub async fn product(
    State(state): State<AppState>,
    params: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductLink>, ApiError> {
    let Query(params) = params?;
    let oil = params.oil.ok_or_else(|| ApiError::missing_param("oil"))?;
    state
        .catalog
        .product_link(&oil)
        .map(|url| Json(ProductLink { url }))
        .ok_or_else(|| ApiError::not_found(format!("no product link for {oil:?}")))
}
