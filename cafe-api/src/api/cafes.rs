//! Cafe REST API
//!
//! Handlers parse the request, call the service layer, and wrap the result in
//! the JSON envelope (`cafe`, `cafes`, `response.success`). Failures come back
//! as `ApiError` and render through its `IntoResponse` impl.

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::response::Html;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{ApiError, NOT_FOUND_LOCATION};
use crate::services::cafes::{self as service, AddCafeForm};
use crate::state::AppState;

type ApiResult = Result<Json<Value>, ApiError>;

const HOME_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Cafe API</title></head>\n<body>\n<h1>Cafe &amp; Wifi API</h1>\n<p>GET /random, /all, /search?loc=... &mdash; POST /add &mdash; PATCH /update-price/{id} &mdash; DELETE /report-closed/{id}</p>\n</body>\n</html>\n";

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub loc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceForm {
    pub new_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// GET /random
pub async fn random_cafe(State(state): State<AppState>) -> ApiResult {
    let cafe = service::random_one(&state.pool).await?;
    Ok(Json(json!({ "cafe": cafe })))
}

/// GET /all
pub async fn all_cafes(State(state): State<AppState>) -> ApiResult {
    let cafes = service::list_all(&state.pool).await?;
    Ok(Json(json!({ "cafes": cafes })))
}

/// GET /search?loc=...
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult {
    let loc = params.loc.unwrap_or_default();
    let cafes = service::find_by_location(&state.pool, &loc).await?;
    if cafes.is_empty() {
        return Err(ApiError::NotFound(NOT_FOUND_LOCATION));
    }
    Ok(Json(json!({ "cafes": cafes })))
}

/// POST /add
pub async fn add_cafe(
    State(state): State<AppState>,
    Form(form): Form<AddCafeForm>,
) -> ApiResult {
    service::add(&state.pool, form).await?;
    Ok(Json(
        json!({ "response": { "success": "Successfully added the new cafe." } }),
    ))
}

/// PATCH /update-price/{id}
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UpdatePriceForm>,
) -> ApiResult {
    service::update_price(&state.pool, id, form.new_price.as_deref()).await?;
    Ok(Json(
        json!({ "response": { "success": "Successfully updated the price." } }),
    ))
}

/// DELETE /report-closed/{id}
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> ApiResult {
    service::delete(&state.pool, id, form.api_key.as_deref(), &state.api_key).await?;
    Ok(Json(
        json!({ "response": { "success": format!("Cafe {id} successfully deleted") } }),
    ))
}
