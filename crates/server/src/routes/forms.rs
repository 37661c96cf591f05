use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use service::forms::{quote_selection, CONTACT_ACK, QUOTE_ACK};

use crate::errors::ApiError;
use crate::state::AppState;

/// Contact form is decorative: fixed acknowledgement, nothing stored.
pub async fn contact() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": CONTACT_ACK}))
}

/// Quote form is decorative too.
pub async fn quote_submit() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": QUOTE_ACK}))
}

#[derive(Deserialize, Debug, Default)]
pub struct QuoteQuery {
    pub service_id: Option<u64>,
    pub service: Option<String>,
}

/// Quote prefill: summary of the selected listing, looked up by id
/// when given, else by name (first match).
pub async fn quote_prefill(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Html<String>, ApiError> {
    let core = state.core.read().await;
    let selected = quote_selection(&core.catalog, query.service_id, query.service.as_deref())
        .ok_or_else(|| service::errors::ServiceError::not_found("service"))?;
    Ok(Html(render::quote::render_quote_summary(selected)))
}
