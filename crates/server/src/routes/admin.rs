use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, Response};
use axum::{Form, Json};
use serde::Deserialize;

use models::service::Service;
use service::forms::ServiceFormInput;

use crate::errors::ApiError;
use crate::state::AppState;

/// Middleware: every admin command requires the session gate to be in
/// the administrator state. This gates visibility only; it is not an
/// authorization boundary.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let is_admin = state.core.read().await.gate.is_admin();
    if !is_admin {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}

/// Admin table body for the current catalog, in store order.
pub async fn services_table(State(state): State<AppState>) -> Html<String> {
    let core = state.core.read().await;
    Html(render::table::render_admin_table(core.catalog.list()))
}

/// Raw form fields as submitted; price and stock stay text until the
/// core parses them.
#[derive(Deserialize, Debug, Default)]
pub struct ServiceFormPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub promotion: String,
}

impl From<ServiceFormPayload> for ServiceFormInput {
    fn from(p: ServiceFormPayload) -> Self {
        Self {
            name: p.name,
            icon: p.icon,
            description: p.description,
            price: p.price,
            stock: p.stock,
            promotion: p.promotion,
        }
    }
}

/// Create or update depending on the edit cursor, then return the
/// saved record.
pub async fn submit_service(
    State(state): State<AppState>,
    Form(payload): Form<ServiceFormPayload>,
) -> Result<Json<Service>, ApiError> {
    let mut core = state.core.write().await;
    let core = &mut *core;
    let saved = core.form.submit(&mut core.catalog, payload.into())?;
    Ok(Json(saved))
}

/// Enter edit mode and return the current values for form prefill.
pub async fn begin_edit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Service>, ApiError> {
    let mut core = state.core.write().await;
    let core = &mut *core;
    let prefill = core.form.begin_edit(&core.catalog, id)?;
    Ok(Json(prefill))
}

pub async fn cancel_edit(State(state): State<AppState>) -> StatusCode {
    state.core.write().await.form.cancel_edit();
    StatusCode::NO_CONTENT
}

#[derive(Deserialize, Debug, Default)]
pub struct DeleteRequest {
    #[serde(default)]
    pub confirmed: bool,
}

/// Delete a listing. Without `confirmed=true` this is a no-op, the
/// adapter-side equivalent of dismissing the confirmation dialog.
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(req): Form<DeleteRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut core = state.core.write().await;
    let core = &mut *core;
    let deleted = core.form.delete(&mut core.catalog, id, req.confirmed)?;
    Ok(Json(serde_json::json!({"deleted": deleted})))
}
