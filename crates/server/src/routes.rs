use axum::{
    extract::{Path, State},
    middleware,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;
use crate::state::AppState;

pub mod admin;
pub mod forms;
pub mod session;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Public grid view: every listing as a card, in store order.
async fn services_grid(State(state): State<AppState>) -> Html<String> {
    let core = state.core.read().await;
    Html(render::grid::render_grid(core.catalog.list()))
}

/// Detail view for one listing (the source's modal body).
async fn service_detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Html<String>, ApiError> {
    let core = state.core.read().await;
    let service = core
        .catalog
        .find_by_id(id)
        .ok_or_else(|| service::errors::ServiceError::not_found("service"))?;
    Ok(Html(render::detail::render_detail(service)))
}

/// Build the full application router: public views and session
/// commands, plus the admin command surface behind the session gate.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/services", get(services_grid))
        .route("/services/:id", get(service_detail))
        .route("/session/login", post(session::login))
        .route("/session/logout", post(session::logout))
        .route("/contact", post(forms::contact))
        .route("/quote", get(forms::quote_prefill).post(forms::quote_submit));

    let admin_routes = Router::new()
        .route(
            "/admin/services",
            get(admin::services_table).post(admin::submit_service),
        )
        .route("/admin/services/:id/edit", post(admin::begin_edit))
        .route("/admin/services/:id/cancel-edit", post(admin::cancel_edit))
        .route("/admin/services/:id/delete", post(admin::delete_service))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin,
        ));

    public
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
