use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use service::session::{LoginOutcome, SessionState};

use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct LoginOutput {
    pub role: &'static str,
    pub admin: bool,
}

fn role_label(state: SessionState) -> &'static str {
    match state {
        SessionState::Administrator => "administrator",
        SessionState::StandardUser => "standard",
        SessionState::Anonymous => "anonymous",
    }
}

/// Login command. A mismatch is not an error in the core; here it maps
/// to 401 carrying the retry hint for the UI.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, (StatusCode, Json<serde_json::Value>)> {
    let mut core = state.core.write().await;
    // Inputs are trimmed at the adapter boundary (source parity); the
    // gate itself compares exactly.
    match core.gate.login(input.username.trim(), input.password.trim()) {
        LoginOutcome::Granted(session) => Ok(Json(LoginOutput {
            role: role_label(session),
            admin: session == SessionState::Administrator,
        })),
        LoginOutcome::Rejected { hint } => Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": hint})),
        )),
    }
}

/// Logout command: back to anonymous, abandoning any in-progress edit.
pub async fn logout(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut core = state.core.write().await;
    core.gate.logout();
    core.form.reset();
    Json(serde_json::json!({"ok": true}))
}
