//! The REST surface of the directory service.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use roster_core::{Member, MemberDraft, MemberId};

use crate::error::ApiError;
use crate::state::AppState;

/// Create/update request body.
///
/// Both fields arrive optional so an absent field flows into the same
/// required-field rejection as a blank one, instead of dying in the
/// deserializer.
#[derive(Debug, Deserialize)]
pub struct MemberPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

impl MemberPayload {
    fn into_draft(self) -> MemberDraft {
        MemberDraft::new(self.name.unwrap_or_default(), self.role.unwrap_or_default())
    }
}

/// Builds the service router.
///
/// CORS is open to any origin, method, and header; the service is meant
/// to be called straight from a browser page served elsewhere.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/team", get(list_members).post(create_member))
        .route("/team/{id}", put(update_member).delete(remove_member))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET /team: every record, directory order.
async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.list())
}

/// POST /team: validate, mint an id, append. Answers 201 with the
/// stored record.
async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<MemberPayload>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let member = state.create(payload.into_draft())?;
    tracing::info!(id = %member.id, name = %member.name, "member created");
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /team/{id}: replace the record's fields, keeping id and
/// position. An unknown id is 404 even when the payload is also bad.
async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberPayload>,
) -> Result<Json<Member>, ApiError> {
    let member = state.update(MemberId::new(id), payload.into_draft())?;
    tracing::info!(id = %member.id, "member updated");
    Ok(Json(member))
}

/// DELETE /team/{id}: drop the record, answering with its final value.
async fn remove_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Member>, ApiError> {
    let member = state.remove(MemberId::new(id))?;
    tracing::info!(id = %member.id, "member removed");
    Ok(Json(member))
}

/// GET /health: liveness plus the current record count.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "members": state.len() }))
}
