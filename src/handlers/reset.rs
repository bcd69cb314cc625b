use crate::auth;
use crate::bulk;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{KeysResponse, TokenQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// DELETE /kv/full_reset_42 handler - Delete every record in the store
///
/// Same sweep as prefix delete, run from the root prefix. The deliberately
/// awkward path makes an accidental invocation unlikely.
#[utoipa::path(
    delete,
    path = routes::KV_FULL_RESET,
    params(
        ("token" = String, Query, description = "Shared-secret authorization token")
    ),
    responses(
        (status = 200, description = "Deleted keys", body = KeysResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn reset_handler(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<(StatusCode, Json<KeysResponse>), ApiError> {
    auth::require_token(query.token.as_deref(), &state.config.auth_token)?;

    let keys = bulk::full_reset(state.store.as_ref()).await?;

    tracing::info!("Database reset keys deleted: {}", keys.len());
    Ok((StatusCode::OK, Json(KeysResponse { keys })))
}
