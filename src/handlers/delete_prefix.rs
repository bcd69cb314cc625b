use crate::auth;
use crate::bulk;
use crate::error::{ApiError, ErrorResponse};
use crate::key::Key;
use crate::models::{KeysResponse, TokenQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};

/// DELETE /kv/delete_prefix/{*key} handler - Remove every record under a prefix
///
/// Best-effort bulk delete: not atomic, idempotent by retry. The response
/// lists every deleted key. Whole-store wipes go through the full-reset
/// endpoint; this one requires a non-empty prefix.
#[utoipa::path(
    delete,
    path = routes::KV_DELETE_PREFIX,
    params(
        ("key" = String, Path, description = "Slash-delimited key prefix"),
        ("token" = String, Query, description = "Shared-secret authorization token")
    ),
    responses(
        (status = 200, description = "Deleted keys", body = KeysResponse),
        (status = 400, description = "Malformed key path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn delete_prefix_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<(StatusCode, Json<KeysResponse>), ApiError> {
    auth::require_token(query.token.as_deref(), &state.config.auth_token)?;

    let prefix = Key::parse(&path)?;
    let keys = bulk::delete_prefix(state.store.as_ref(), &prefix).await?;

    tracing::info!("Keys with prefix '{}' deleted: {}", prefix, keys.len());
    Ok((StatusCode::OK, Json(KeysResponse { keys })))
}
