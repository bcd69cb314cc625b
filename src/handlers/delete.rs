use crate::auth;
use crate::error::{ApiError, ErrorResponse};
use crate::key::Key;
use crate::models::{DeleteResponse, TokenQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};

/// DELETE /kv/delete/{*key} handler - Remove the record at a key path
///
/// Deleting an absent key is a no-op, not an error.
#[utoipa::path(
    delete,
    path = routes::KV_DELETE,
    params(
        ("key" = String, Path, description = "Slash-delimited key path"),
        ("token" = String, Query, description = "Shared-secret authorization token")
    ),
    responses(
        (status = 200, description = "Record removed (or was already absent)", body = DeleteResponse),
        (status = 400, description = "Malformed key path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    auth::require_token(query.token.as_deref(), &state.config.auth_token)?;

    let key = Key::parse(&path)?;
    state.store.delete(&key).await?;

    tracing::info!("Deleted record at key: {}", key);
    Ok((StatusCode::OK, Json(DeleteResponse { ok: true })))
}
