use crate::auth;
use crate::error::{ApiError, ErrorResponse};
use crate::key::Key;
use crate::models::{SetResponse, TokenQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /kv/set/{*key} handler - Upsert a JSON value at a key path
#[utoipa::path(
    post,
    path = routes::KV_SET,
    params(
        ("key" = String, Path, description = "Slash-delimited key path"),
        ("token" = String, Query, description = "Shared-secret authorization token")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Value stored", body = SetResponse),
        (status = 400, description = "Malformed key path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<TokenQuery>,
    Json(value): Json<JsonValue>,
) -> Result<(StatusCode, Json<SetResponse>), ApiError> {
    auth::require_token(query.token.as_deref(), &state.config.auth_token)?;

    let key = Key::parse(&path)?;
    let versionstamp = state.store.set(&key, value).await?;

    tracing::info!("Stored record at key: {}", key);
    Ok((
        StatusCode::OK,
        Json(SetResponse {
            ok: true,
            versionstamp,
        }),
    ))
}
