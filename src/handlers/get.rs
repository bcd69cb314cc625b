use crate::auth;
use crate::error::{ApiError, ErrorResponse};
use crate::key::Key;
use crate::models::{GetResponse, TokenQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};

/// GET /kv/get/{*key} handler - Retrieve the record at a key path
///
/// A missing key is not an error: the response carries the requested key
/// with null value and versionstamp, mirroring the backend's get result.
#[utoipa::path(
    get,
    path = routes::KV_GET,
    params(
        ("key" = String, Path, description = "Slash-delimited key path"),
        ("token" = String, Query, description = "Shared-secret authorization token")
    ),
    responses(
        (status = 200, description = "Record (value null when absent)", body = GetResponse),
        (status = 400, description = "Malformed key path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<(StatusCode, Json<GetResponse>), ApiError> {
    auth::require_token(query.token.as_deref(), &state.config.auth_token)?;

    let key = Key::parse(&path)?;
    let response = match state.store.get(&key).await? {
        Some(record) => {
            tracing::info!("Retrieved record at key: {}", key);
            GetResponse {
                key: record.key,
                value: Some(record.value),
                versionstamp: Some(record.versionstamp),
            }
        }
        None => {
            tracing::info!("No record at key: {}", key);
            GetResponse {
                key,
                value: None,
                versionstamp: None,
            }
        }
    };

    Ok((StatusCode::OK, Json(response)))
}
