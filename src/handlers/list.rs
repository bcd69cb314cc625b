use crate::auth;
use crate::error::{ApiError, ErrorResponse};
use crate::key::Key;
use crate::models::{ListQuery, ListResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::DEFAULT_LIST_LIMIT;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};

/// GET /kv/list/{*key} handler - List records under a key prefix
///
/// Also mounted at /kv/list with no path, which lists the whole store.
/// Query parameters:
/// - cursor: continuation token from a previous page (optional)
/// - limit: maximum records per page (optional, default: 100)
///
/// The response cursor is null once the enumeration is exhausted. Clients
/// must treat a missing cursor, not an empty page, as the end signal.
#[utoipa::path(
    get,
    path = routes::KV_LIST,
    params(
        ("key" = String, Path, description = "Slash-delimited key prefix"),
        ("token" = String, Query, description = "Shared-secret authorization token"),
        ("cursor" = Option<String>, Query, description = "Continuation token from a previous page"),
        ("limit" = Option<usize>, Query, description = "Maximum records per page")
    ),
    responses(
        (status = 200, description = "One page of records plus continuation cursor", body = ListResponse),
        (status = 400, description = "Malformed key path or cursor", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    path: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    auth::require_token(query.token.as_deref(), &state.config.auth_token)?;

    let prefix = match path {
        Some(Path(p)) => Key::parse(&p)?,
        None => Key::root(),
    };
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    // An empty cursor parameter means "start from the beginning", same as
    // no cursor at all.
    let cursor = query.cursor.as_deref().filter(|c| !c.is_empty());

    let page = state.store.list(&prefix, limit, cursor).await?;

    tracing::info!(
        "Listed {} records under prefix '{}' (limit: {}, more: {})",
        page.records.len(),
        prefix,
        limit,
        page.cursor.is_some()
    );

    Ok((
        StatusCode::OK,
        Json(ListResponse {
            records: page.records,
            cursor: page.cursor,
        }),
    ))
}
