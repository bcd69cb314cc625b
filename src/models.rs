use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::key::Key;
use crate::store::Record;

/// Response type for successful set operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetResponse {
    pub ok: bool,
    /// Backend-assigned versionstamp for the committed write
    pub versionstamp: String,
}

/// Response type for get operations
///
/// Mirrors the backend entry shape: a missing record is a 200 with null
/// value and versionstamp, not a 404.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetResponse {
    #[schema(value_type = String)]
    pub key: Key,
    pub value: Option<JsonValue>,
    pub versionstamp: Option<String>,
}

/// Query parameters for protected endpoints
#[derive(Deserialize, utoipa::ToSchema)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Query parameters for list endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub token: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<usize>,
}

/// Response type for list endpoint
///
/// `cursor` is null once the enumeration is exhausted; an empty `records`
/// array alone does not mean done.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub records: Vec<Record>,
    pub cursor: Option<String>,
}

/// Response type for single-key delete operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// Response type for bulk delete operations: every deleted key, as path strings
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct KeysResponse {
    #[schema(value_type = Vec<String>)]
    pub keys: Vec<Key>,
}

/// Echo of an inbound request, for the debug dump endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DumpResponse {
    pub method: String,
    pub uri: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Option<JsonValue>,
}
