use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{
    DeleteResponse, DumpResponse, GetResponse, KeysResponse, ListResponse, SetResponse,
};
use crate::store::Record;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kv-facade API",
        version = "1.0.0",
        description = "HTTP facade over a hierarchical JSON key-value store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::set::set_handler,
        handlers::get::get_handler,
        handlers::list::list_handler,
        handlers::delete::delete_handler,
        handlers::delete_prefix::delete_prefix_handler,
        handlers::reset::reset_handler
    ),
    components(
        schemas(
            SetResponse,
            GetResponse,
            ListResponse,
            Record,
            DeleteResponse,
            KeysResponse,
            DumpResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
