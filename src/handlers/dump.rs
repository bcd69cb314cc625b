use crate::models::DumpResponse;
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{HeaderMap, Method, Uri};
use axum::Json;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// ANY /dump/{*rest} handler - Echo the request back as JSON
///
/// Debug endpoint, intentionally unauthenticated: it never touches the
/// store. The body is parsed as JSON when possible, otherwise echoed as a
/// string, otherwise null.
pub async fn dump_handler(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Json<DumpResponse> {
    let header_map: HashMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<JsonValue>(&body) {
            Ok(value) => Some(value),
            Err(_) => String::from_utf8(body.to_vec()).ok().map(JsonValue::String),
        }
    };

    Json(DumpResponse {
        method: method.to_string(),
        uri: uri.to_string(),
        path: uri.path().to_string(),
        headers: header_map,
        query,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use axum::{body::Body, http::Request, routing::any, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::DUMP, any(dump_handler))
    }

    #[tokio::test]
    async fn test_dump_endpoint_echoes_request() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dump/stuff/goes_here?token=123&x=y")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"hello\":\"world\"}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let dump: DumpResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(dump.method, "POST");
        assert_eq!(dump.path, "/dump/stuff/goes_here");
        assert_eq!(dump.query.get("x").map(String::as_str), Some("y"));
        assert_eq!(dump.body, Some(serde_json::json!({"hello": "world"})));
    }

    #[tokio::test]
    async fn test_dump_endpoint_non_json_body_becomes_string() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/dump/raw")
                    .body(Body::from("plain text"))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let dump: DumpResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(dump.body, Some(serde_json::json!("plain text")));
    }

    #[tokio::test]
    async fn test_dump_endpoint_requires_no_token() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/dump/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let dump: DumpResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(dump.method, "GET");
        assert!(dump.body.is_none());
    }
}
