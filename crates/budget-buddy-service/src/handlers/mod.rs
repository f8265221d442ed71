//! API handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub mod expenses;
pub mod health;
pub mod landing;
pub mod settings;

/// Unwrap a JSON body into an object.
///
/// A missing, malformed or non-object body reads as an empty object. A body
/// over the size limit is reported as [`ApiError::PayloadTooLarge`].
pub(crate) fn body_object(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>, ApiError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::debug!(error = %rejection, "Request body over limit");
            Err(ApiError::PayloadTooLarge)
        }
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::DefaultBodyLimit;
    use axum::routing::post;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::json;

    async fn echo_keys(body: Result<Json<Value>, JsonRejection>) -> Result<Json<Value>, ApiError> {
        let map = body_object(body)?;
        Ok(Json(json!(map.len())))
    }

    fn server(limit: usize) -> TestServer {
        let app = Router::new()
            .route("/", post(echo_keys))
            .layer(DefaultBodyLimit::max(limit));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn object_body_is_read() {
        let response = server(1024).post("/").json(&json!({"a": 1, "b": 2})).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!(2));
    }

    #[tokio::test]
    async fn missing_or_non_object_body_is_empty() {
        let server = server(1024);

        let missing = server.post("/").await;
        missing.assert_status_ok();
        assert_eq!(missing.json::<Value>(), json!(0));

        let array = server.post("/").json(&json!([1, 2, 3])).await;
        assert_eq!(array.json::<Value>(), json!(0));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let body = json!({"description": "x".repeat(256), "amount": 1});

        let response = server(64).post("/").json(&body).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(response.json::<Value>(), json!({"error": "Payload too large"}));
    }
}
