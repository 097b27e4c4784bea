use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

use crate::generate_payload::GeneratePayload;
use crate::generate_response::{ErrorResponse, GenerateResponse};

const REQUIRED_KEYS: [&str; 2] = ["texts", "question"];

/// POST /generate. Validates the body locally and reports the two client
/// error cases as structured 400s; every downstream failure becomes a bare
/// 500.
pub async fn handle_generate(body: Bytes) -> Response {
    let data: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return invalid_json(),
    };

    // A JSON body that is not an object cannot carry the required keys.
    let Some(object) = data.as_object() else {
        return invalid_json();
    };

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Missing key in request data: '{}'", key),
                }),
            )
                .into_response();
        }
    }

    let payload: GeneratePayload = match serde_json::from_value(data) {
        Ok(payload) => payload,
        Err(err) => {
            log::error!("Malformed /generate payload: {}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match rag_pipeline::generate_answer(&payload.texts, &payload.question).await {
        Ok(answer) => (StatusCode::OK, Json(GenerateResponse { response: answer })).into_response(),
        Err(err) => {
            log::error!("Failed to generate response: {:#}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn invalid_json() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Invalid or Missing JSON data".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/generate", post(handle_generate))
    }

    async fn send(body: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn missing_body_is_rejected() {
        let (status, body) = send("").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid or Missing JSON data");
    }

    #[tokio::test]
    async fn non_json_body_is_rejected() {
        let (status, body) = send("this is not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid or Missing JSON data");
    }

    #[tokio::test]
    async fn json_array_body_is_rejected() {
        let (status, body) = send(r#"["The sky is blue."]"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid or Missing JSON data");
    }

    #[tokio::test]
    async fn missing_texts_names_the_key() {
        let (status, body) = send(r#"{"question": "What color is the sky?"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing key in request data: 'texts'");
    }

    #[tokio::test]
    async fn missing_question_names_the_key() {
        let (status, body) = send(r#"{"texts": ["The sky is blue."]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing key in request data: 'question'");
    }

    #[tokio::test]
    async fn wrongly_typed_texts_is_a_server_error() {
        let (status, _) = send(r#"{"texts": "not a list", "question": "Why?"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
