use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::json;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Boundary between reports and the wire. The current context decides the
/// status code and the `{"error": {"message": ...}}` body; 500-class causes
/// are logged in full and never leak details to the client.
#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        match self.0.current_context() {
            KernelError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"message": messages}})),
            )
                .into_response(),
            KernelError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": {"message": message}})),
            )
                .into_response(),
            KernelError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                Json(json!({"error": {"message": "Request Timeout"}})),
            )
                .into_response(),
            KernelError::Conflict | KernelError::Internal => {
                tracing::error!("request failed: {:?}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": {"message": "Internal Server Error"}})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;
    use serde_json::Value;

    use super::ErrorStatus;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_renders_400_with_message_list() {
        let status = ErrorStatus::from(Report::new(KernelError::Validation(vec![
            "instance requires property \"title\"".to_string(),
            "instance.pages is not of a type(s) integer".to_string(),
        ])));
        let response = status.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            serde_json::json!([
                "instance requires property \"title\"",
                "instance.pages is not of a type(s) integer",
            ])
        );
    }

    #[tokio::test]
    async fn not_found_renders_404_with_the_message() {
        let status = ErrorStatus::from(Report::new(KernelError::NotFound(
            "There is no book with an isbn '1".to_string(),
        )));
        let response = status.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "There is no book with an isbn '1");
    }

    #[tokio::test]
    async fn conflict_is_surfaced_as_a_server_error() {
        let response = ErrorStatus::from(Report::new(KernelError::Conflict)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn internal_renders_500_with_fixed_body() {
        let response = ErrorStatus::from(Report::new(KernelError::Internal)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Internal Server Error");
    }
}
