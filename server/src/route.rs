pub use self::book::*;

mod book;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Catch-all for unknown paths and malformed identifiers; distinct from the
/// resource-specific 404 raised by the book routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": {"message": "Not Found"}})),
    )
        .into_response()
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;

    use super::not_found;

    #[tokio::test]
    async fn fallback_has_the_generic_body() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": {"message": "Not Found"}}));
    }
}
