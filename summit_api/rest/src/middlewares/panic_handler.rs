use std::panic::AssertUnwindSafe;

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::routes::internal_server_error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => internal_server_error(anyhow!("request handler panicked")),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::StatusCode,
        routing,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    async fn panicking() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn panic_becomes_server_error() {
        // Arrange
        let router = add(Router::new().route("/panic", routing::get(panicking)));

        // Act
        let response = router
            .oneshot(axum::http::Request::get("/panic").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"ok":false,"error":"Server error"}"#);
    }
}
