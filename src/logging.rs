//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::Response,
};

/// The number of characters of a body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = read_body(body).await;
    log_body("Received request", &request_summary(&parts), &body);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let body = read_body(body).await;
    log_body("Sending response", &response_summary(&parts), &body);

    Response::from_parts(parts, Body::from(body))
}

fn request_summary(parts: &request::Parts) -> String {
    format!("{} {}\nheaders: {:#?}", parts.method, parts.uri, parts.headers)
}

fn response_summary(parts: &response::Parts) -> String {
    format!("{}\nheaders: {:#?}", parts.status, parts.headers)
}

async fn read_body(body: Body) -> Bytes {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body for logging: {error}"))
        .unwrap_or_default()
}

fn log_body(event: &str, summary: &str, body: &[u8]) {
    let body = String::from_utf8_lossy(body);

    match truncate(&body, LOG_BODY_LENGTH_LIMIT) {
        Some(prefix) => {
            tracing::info!("{event}: {summary}\nbody: {prefix}...");
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{event}: {summary}\nbody: {body:?}"),
    }
}

/// The first `limit` characters of `text`, or `None` if it is not longer than that.
fn truncate(text: &str, limit: usize) -> Option<&str> {
    text.char_indices()
        .nth(limit)
        .map(|(byte_index, _)| &text[..byte_index])
}

#[cfg(test)]
mod logging_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, Response, StatusCode, header::CONTENT_TYPE},
        middleware,
        routing::post,
    };
    use axum_test::TestServer;

    use super::{logging_middleware, request_summary, response_summary, truncate};

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate("Cakes", 64), None);
        assert_eq!(truncate("Cakes", 5), None);
    }

    #[test]
    fn truncates_on_character_boundary() {
        assert_eq!(truncate("Crème brûlée", 4), Some("Crèm"));
    }

    #[test]
    fn request_summary_includes_headers() {
        let request = Request::post("/category")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        let (parts, _) = request.into_parts();

        let summary = request_summary(&parts);

        assert!(summary.starts_with("POST /category"), "got {summary}");
        assert!(summary.contains("content-type"), "got {summary}");
        assert!(summary.contains("application/json"), "got {summary}");
    }

    #[test]
    fn response_summary_includes_status_and_headers() {
        let response = Response::builder()
            .status(StatusCode::CREATED)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        let (parts, _) = response.into_parts();

        let summary = response_summary(&parts);

        assert!(summary.starts_with("201 Created"), "got {summary}");
        assert!(summary.contains("application/json"), "got {summary}");
    }

    #[tokio::test]
    async fn passes_bodies_through_unchanged() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");
        let body = "x".repeat(200);

        let response = server.post("/echo").text(body.clone()).await;

        response.assert_status_ok();
        response.assert_text(body);
    }
}
