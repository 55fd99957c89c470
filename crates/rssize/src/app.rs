use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        adventar::calendar_feed,
        health::{hello, livez, root},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// There is no request-level timeout; the upstream client's own timeout
/// bounds a request and surfaces as a fetch failure.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/hello", get(hello))
        .route("/livez", get(livez))
        .route("/api/adventar/{calid}", get(calendar_feed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::fetch::{HttpPageFetcher, DEFAULT_FETCH_TIMEOUT};
    use crate::pipeline::testing::{
        calendar_page, MockCache, MockFetcher, MockRepository, ONE_ENTRY_PROPS,
    };
    use crate::pipeline::{Pipeline, PipelineOptions};

    fn options() -> PipelineOptions {
        PipelineOptions::new(Url::parse("https://adventar.org").unwrap())
    }

    fn app_with(fetcher: Arc<MockFetcher>, require_numeric: bool) -> Router {
        let pipeline = Pipeline::new(fetcher, options())
            .with_cache(Arc::new(MockCache::new()))
            .with_repository(Arc::new(MockRepository::new()));
        create_app(AppState::from_pipeline(pipeline, require_numeric))
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_returns_ok() {
        let app = app_with(Arc::new(MockFetcher::new("")), true);

        let (status, _, body) = get_path(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_hello_returns_greeting() {
        let app = app_with(Arc::new(MockFetcher::new("")), true);

        let (status, _, body) = get_path(app, "/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello World");
    }

    #[tokio::test]
    async fn test_livez() {
        let app = app_with(Arc::new(MockFetcher::new("")), true);

        let (status, _, _) = get_path(app, "/livez").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_feed_route_serves_rss() {
        let fetcher = Arc::new(MockFetcher::new(calendar_page(ONE_ENTRY_PROPS)));
        let app = app_with(fetcher.clone(), true);

        let (status, content_type, body) = get_path(app, "/api/adventar/42").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/xml"));
        assert!(body.contains("<rss"));
        assert!(body.contains("<title>Day 1</title>"));
        assert!(body.contains("<link>https://example.com/1</link>"));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let fetcher = Arc::new(MockFetcher::new(calendar_page(ONE_ENTRY_PROPS)));
        let app = app_with(fetcher.clone(), true);

        let (status, _, body) = get_path(app, "/api/adventar/abc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_signed_id_is_not_found() {
        let fetcher = Arc::new(MockFetcher::new(calendar_page(ONE_ENTRY_PROPS)));
        let app = app_with(fetcher.clone(), true);

        let (status, _, _) = get_path(app, "/api/adventar/-42").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_slug_id_accepted_when_numeric_not_required() {
        let fetcher = Arc::new(MockFetcher::new(calendar_page(ONE_ENTRY_PROPS)));
        let app = app_with(fetcher.clone(), false);

        let (status, _, _) = get_path(app, "/api/adventar/rust-2023").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            fetcher.urls().await,
            vec!["https://adventar.org/calendars/rust-2023".to_string()]
        );
    }

    #[tokio::test]
    async fn test_page_without_container_is_error() {
        let fetcher = Arc::new(MockFetcher::new(
            "<html><head><title>Maintenance</title></head></html>",
        ));
        let app = app_with(fetcher, true);

        let (status, _, body) = get_path(app, "/api/adventar/42").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = app_with(Arc::new(MockFetcher::new("")), true);

        let (status, _, _) = get_path(app, "/api/other/42").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upstream_is_called_once_within_ttl() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/42"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_string(calendar_page(ONE_ENTRY_PROPS)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let options = PipelineOptions::new(Url::parse(&server.uri()).unwrap());
        let pipeline = Pipeline::new(Arc::new(HttpPageFetcher::new(DEFAULT_FETCH_TIMEOUT).unwrap()), options)
            .with_cache(Arc::new(MockCache::new()))
            .with_repository(Arc::new(MockRepository::new()));
        let app = create_app(AppState::from_pipeline(pipeline, true));

        let (first_status, _, first) = get_path(app.clone(), "/api/adventar/42").await;
        let (second_status, _, second) = get_path(app, "/api/adventar/42").await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert!(first.contains("<title>Day 1</title>"));
        assert!(second.contains("<title>Day 1</title>"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let options = PipelineOptions::new(Url::parse(&server.uri()).unwrap());
        let pipeline = Pipeline::new(Arc::new(HttpPageFetcher::new(DEFAULT_FETCH_TIMEOUT).unwrap()), options);
        let app = create_app(AppState::from_pipeline(pipeline, true));

        let (status, _, body) = get_path(app, "/api/adventar/42").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error");
    }

    #[tokio::test]
    async fn test_slow_upstream_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(calendar_page(ONE_ENTRY_PROPS))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let options = PipelineOptions::new(Url::parse(&server.uri()).unwrap());
        let fetcher = HttpPageFetcher::new(Duration::from_millis(200)).unwrap();
        let pipeline = Pipeline::new(Arc::new(fetcher), options);
        let app = create_app(AppState::from_pipeline(pipeline, true));

        let (status, _, body) = get_path(app, "/api/adventar/42").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error");
    }
}
