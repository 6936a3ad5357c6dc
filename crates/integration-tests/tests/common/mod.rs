//! Shared helpers: a fixture-backed application and a cookie-keeping
//! in-process client.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use tower::ServiceExt;

use ilara_storefront::{app, config::StorefrontConfig, state::AppState};

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Build the full application against a fixture catalog.
pub fn app_with_catalog(fixture: &str) -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        base_url: "http://localhost".to_string(),
        catalog_path: fixture_path(fixture),
    };
    app(AppState::new(config))
}

/// A captured response: status, headers, body text.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// A response header as a string, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// In-process client that keeps the session cookie between requests,
/// standing in for one shopper's browser session.
pub struct Client {
    router: Router,
    cookie: Option<String>,
}

impl Client {
    /// A client against the standard fixture catalog.
    pub fn new() -> Self {
        Self::with_catalog("products.json")
    }

    /// A client against a specific fixture catalog.
    pub fn with_catalog(fixture: &str) -> Self {
        Self {
            router: app_with_catalog(fixture),
            cookie: None,
        }
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self
            .request_builder(Request::get(path))
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn post_form(&mut self, path: &str, form_body: &str) -> TestResponse {
        let request = self
            .request_builder(Request::post(path))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form_body.to_owned()))
            .expect("request");
        self.send(request).await
    }

    fn request_builder(&self, mut builder: axum::http::request::Builder) -> axum::http::request::Builder {
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE)
            && let Ok(value) = set_cookie.to_str()
            && let Some(pair) = value.split(';').next()
        {
            self.cookie = Some(pair.to_owned());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
