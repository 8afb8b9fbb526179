pub mod assets;
pub mod events;
pub mod feed;
pub mod help;
pub mod theme;

use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => AppError::Internal(format!("Template render error: {}", e)).into_response(),
        }
    }
}

/// A path on this site that fits in a `Location` header. Browsers read `/\` like `//`.
fn is_site_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.first() == Some(&b'/')
        && !matches!(bytes.get(1), Some(b'/') | Some(b'\\'))
        && bytes.iter().all(u8::is_ascii_graphic)
}

/// Redirect after a form post. Only site-relative targets are honoured.
pub fn back_to(next: Option<&str>, fallback: &str) -> Redirect {
    match next {
        Some(path) if is_site_path(path) => Redirect::to(path),
        _ => Redirect::to(fallback),
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/assets/{*path}", get(assets::serve))
        .merge(feed::router())
        .merge(help::router())
        .merge(events::router())
        .merge(theme::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(redirect: Redirect) -> String {
        let response = redirect.into_response();
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    struct Unprintable;

    impl std::fmt::Display for Unprintable {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[derive(Template)]
    #[template(source = "{{ value }}", ext = "txt")]
    struct BrokenTemplate {
        value: Unprintable,
    }

    #[test]
    fn render_failure_is_internal_error() {
        let response = Html(BrokenTemplate { value: Unprintable }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn back_to_accepts_site_paths() {
        assert_eq!(location(back_to(Some("/events/1"), "/events")), "/events/1");
    }

    #[test]
    fn back_to_rejects_foreign_targets() {
        assert_eq!(location(back_to(Some("https://evil.test"), "/")), "/");
        assert_eq!(location(back_to(Some("//evil.test"), "/")), "/");
        assert_eq!(location(back_to(Some("/\\evil.test"), "/")), "/");
        assert_eq!(location(back_to(Some("/\tevil.test"), "/")), "/");
        assert_eq!(location(back_to(Some("/caf\u{e9}\nX: y"), "/")), "/");
        assert_eq!(location(back_to(None, "/help-exchange")), "/help-exchange");
    }
}
