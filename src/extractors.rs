use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::domain::Viewer;
use crate::error::AppError;
use crate::state::AppState;
use crate::views::Theme;

pub const THEME_COOKIE: &str = "neighborly_theme";

/// Every request is served as the configured neighbor; there is no sign-in.
impl FromRequestParts<AppState> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(state.config.viewer())
    }
}

/// Theme chosen through the theme cookie, falling back to the configured default.
impl FromRequestParts<AppState> for Theme {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let chosen = extract_cookie(parts, THEME_COOKIE).and_then(Theme::parse);
        Ok(chosen.unwrap_or(state.config.ui.theme))
    }
}

fn extract_cookie<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .map(|s| s.trim())
        .find_map(|cookie| {
            let mut split = cookie.splitn(2, '=');
            let key = split.next()?.trim();
            let val = split.next()?.trim();
            if key == name {
                Some(val)
            } else {
                None
            }
        })
}
