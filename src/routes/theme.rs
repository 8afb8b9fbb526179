use axum::extract::rejection::FormRejection;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extractors::THEME_COOKIE;
use crate::routes::back_to;
use crate::state::AppState;
use crate::views::Theme;

const ONE_YEAR_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Deserialize)]
struct ThemeForm {
    theme: String,
    next: Option<String>,
}

fn theme_cookie(theme: Theme) -> String {
    format!(
        "{}={}; Path=/; SameSite=Strict; Max-Age={}",
        THEME_COOKIE,
        theme.as_str(),
        ONE_YEAR_SECS
    )
}

/// Stores the chosen rendering in a cookie and returns to the page it came from.
async fn choose_theme(
    form: Result<Form<ThemeForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let theme = Theme::parse(&form.theme)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown theme: {}", form.theme)))?;

    tracing::debug!("Theme switched to {}", theme.as_str());

    Ok((
        [(header::SET_COOKIE, theme_cookie(theme))],
        back_to(form.next.as_deref(), "/"),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/theme", post(choose_theme))
}
