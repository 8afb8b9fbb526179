use askama::Template;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::domain::filters::{filter_help_requests, HelpTab};
use crate::domain::transitions::{self, HelpRequestDraft};
use crate::domain::{HelpCategory, HelpStatus, Viewer};
use crate::error::{AppError, AppResult};
use crate::routes::{back_to, Html};
use crate::state::AppState;
use crate::views::{Chrome, HelpCard, TabLink, Theme};

#[derive(Template)]
#[template(path = "pages/help_exchange.html")]
struct HelpExchangeTemplate {
    chrome: Chrome,
    tabs: Vec<TabLink>,
    cards: Vec<HelpCard>,
}

#[derive(Template)]
#[template(path = "pages/help_detail.html")]
struct HelpDetailTemplate {
    chrome: Chrome,
    card: HelpCard,
}

#[derive(Deserialize)]
struct TabQuery {
    #[serde(default)]
    tab: HelpTab,
}

#[derive(Deserialize)]
struct HelpForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: HelpCategory,
    next: Option<String>,
}

#[derive(Deserialize)]
struct NextForm {
    next: Option<String>,
}

fn tab_links(active: HelpTab, theme: Theme) -> Vec<TabLink> {
    HelpTab::ALL
        .into_iter()
        .map(|tab| TabLink {
            href: format!("/help-exchange?tab={}", tab.as_str()),
            label: tab.label(),
            class: theme.tab(tab == active),
        })
        .collect()
}

/// Help board, filtered by the `tab` query parameter.
async fn help_exchange(
    State(state): State<AppState>,
    viewer: Viewer,
    theme: Theme,
    query: Result<Query<TabQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let now = Utc::now();

    let requests = state.neighborhood.help_requests.lock().await;
    let cards = filter_help_requests(&requests, query.tab, &viewer)
        .into_iter()
        .map(|request| HelpCard::new(request, &viewer, theme, now))
        .collect();

    let path = format!("/help-exchange?tab={}", query.tab.as_str());
    Ok(Html(HelpExchangeTemplate {
        chrome: Chrome::new(
            &state.config.ui.site_name,
            "Help Exchange",
            "/help-exchange",
            path,
            theme,
            &viewer,
        ),
        tabs: tab_links(query.tab, theme),
        cards,
    }))
}

async fn help_detail(
    State(state): State<AppState>,
    viewer: Viewer,
    theme: Theme,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let requests = state.neighborhood.help_requests.lock().await;
    let request = requests
        .iter()
        .find(|r| r.id == id)
        .ok_or(AppError::NotFound)?;
    let card = HelpCard::new(request, &viewer, theme, Utc::now());

    Ok(Html(HelpDetailTemplate {
        chrome: Chrome::new(
            &state.config.ui.site_name,
            &card.title,
            "/help-exchange",
            format!("/help-exchange/{}", id),
            theme,
            &viewer,
        ),
        card,
    }))
}

async fn create_help_request(
    State(state): State<AppState>,
    viewer: Viewer,
    form: Result<Form<HelpForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let draft = HelpRequestDraft {
        title: form.title,
        description: form.description,
        category: form.category,
    };
    let request =
        transitions::new_help_request(&draft, &viewer, state.config.location(), Utc::now())?;

    let mut requests = state.neighborhood.help_requests.lock().await;
    tracing::info!("Help request {} created by {}", request.id, viewer.id());
    *requests = transitions::prepend(requests.as_slice(), request);

    Ok(back_to(form.next.as_deref(), "/help-exchange"))
}

async fn volunteer(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(id): Path<String>,
    form: Result<Form<NextForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let mut requests = state.neighborhood.help_requests.lock().await;
    let status = requests
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.status)
        .ok_or(AppError::NotFound)?;

    if status != HelpStatus::Open {
        tracing::warn!(
            "Volunteering on help request {} which is {}",
            id,
            status.label()
        );
    }

    *requests = transitions::volunteer(&requests, &id, &viewer);
    tracing::info!("{} volunteered for help request {}", viewer.id(), id);

    Ok(back_to(form.next.as_deref(), "/help-exchange"))
}

async fn complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<NextForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let mut requests = state.neighborhood.help_requests.lock().await;
    if !requests.iter().any(|r| r.id == id) {
        return Err(AppError::NotFound);
    }

    *requests = transitions::mark_completed(&requests, &id);
    tracing::info!("Help request {} marked completed", id);

    Ok(back_to(form.next.as_deref(), "/help-exchange"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/help-exchange", get(help_exchange).post(create_help_request))
        .route("/help-exchange/{id}", get(help_detail))
        .route("/help-exchange/{id}/volunteer", post(volunteer))
        .route("/help-exchange/{id}/complete", post(complete))
}
