use askama::Template;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::domain::filters::{filter_events, EventTab};
use crate::domain::transitions::{self, EventDraft};
use crate::domain::Viewer;
use crate::error::{AppError, AppResult};
use crate::routes::{back_to, Html};
use crate::state::AppState;
use crate::views::{Chrome, EventCard, TabLink, Theme};

#[derive(Template)]
#[template(path = "pages/events.html")]
struct EventsTemplate {
    chrome: Chrome,
    tabs: Vec<TabLink>,
    cards: Vec<EventCard>,
}

#[derive(Template)]
#[template(path = "pages/event_detail.html")]
struct EventDetailTemplate {
    chrome: Chrome,
    card: EventCard,
}

#[derive(Deserialize)]
struct TabQuery {
    #[serde(default)]
    tab: EventTab,
}

#[derive(Deserialize)]
struct EventForm {
    #[serde(flatten)]
    draft: EventDraft,
    next: Option<String>,
}

#[derive(Deserialize)]
struct RsvpForm {
    attending: bool,
    next: Option<String>,
}

fn tab_links(active: EventTab, theme: Theme) -> Vec<TabLink> {
    EventTab::ALL
        .into_iter()
        .map(|tab| TabLink {
            href: format!("/events?tab={}", tab.as_str()),
            label: tab.label(),
            class: theme.tab(tab == active),
        })
        .collect()
}

/// Events calendar, filtered by the `tab` query parameter.
async fn events(
    State(state): State<AppState>,
    viewer: Viewer,
    theme: Theme,
    query: Result<Query<TabQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let now = Utc::now();

    let events = state.neighborhood.events.lock().await;
    let cards = filter_events(&events, query.tab, &viewer, now)
        .into_iter()
        .map(|event| EventCard::new(event, &viewer, now))
        .collect();

    let path = format!("/events?tab={}", query.tab.as_str());
    Ok(Html(EventsTemplate {
        chrome: Chrome::new(&state.config.ui.site_name, "Events", "/events", path, theme, &viewer),
        tabs: tab_links(query.tab, theme),
        cards,
    }))
}

async fn event_detail(
    State(state): State<AppState>,
    viewer: Viewer,
    theme: Theme,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let events = state.neighborhood.events.lock().await;
    let event = events
        .iter()
        .find(|e| e.id == id)
        .ok_or(AppError::NotFound)?;
    let card = EventCard::new(event, &viewer, Utc::now());

    Ok(Html(EventDetailTemplate {
        chrome: Chrome::new(
            &state.config.ui.site_name,
            &card.title,
            "/events",
            format!("/events/{}", id),
            theme,
            &viewer,
        ),
        card,
    }))
}

async fn create_event(
    State(state): State<AppState>,
    viewer: Viewer,
    form: Result<Form<EventForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let event = transitions::new_event(&form.draft, &viewer, state.config.location())?;

    let mut events = state.neighborhood.events.lock().await;
    tracing::info!(
        "Event {} created by {} starting {}",
        event.id,
        viewer.id(),
        event.start_date
    );
    *events = transitions::prepend(events.as_slice(), event);

    Ok(back_to(form.next.as_deref(), "/events"))
}

async fn rsvp(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(id): Path<String>,
    form: Result<Form<RsvpForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let mut events = state.neighborhood.events.lock().await;
    if !events.iter().any(|e| e.id == id) {
        return Err(AppError::NotFound);
    }

    *events = transitions::rsvp(&events, &id, &viewer, form.attending);
    tracing::info!(
        "{} set attendance for event {} to {}",
        viewer.id(),
        id,
        form.attending
    );

    Ok(back_to(form.next.as_deref(), "/events"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(events).post(create_event))
        .route("/events/{id}", get(event_detail))
        .route("/events/{id}/rsvp", post(rsvp))
}
