use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::domain::transitions::{self, CommentDraft, PostDraft};
use crate::domain::{PostCategory, Viewer};
use crate::error::{AppError, AppResult};
use crate::routes::{back_to, Html};
use crate::state::AppState;
use crate::views::{category_choices, CategoryChoice, Chrome, PostCard, Theme};

#[derive(Template)]
#[template(path = "pages/feed.html")]
struct FeedTemplate {
    chrome: Chrome,
    posts: Vec<PostCard>,
    choices: Vec<CategoryChoice>,
}

#[derive(Template)]
#[template(path = "pages/create_post.html")]
struct CreatePostTemplate {
    chrome: Chrome,
    choices: Vec<CategoryChoice>,
}

#[derive(Deserialize)]
struct PostForm {
    #[serde(default)]
    content: String,
    #[serde(default)]
    category: PostCategory,
    next: Option<String>,
}

#[derive(Deserialize)]
struct CommentForm {
    #[serde(default)]
    content: String,
    next: Option<String>,
}

#[derive(Deserialize)]
struct NextForm {
    next: Option<String>,
}

/// Community feed: every post, newest first, with the composer on top.
async fn feed(
    State(state): State<AppState>,
    viewer: Viewer,
    theme: Theme,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let posts = state
        .neighborhood
        .posts
        .lock()
        .await
        .iter()
        .map(|post| PostCard::new(post, &viewer, theme, now))
        .collect();

    Ok(Html(FeedTemplate {
        chrome: Chrome::new(&state.config.ui.site_name, "Community Feed", "/", "/", theme, &viewer),
        posts,
        choices: category_choices(theme),
    }))
}

async fn create_post_page(
    State(state): State<AppState>,
    viewer: Viewer,
    theme: Theme,
) -> AppResult<impl IntoResponse> {
    Ok(Html(CreatePostTemplate {
        chrome: Chrome::new(
            &state.config.ui.site_name,
            "Create Post",
            "/create-post",
            "/create-post",
            theme,
            &viewer,
        ),
        choices: category_choices(theme),
    }))
}

async fn create_post(
    State(state): State<AppState>,
    viewer: Viewer,
    form: Result<Form<PostForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let draft = PostDraft {
        content: form.content,
        category: form.category,
    };
    let post = transitions::new_post(&draft, &viewer, state.config.location(), Utc::now())?;

    let mut posts = state.neighborhood.posts.lock().await;
    tracing::info!("Post {} created by {}", post.id, viewer.id());
    *posts = transitions::prepend(posts.as_slice(), post);

    Ok(back_to(form.next.as_deref(), "/"))
}

async fn toggle_like(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(id): Path<String>,
    form: Result<Form<NextForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let mut posts = state.neighborhood.posts.lock().await;
    if !posts.iter().any(|p| p.id == id) {
        return Err(AppError::NotFound);
    }

    *posts = transitions::toggle_like(&posts, &id, &viewer);
    tracing::info!("Like toggled on post {} by {}", id, viewer.id());

    Ok(back_to(form.next.as_deref(), "/"))
}

async fn add_comment(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(id): Path<String>,
    form: Result<Form<CommentForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let Form(form) = form?;
    let draft = CommentDraft {
        content: form.content,
    };

    let mut posts = state.neighborhood.posts.lock().await;
    if !posts.iter().any(|p| p.id == id) {
        return Err(AppError::NotFound);
    }

    let comment = transitions::new_comment(&draft, &viewer, Utc::now())?;
    tracing::info!("Comment {} added to post {}", comment.id, id);
    *posts = transitions::add_comment(&posts, &id, comment);

    Ok(back_to(form.next.as_deref(), "/"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feed))
        .route("/create-post", get(create_post_page))
        .route("/posts", post(create_post))
        .route("/posts/{id}/like", post(toggle_like))
        .route("/posts/{id}/comments", post(add_comment))
}
