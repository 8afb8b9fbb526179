// Pure collection transitions. Each takes the owning collection and returns the
// replacement; an unknown id returns an unchanged copy.
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::domain::models::{
    Comment, Event, GeoLocation, HelpCategory, HelpRequest, HelpStatus, Post, PostCategory,
    Record,
};
use crate::domain::time::parse_form_datetime;
use crate::domain::viewer::Viewer;

pub const MAX_POST_LEN: usize = 2000;
pub const MAX_COMMENT_LEN: usize = 500;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Events created without a usable end time last this long.
const DEFAULT_EVENT_HOURS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be {max} characters or less")]
    TooLong { field: &'static str, max: usize },

    #[error("{0} is not a valid date and time")]
    InvalidDateTime(&'static str),

    #[error("Capacity must be a whole number of at least 1")]
    InvalidCapacity,
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}

fn present<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    match value.trim() {
        "" => Err(ValidationError::Required(field)),
        value => Ok(value),
    }
}

fn update_where<T, F>(items: &[T], id: &str, mut apply: F) -> Vec<T>
where
    T: Record + Clone,
    F: FnMut(&mut T),
{
    items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.id() == id {
                apply(&mut item);
            }
            item
        })
        .collect()
}

/// New records go to the front of their collection.
pub fn prepend<T: Clone>(items: &[T], record: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(record);
    next.extend_from_slice(items);
    next
}

// --- Events ---

pub fn rsvp(events: &[Event], id: &str, viewer: &Viewer, attending: bool) -> Vec<Event> {
    update_where(events, id, |event| {
        if attending {
            if !viewer.is_attending(event) {
                event.attendees.push(viewer.id().clone());
            }
        } else {
            event.attendees.retain(|attendee| attendee != viewer.id());
        }
    })
}

// --- Help exchange ---

/// Does not look at the current status: a completed request is reopened as in-progress.
pub fn volunteer(requests: &[HelpRequest], id: &str, viewer: &Viewer) -> Vec<HelpRequest> {
    update_where(requests, id, |request| {
        request.status = HelpStatus::InProgress;
        if !viewer.is_volunteer(request) {
            request.volunteers.push(viewer.id().clone());
        }
    })
}

pub fn mark_completed(requests: &[HelpRequest], id: &str) -> Vec<HelpRequest> {
    update_where(requests, id, |request| {
        request.status = HelpStatus::Completed;
    })
}

// --- Feed ---

pub fn toggle_like(posts: &[Post], id: &str, viewer: &Viewer) -> Vec<Post> {
    update_where(posts, id, |post| {
        if viewer.has_liked(post) {
            post.liked_by.retain(|user| user != viewer.id());
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.liked_by.push(viewer.id().clone());
            post.likes += 1;
        }
    })
}

pub fn add_comment(posts: &[Post], id: &str, comment: Comment) -> Vec<Post> {
    let mut comment = Some(comment);
    update_where(posts, id, |post| {
        if let Some(comment) = comment.take() {
            post.comments.push(comment);
        }
    })
}

// --- Constructors ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    pub content: String,
    #[serde(default)]
    pub category: PostCategory,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentDraft {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelpRequestDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: HelpCategory,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub capacity: String,
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::now_v7())
}

pub fn new_post(
    draft: &PostDraft,
    viewer: &Viewer,
    location: GeoLocation,
    now: DateTime<Utc>,
) -> Result<Post, ValidationError> {
    let content = required("Post content", &draft.content, MAX_POST_LEN)?;

    Ok(Post {
        id: new_id("post"),
        author_id: viewer.id().clone(),
        author_name: viewer.name().to_string(),
        author_avatar: Some(viewer.user.avatar.clone()),
        content,
        created_at: now,
        likes: 0,
        liked_by: Vec::new(),
        comments: Vec::new(),
        category: draft.category,
        location,
    })
}

pub fn new_comment(
    draft: &CommentDraft,
    viewer: &Viewer,
    now: DateTime<Utc>,
) -> Result<Comment, ValidationError> {
    let content = required("Comment", &draft.content, MAX_COMMENT_LEN)?;

    Ok(Comment {
        id: new_id("comment"),
        author_id: viewer.id().clone(),
        author_name: viewer.name().to_string(),
        author_avatar: Some(viewer.user.avatar.clone()),
        content,
        created_at: now,
        likes: 0,
    })
}

pub fn new_help_request(
    draft: &HelpRequestDraft,
    viewer: &Viewer,
    location: GeoLocation,
    now: DateTime<Utc>,
) -> Result<HelpRequest, ValidationError> {
    let title = required("Title", &draft.title, MAX_TITLE_LEN)?;
    let description = required("Description", &draft.description, MAX_DESCRIPTION_LEN)?;

    Ok(HelpRequest {
        id: new_id("help"),
        author_id: viewer.id().clone(),
        author_name: viewer.name().to_string(),
        author_avatar: Some(viewer.user.avatar.clone()),
        title,
        description,
        category: draft.category,
        created_at: now,
        status: HelpStatus::Open,
        volunteers: Vec::new(),
        location,
    })
}

fn parse_capacity(raw: &str) -> Result<Option<u32>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(capacity) if capacity >= 1 => Ok(Some(capacity)),
        _ => Err(ValidationError::InvalidCapacity),
    }
}

pub fn new_event(
    draft: &EventDraft,
    viewer: &Viewer,
    location: GeoLocation,
) -> Result<Event, ValidationError> {
    let title = required("Event title", &draft.title, MAX_TITLE_LEN)?;
    let description = required("Description", &draft.description, MAX_DESCRIPTION_LEN)?;
    let address = required("Location", &draft.address, MAX_TITLE_LEN)?;
    let start_day = present("Start date", &draft.start_date)?;
    let start_clock = present("Start time", &draft.start_time)?;

    let start_date = parse_form_datetime(start_day, start_clock)
        .ok_or(ValidationError::InvalidDateTime("Start"))?;

    // Missing end parts fall back to the matching start part.
    let end_day = match draft.end_date.trim() {
        "" => start_day,
        day => day,
    };
    let end_clock = match draft.end_time.trim() {
        "" => start_clock,
        clock => clock,
    };
    let mut end_date =
        parse_form_datetime(end_day, end_clock).ok_or(ValidationError::InvalidDateTime("End"))?;
    if end_date < start_date {
        end_date = start_date + Duration::hours(DEFAULT_EVENT_HOURS);
    }

    let capacity = parse_capacity(&draft.capacity)?;

    Ok(Event {
        id: new_id("event"),
        host_id: viewer.id().clone(),
        host_name: viewer.name().to_string(),
        host_avatar: Some(viewer.user.avatar.clone()),
        title,
        description,
        start_date,
        end_date,
        location,
        address,
        attendees: vec![viewer.id().clone()],
        capacity,
        image: None,
    })
}
