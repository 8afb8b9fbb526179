// Read-only view models. Every card is derived from a record, the viewer and the
// render time; the theme only decides class names.
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::time::{
    format_card_date, format_clock, format_long_date, format_month_year, format_relative_time,
    format_short_date, format_stamp, format_time_range, is_past,
};
use crate::domain::{
    Comment, Event, HelpCategory, HelpRequest, HelpStatus, Post, PostCategory, Viewer,
};

const AVATAR_PLACEHOLDER: &str = "/assets/img/avatar-placeholder.svg";
const MAX_AVATAR_SLOTS: usize = 3;

/// Two renderings of the same pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Refined,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Classic, Theme::Refined];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Refined => "refined",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Refined => "Refined",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Theme::Classic => "theme-classic",
            Theme::Refined => "theme-refined",
        }
    }

    pub fn card(&self) -> &'static str {
        match self {
            Theme::Classic => "card",
            Theme::Refined => "card card-raised",
        }
    }

    pub fn primary(&self) -> &'static str {
        match self {
            Theme::Classic => "btn btn-primary",
            Theme::Refined => "btn btn-primary btn-pill",
        }
    }

    pub fn secondary(&self) -> &'static str {
        match self {
            Theme::Classic => "btn btn-secondary",
            Theme::Refined => "btn btn-secondary btn-pill",
        }
    }

    pub fn tab(&self, active: bool) -> &'static str {
        match (self, active) {
            (Theme::Classic, true) => "tab tab-active",
            (Theme::Classic, false) => "tab",
            (Theme::Refined, true) => "tab tab-pill tab-active",
            (Theme::Refined, false) => "tab tab-pill",
        }
    }

    fn badge(&self, tone: &str) -> String {
        match self {
            Theme::Classic => format!("badge badge-solid tone-{}", tone),
            Theme::Refined => format!("badge badge-soft tone-{}", tone),
        }
    }

    pub fn post_badge(&self, category: PostCategory) -> String {
        let tone = match category {
            PostCategory::General => "green",
            PostCategory::Question => "purple",
            PostCategory::Alert => "red",
            PostCategory::News => "blue",
        };
        self.badge(tone)
    }

    pub fn help_badge(&self, category: HelpCategory) -> String {
        match category {
            HelpCategory::Request => self.badge("purple"),
            HelpCategory::Offer => self.badge("orange"),
        }
    }

    pub fn status_badge(&self, status: HelpStatus) -> String {
        match status {
            HelpStatus::Open => self.badge("green"),
            HelpStatus::InProgress => self.badge("blue"),
            HelpStatus::Completed => self.badge("gray"),
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

fn avatar_or_placeholder(avatar: &Option<String>) -> String {
    avatar
        .clone()
        .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string())
}

// --- Layout ---

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the shared layout needs: title, navigation, viewer panel, theme.
pub struct Chrome {
    pub site_name: String,
    pub title: String,
    pub theme: Theme,
    pub nav: Vec<NavLink>,
    pub viewer_name: String,
    pub viewer_avatar: String,
    pub viewer_address: String,
    pub viewer_bio: Option<String>,
    pub viewer_since: String,
    pub path: String,
}

impl Chrome {
    pub fn new(
        site_name: &str,
        page: &str,
        active: &str,
        path: impl Into<String>,
        theme: Theme,
        viewer: &Viewer,
    ) -> Self {
        let links = [
            ("/", "Community Feed"),
            ("/help-exchange", "Help Exchange"),
            ("/events", "Events"),
            ("/create-post", "Create Post"),
        ];
        let nav = links
            .into_iter()
            .map(|(href, label)| NavLink {
                href,
                label,
                active: href == active,
            })
            .collect();

        Self {
            site_name: site_name.to_string(),
            title: format!("{} - {}", page, site_name),
            theme,
            nav,
            viewer_name: viewer.user.name.clone(),
            viewer_avatar: viewer.user.avatar.clone(),
            viewer_address: viewer.user.address.clone(),
            viewer_bio: viewer.user.bio.clone(),
            viewer_since: format_month_year(viewer.user.joined_date),
            path: path.into(),
        }
    }
}

pub struct TabLink {
    pub href: String,
    pub label: &'static str,
    pub class: &'static str,
}

// --- Feed ---

pub struct CommentView {
    pub author_name: String,
    pub author_avatar: String,
    pub content: String,
    pub posted_ago: String,
}

impl CommentView {
    pub fn new(comment: &Comment, now: DateTime<Utc>) -> Self {
        Self {
            author_name: comment.author_name.clone(),
            author_avatar: avatar_or_placeholder(&comment.author_avatar),
            content: comment.content.clone(),
            posted_ago: format_relative_time(comment.created_at, now),
        }
    }
}

pub struct PostCard {
    pub id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub content: String,
    pub category: &'static str,
    pub badge_class: String,
    pub posted_ago: String,
    pub posted_at: String,
    pub likes: u32,
    pub likes_label: &'static str,
    pub liked: bool,
    pub comment_count: usize,
    pub comments_label: &'static str,
    pub comments: Vec<CommentView>,
}

impl PostCard {
    pub fn new(post: &Post, viewer: &Viewer, theme: Theme, now: DateTime<Utc>) -> Self {
        let comment_count = post.comments.len();
        Self {
            id: post.id.clone(),
            author_name: post.author_name.clone(),
            author_avatar: avatar_or_placeholder(&post.author_avatar),
            content: post.content.clone(),
            category: post.category.as_str(),
            badge_class: theme.post_badge(post.category),
            posted_ago: format_relative_time(post.created_at, now),
            posted_at: format_stamp(post.created_at),
            likes: post.likes,
            likes_label: plural(post.likes as usize, "Like", "Likes"),
            liked: viewer.has_liked(post),
            comment_count,
            comments_label: plural(comment_count, "Comment", "Comments"),
            comments: post
                .comments
                .iter()
                .map(|c| CommentView::new(c, now))
                .collect(),
        }
    }
}

/// Category picker entry in the post composer.
pub struct CategoryChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub class: String,
    pub checked: bool,
}

pub fn category_choices(theme: Theme) -> Vec<CategoryChoice> {
    PostCategory::ALL
        .into_iter()
        .map(|category| CategoryChoice {
            value: category.as_str(),
            label: category.label(),
            class: theme.post_badge(category),
            checked: category == PostCategory::default(),
        })
        .collect()
}

// --- Help exchange ---

pub struct HelpCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author_name: String,
    pub author_avatar: String,
    pub category_label: &'static str,
    pub category_class: String,
    pub status_label: &'static str,
    pub status_class: String,
    pub posted_on: String,
    pub posted_long: String,
    pub posted_ago: String,
    pub distance: String,
    pub volunteer_summary: Option<String>,
    pub volunteer_slots: Vec<usize>,
    pub can_volunteer: bool,
    pub can_complete: bool,
    pub can_contact: bool,
    pub is_completed: bool,
    pub latitude: String,
    pub longitude: String,
}

impl HelpCard {
    pub fn new(request: &HelpRequest, viewer: &Viewer, theme: Theme, now: DateTime<Utc>) -> Self {
        let volunteers = request.volunteers.len();
        let volunteer_summary = (volunteers > 0).then(|| {
            format!(
                "{} {} volunteered to help",
                volunteers,
                plural(volunteers, "neighbor has", "neighbors have")
            )
        });
        let in_progress = request.status == HelpStatus::InProgress;

        Self {
            id: request.id.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            author_name: request.author_name.clone(),
            author_avatar: avatar_or_placeholder(&request.author_avatar),
            category_label: request.category.label(),
            category_class: theme.help_badge(request.category),
            status_label: request.status.label(),
            status_class: theme.status_badge(request.status),
            posted_on: format_short_date(request.created_at),
            posted_long: format_long_date(request.created_at),
            posted_ago: format_relative_time(request.created_at, now),
            distance: format!(
                "{:.1} miles away",
                viewer.home.distance_miles(&request.location)
            ),
            volunteer_summary,
            volunteer_slots: (0..volunteers.min(MAX_AVATAR_SLOTS)).collect(),
            can_volunteer: request.status == HelpStatus::Open && !viewer.is_author(request),
            can_complete: in_progress && viewer.is_author(request),
            can_contact: in_progress && viewer.is_volunteer(request),
            is_completed: request.status == HelpStatus::Completed,
            latitude: format!("{:.6}", request.location.latitude),
            longitude: format!("{:.6}", request.location.longitude),
        }
    }
}

// --- Events ---

pub struct EventCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub host_name: String,
    pub host_avatar: String,
    pub date_label: String,
    pub long_date: String,
    pub time_label: String,
    pub time_range: String,
    pub address: String,
    pub attendance: String,
    pub spots_left: Option<String>,
    pub avatar_slots: Vec<usize>,
    pub extra_attendees: usize,
    pub can_rsvp: bool,
    pub can_cancel: bool,
    pub can_manage: bool,
    pub has_ended: bool,
    pub latitude: String,
    pub longitude: String,
}

impl EventCard {
    pub fn new(event: &Event, viewer: &Viewer, now: DateTime<Utc>) -> Self {
        let past = is_past(event, now);
        let attending = viewer.is_attending(event);
        let hosting = viewer.is_host(event);
        let count = event.attendees.len();

        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            image: event.image.clone(),
            host_name: event.host_name.clone(),
            host_avatar: avatar_or_placeholder(&event.host_avatar),
            date_label: format_card_date(event.start_date),
            long_date: format_long_date(event.start_date),
            time_label: format_clock(event.start_date),
            time_range: format_time_range(event.start_date, event.end_date),
            address: event.address.clone(),
            attendance: format!("{} {}", count, plural(count, "person", "people")),
            spots_left: event
                .spots_left()
                .map(|left| format!("{} {} left", left, plural(left as usize, "spot", "spots"))),
            avatar_slots: (0..count.min(MAX_AVATAR_SLOTS)).collect(),
            extra_attendees: count.saturating_sub(MAX_AVATAR_SLOTS),
            can_rsvp: !past && !hosting && !attending,
            can_cancel: !past && attending,
            can_manage: !past && hosting,
            has_ended: past,
            latitude: format!("{:.6}", event.location.latitude),
            longitude: format!("{:.6}", event.location.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewer::tests::viewer;
    use crate::domain::{GeoLocation, UserId};
    use chrono::Duration;

    fn request(author: &str, status: HelpStatus, volunteers: &[&str]) -> HelpRequest {
        HelpRequest {
            id: "1".into(),
            author_id: UserId::new(author),
            author_name: "Emily Taylor".into(),
            author_avatar: None,
            title: "Need help moving furniture".into(),
            description: "Couch".into(),
            category: HelpCategory::Request,
            created_at: Utc::now(),
            status,
            volunteers: volunteers.iter().map(|v| UserId::new(*v)).collect(),
            location: GeoLocation::new(34.052235, -118.243683),
        }
    }

    fn event(host: &str, end_offset: Duration, attendees: usize) -> Event {
        let end = Utc::now() + end_offset;
        Event {
            id: "1".into(),
            host_id: UserId::new(host),
            host_name: "Community Center".into(),
            host_avatar: None,
            title: "Block Party".into(),
            description: "Food".into(),
            start_date: end - Duration::hours(5),
            end_date: end,
            location: GeoLocation::new(34.052235, -118.243683),
            address: "Maple Street Park".into(),
            attendees: (0..attendees).map(|i| UserId::new(format!("user{}", i))).collect(),
            capacity: Some(50),
            image: None,
        }
    }

    #[test]
    fn help_card_actions_depend_on_viewer() {
        let now = Utc::now();
        let open = request("user1", HelpStatus::Open, &[]);

        let stranger = HelpCard::new(&open, &viewer("me"), Theme::Classic, now);
        assert!(stranger.can_volunteer);
        assert!(!stranger.can_complete);
        assert!(stranger.volunteer_summary.is_none());

        let author = HelpCard::new(&open, &viewer("user1"), Theme::Classic, now);
        assert!(!author.can_volunteer);

        let busy = request("user1", HelpStatus::InProgress, &["me"]);
        let author = HelpCard::new(&busy, &viewer("user1"), Theme::Classic, now);
        assert!(author.can_complete);
        assert!(!author.can_contact);
        let helper = HelpCard::new(&busy, &viewer("me"), Theme::Classic, now);
        assert!(helper.can_contact);
        assert!(!helper.can_volunteer);
        assert_eq!(
            helper.volunteer_summary.as_deref(),
            Some("1 neighbor has volunteered to help")
        );
        assert_eq!(helper.status_label, "In Progress");
        assert_eq!(helper.distance, "0.0 miles away");

        let done = request("user1", HelpStatus::Completed, &["a", "b", "c", "d"]);
        let card = HelpCard::new(&done, &viewer("me"), Theme::Classic, now);
        assert!(card.is_completed);
        assert!(!card.can_volunteer);
        assert_eq!(card.volunteer_slots.len(), 3);
        assert_eq!(
            card.volunteer_summary.as_deref(),
            Some("4 neighbors have volunteered to help")
        );
    }

    #[test]
    fn event_card_actions_follow_past_host_and_attendance() {
        let now = Utc::now();

        let upcoming = event("user1", Duration::days(7), 5);
        let card = EventCard::new(&upcoming, &viewer("me"), now);
        assert!(card.can_rsvp);
        assert!(!card.can_cancel && !card.can_manage && !card.has_ended);
        assert_eq!(card.attendance, "5 people");
        assert_eq!(card.spots_left.as_deref(), Some("45 spots left"));
        assert_eq!(card.avatar_slots.len(), 3);
        assert_eq!(card.extra_attendees, 2);

        let card = EventCard::new(&upcoming, &viewer("user0"), now);
        assert!(card.can_cancel);
        assert!(!card.can_rsvp);

        let card = EventCard::new(&upcoming, &viewer("user1"), now);
        assert!(card.can_manage);
        assert!(!card.can_rsvp);

        let mut nearly_full = event("user1", Duration::days(7), 49);
        let card = EventCard::new(&nearly_full, &viewer("me"), now);
        assert_eq!(card.spots_left.as_deref(), Some("1 spot left"));
        nearly_full.attendees.push(UserId::new("late"));
        let card = EventCard::new(&nearly_full, &viewer("me"), now);
        assert_eq!(card.spots_left.as_deref(), Some("0 spots left"));

        let over = event("user1", -Duration::days(1), 1);
        let card = EventCard::new(&over, &viewer("user0"), now);
        assert!(card.has_ended);
        assert!(!card.can_rsvp && !card.can_cancel && !card.can_manage);
        assert_eq!(card.attendance, "1 person");
        assert_eq!(card.extra_attendees, 0);
    }

    #[test]
    fn post_card_reads_counters_from_the_record() {
        let now = Utc::now();
        let me = viewer("me");
        let post = Post {
            id: "1".into(),
            author_id: UserId::new("user1"),
            author_name: "Sarah Johnson".into(),
            author_avatar: None,
            content: "Hi".into(),
            created_at: now - Duration::hours(1),
            likes: 1,
            liked_by: vec![UserId::new("me")],
            comments: Vec::new(),
            category: PostCategory::Question,
            location: GeoLocation::new(0.0, 0.0),
        };

        let card = PostCard::new(&post, &me, Theme::Refined, now);
        assert!(card.liked);
        assert_eq!(card.likes_label, "Like");
        assert_eq!(card.comments_label, "Comments");
        assert_eq!(card.posted_ago, "1h ago");
        assert_eq!(card.author_avatar, AVATAR_PLACEHOLDER);
        assert_eq!(card.badge_class, "badge badge-soft tone-purple");
    }

    #[test]
    fn themes_share_one_contract_with_different_classes() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
            assert!(theme.card().contains("card"));
            assert!(theme.tab(true).contains("tab-active"));
            assert!(!theme.tab(false).contains("tab-active"));
        }
        assert_ne!(Theme::Classic.card(), Theme::Refined.card());
        assert_eq!(Theme::parse("neon"), None);
    }

    #[test]
    fn chrome_marks_active_section() {
        let chrome = Chrome::new("Neighborly", "Events", "/events", "/events", Theme::Classic, &viewer("me"));
        assert_eq!(chrome.title, "Events - Neighborly");
        let active: Vec<&str> = chrome.nav.iter().filter(|l| l.active).map(|l| l.label).collect();
        assert_eq!(active, vec!["Events"]);
        assert_eq!(chrome.viewer_since, "April 2023");
    }

    #[test]
    fn composer_defaults_to_general() {
        let choices = category_choices(Theme::Classic);
        let checked: Vec<&str> = choices.iter().filter(|c| c.checked).map(|c| c.value).collect();
        assert_eq!(checked, vec!["general"]);
    }
}
