use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a neighbor. Every ownership and participation set holds these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const EARTH_RADIUS_MILES: f64 = 3958.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle (haversine) distance in miles.
    pub fn distance_miles(&self, other: &GeoLocation) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub address: String,
    pub bio: Option<String>,
    pub joined_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    #[default]
    General,
    Question,
    Alert,
    News,
}

impl PostCategory {
    pub const ALL: [PostCategory; 4] = [
        PostCategory::General,
        PostCategory::Question,
        PostCategory::Alert,
        PostCategory::News,
    ];

    /// Wire/form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::General => "general",
            PostCategory::Question => "question",
            PostCategory::Alert => "alert",
            PostCategory::News => "news",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::General => "General",
            PostCategory::Question => "Question",
            PostCategory::Alert => "Alert",
            PostCategory::News => "News",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: UserId,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: UserId,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    /// Neighbors whose like is counted in `likes`.
    #[serde(default)]
    pub liked_by: Vec<UserId>,
    pub comments: Vec<Comment>,
    pub category: PostCategory,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpCategory {
    #[default]
    Request,
    Offer,
}

impl HelpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpCategory::Request => "request",
            HelpCategory::Offer => "offer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HelpCategory::Request => "Need Help",
            HelpCategory::Offer => "Offering Help",
        }
    }
}

/// open -> in-progress -> completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelpStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

impl HelpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpStatus::Open => "open",
            HelpStatus::InProgress => "in-progress",
            HelpStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HelpStatus::Open => "Open",
            HelpStatus::InProgress => "In Progress",
            HelpStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: String,
    pub author_id: UserId,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub title: String,
    pub description: String,
    pub category: HelpCategory,
    pub created_at: DateTime<Utc>,
    pub status: HelpStatus,
    #[serde(default)]
    pub volunteers: Vec<UserId>,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub host_id: UserId,
    pub host_name: String,
    pub host_avatar: Option<String>,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: GeoLocation,
    pub address: String,
    pub attendees: Vec<UserId>,
    pub capacity: Option<u32>,
    pub image: Option<String>,
}

impl Event {
    /// Remaining places, never below zero. `None` when the event is uncapped.
    pub fn spots_left(&self) -> Option<u32> {
        let taken = u32::try_from(self.attendees.len()).unwrap_or(u32::MAX);
        self.capacity.map(|cap| cap.saturating_sub(taken))
    }
}

/// Records addressable by id inside their owning collection.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for HelpRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&HelpStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: HelpStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, HelpStatus::Completed);
    }

    #[test]
    fn post_category_uses_lowercase_on_the_wire() {
        let json = serde_json::to_string(&PostCategory::Alert).unwrap();
        assert_eq!(json, "\"alert\"");
        for category in PostCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("user1")).unwrap();
        assert_eq!(json, "\"user1\"");
        assert_eq!(UserId::new("user1").to_string(), "user1");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let here = GeoLocation::new(34.052235, -118.243683);
        assert!(here.distance_miles(&here) < 1e-9);
    }

    #[test]
    fn distance_between_known_points() {
        // Downtown LA to Santa Monica pier, roughly 15 miles.
        let downtown = GeoLocation::new(34.052235, -118.243683);
        let pier = GeoLocation::new(34.008, -118.4987);
        let miles = downtown.distance_miles(&pier);
        assert!(miles > 14.0 && miles < 16.0, "got {}", miles);
    }

    #[test]
    fn spots_left_saturates_at_zero() {
        let event = Event {
            id: "e".into(),
            host_id: UserId::new("host"),
            host_name: "Host".into(),
            host_avatar: None,
            title: "Tiny".into(),
            description: "d".into(),
            start_date: Utc::now(),
            end_date: Utc::now(),
            location: GeoLocation::new(0.0, 0.0),
            address: "here".into(),
            attendees: vec![UserId::new("a"), UserId::new("b"), UserId::new("c")],
            capacity: Some(2),
            image: None,
        };
        assert_eq!(event.spots_left(), Some(0));

        let uncapped = Event {
            capacity: None,
            ..event
        };
        assert_eq!(uncapped.spots_left(), None);
    }
}
