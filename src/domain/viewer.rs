// Who is looking at a page. Every ownership/participation check goes through here.
use crate::domain::models::{Event, GeoLocation, HelpRequest, Post, User, UserId};

#[derive(Debug, Clone)]
pub struct Viewer {
    pub user: User,
    /// Where the viewer lives; distances on help cards are measured from here.
    pub home: GeoLocation,
}

impl Viewer {
    pub fn new(user: User, home: GeoLocation) -> Self {
        Self { user, home }
    }

    pub fn id(&self) -> &UserId {
        &self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn is_author(&self, request: &HelpRequest) -> bool {
        request.author_id == self.user.id
    }

    pub fn is_volunteer(&self, request: &HelpRequest) -> bool {
        request.volunteers.contains(&self.user.id)
    }

    pub fn is_host(&self, event: &Event) -> bool {
        event.host_id == self.user.id
    }

    pub fn is_attending(&self, event: &Event) -> bool {
        event.attendees.contains(&self.user.id)
    }

    pub fn has_liked(&self, post: &Post) -> bool {
        post.liked_by.contains(&self.user.id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::models::{HelpCategory, HelpStatus};
    use chrono::{NaiveDate, Utc};

    pub fn viewer(id: &str) -> Viewer {
        Viewer::new(
            User {
                id: UserId::new(id),
                name: "Alex Johnson".to_string(),
                avatar: "/assets/img/avatar-placeholder.svg".to_string(),
                address: "12 Maple Street".to_string(),
                bio: None,
                joined_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            },
            GeoLocation::new(34.052235, -118.243683),
        )
    }

    #[test]
    fn authorship_follows_the_viewer_not_a_constant() {
        let request = HelpRequest {
            id: "1".into(),
            author_id: UserId::new("user1"),
            author_name: "Emily Taylor".into(),
            author_avatar: None,
            title: "t".into(),
            description: "d".into(),
            category: HelpCategory::Request,
            created_at: Utc::now(),
            status: HelpStatus::InProgress,
            volunteers: vec![UserId::new("user4")],
            location: GeoLocation::new(0.0, 0.0),
        };

        assert!(viewer("user1").is_author(&request));
        assert!(!viewer("user4").is_author(&request));
        assert!(viewer("user4").is_volunteer(&request));
        assert!(!viewer("user1").is_volunteer(&request));
    }
}
