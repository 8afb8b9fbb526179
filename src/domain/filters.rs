// Tab filtering for the help board and the events calendar.
// Filters are stable: survivors keep their relative order.
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::models::{Event, HelpCategory, HelpRequest};
use crate::domain::time::is_past;
use crate::domain::viewer::Viewer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpTab {
    #[default]
    All,
    Requests,
    Offers,
    Mine,
}

impl HelpTab {
    pub const ALL: [HelpTab; 4] = [HelpTab::All, HelpTab::Requests, HelpTab::Offers, HelpTab::Mine];

    pub fn as_str(&self) -> &'static str {
        match self {
            HelpTab::All => "all",
            HelpTab::Requests => "requests",
            HelpTab::Offers => "offers",
            HelpTab::Mine => "mine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HelpTab::All => "All",
            HelpTab::Requests => "Help Needed",
            HelpTab::Offers => "Help Offered",
            HelpTab::Mine => "My Requests",
        }
    }

    pub fn matches(&self, request: &HelpRequest, viewer: &Viewer) -> bool {
        match self {
            HelpTab::All => true,
            HelpTab::Requests => request.category == HelpCategory::Request,
            HelpTab::Offers => request.category == HelpCategory::Offer,
            HelpTab::Mine => viewer.is_author(request),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTab {
    #[default]
    Upcoming,
    Attending,
    Hosting,
    Past,
}

impl EventTab {
    pub const ALL: [EventTab; 4] = [
        EventTab::Upcoming,
        EventTab::Attending,
        EventTab::Hosting,
        EventTab::Past,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventTab::Upcoming => "upcoming",
            EventTab::Attending => "attending",
            EventTab::Hosting => "hosting",
            EventTab::Past => "past",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventTab::Upcoming => "Upcoming",
            EventTab::Attending => "Attending",
            EventTab::Hosting => "Hosting",
            EventTab::Past => "Past",
        }
    }

    pub fn matches(&self, event: &Event, viewer: &Viewer, now: DateTime<Utc>) -> bool {
        match self {
            EventTab::Upcoming => !is_past(event, now),
            EventTab::Past => is_past(event, now),
            EventTab::Attending => viewer.is_attending(event),
            EventTab::Hosting => viewer.is_host(event),
        }
    }
}

pub fn filter_help_requests<'a>(
    requests: &'a [HelpRequest],
    tab: HelpTab,
    viewer: &Viewer,
) -> Vec<&'a HelpRequest> {
    requests
        .iter()
        .filter(|request| tab.matches(request, viewer))
        .collect()
}

pub fn filter_events<'a>(
    events: &'a [Event],
    tab: EventTab,
    viewer: &Viewer,
    now: DateTime<Utc>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| tab.matches(event, viewer, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{GeoLocation, HelpStatus, Record, UserId};
    use crate::domain::viewer::tests::viewer;
    use chrono::Duration;

    fn request(id: &str, author: &str, category: HelpCategory) -> HelpRequest {
        HelpRequest {
            id: id.to_string(),
            author_id: UserId::new(author),
            author_name: author.to_string(),
            author_avatar: None,
            title: format!("title {}", id),
            description: "description".to_string(),
            category,
            created_at: Utc::now(),
            status: HelpStatus::Open,
            volunteers: Vec::new(),
            location: GeoLocation::new(0.0, 0.0),
        }
    }

    fn event(id: &str, host: &str, end: DateTime<Utc>, attendees: &[&str]) -> Event {
        Event {
            id: id.to_string(),
            host_id: UserId::new(host),
            host_name: host.to_string(),
            host_avatar: None,
            title: format!("event {}", id),
            description: "description".to_string(),
            start_date: end - Duration::hours(2),
            end_date: end,
            location: GeoLocation::new(0.0, 0.0),
            address: "Maple Street Park".to_string(),
            attendees: attendees.iter().map(|a| UserId::new(*a)).collect(),
            capacity: None,
            image: None,
        }
    }

    fn ids<T: Record>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn help_tabs_select_by_category_and_author() {
        let me = viewer("me");
        let requests = vec![
            request("1", "user1", HelpCategory::Request),
            request("2", "me", HelpCategory::Offer),
            request("3", "user3", HelpCategory::Request),
            request("4", "me", HelpCategory::Request),
        ];

        let all = filter_help_requests(&requests, HelpTab::All, &me);
        assert_eq!(ids(&all), vec!["1", "2", "3", "4"]);

        let needed = filter_help_requests(&requests, HelpTab::Requests, &me);
        assert_eq!(ids(&needed), vec!["1", "3", "4"]);

        let offered = filter_help_requests(&requests, HelpTab::Offers, &me);
        assert_eq!(ids(&offered), vec!["2"]);

        let mine = filter_help_requests(&requests, HelpTab::Mine, &me);
        assert_eq!(ids(&mine), vec!["2", "4"]);
    }

    #[test]
    fn help_filter_is_stable_for_every_tab() {
        let me = viewer("me");
        let requests: Vec<HelpRequest> = (0..12)
            .map(|i| {
                let author = if i % 3 == 0 { "me" } else { "other" };
                let category = if i % 2 == 0 {
                    HelpCategory::Request
                } else {
                    HelpCategory::Offer
                };
                request(&format!("{:02}", i), author, category)
            })
            .collect();

        for tab in HelpTab::ALL {
            let filtered = ids(&filter_help_requests(&requests, tab, &me));
            let mut sorted = filtered.clone();
            sorted.sort();
            assert_eq!(filtered, sorted, "tab {:?} reordered its results", tab);
        }
    }

    #[test]
    fn event_filter_is_stable_for_every_tab() {
        let me = viewer("me");
        let now = Utc::now();
        let events: Vec<Event> = (0..12)
            .map(|i| {
                let host = if i % 3 == 0 { "me" } else { "other" };
                let end = if i % 2 == 0 {
                    now + Duration::days(i + 1)
                } else {
                    now - Duration::days(i + 1)
                };
                let attendees: &[&str] = if i % 4 == 1 { &["me"] } else { &["other"] };
                event(&format!("{:02}", i), host, end, attendees)
            })
            .collect();

        for tab in EventTab::ALL {
            let filtered = ids(&filter_events(&events, tab, &me, now));
            assert!(!filtered.is_empty(), "tab {:?} matched nothing", tab);
            let mut sorted = filtered.clone();
            sorted.sort();
            assert_eq!(filtered, sorted, "tab {:?} reordered its results", tab);
        }
    }

    #[test]
    fn upcoming_keeps_future_events_only() {
        let me = viewer("me");
        let now = Utc::now();
        let events = vec![
            event("A", "user1", now + Duration::days(7), &[]),
            event("B", "user2", now - Duration::days(1), &[]),
        ];

        let upcoming = filter_events(&events, EventTab::Upcoming, &me, now);
        assert_eq!(ids(&upcoming), vec!["A"]);

        let past = filter_events(&events, EventTab::Past, &me, now);
        assert_eq!(ids(&past), vec!["B"]);
    }

    #[test]
    fn event_ending_exactly_now_is_upcoming() {
        let me = viewer("me");
        let now = Utc::now();
        let events = vec![event("edge", "user1", now, &[])];

        assert_eq!(filter_events(&events, EventTab::Upcoming, &me, now).len(), 1);
        assert!(filter_events(&events, EventTab::Past, &me, now).is_empty());
    }

    #[test]
    fn attending_and_hosting_follow_the_viewer() {
        let me = viewer("me");
        let now = Utc::now();
        let events = vec![
            event("1", "user1", now + Duration::days(1), &["user2", "me"]),
            event("2", "me", now + Duration::days(2), &["me"]),
            event("3", "user3", now + Duration::days(3), &["user2"]),
            event("4", "me", now - Duration::days(3), &[]),
        ];

        let attending = filter_events(&events, EventTab::Attending, &me, now);
        assert_eq!(ids(&attending), vec!["1", "2"]);

        let hosting = filter_events(&events, EventTab::Hosting, &me, now);
        assert_eq!(ids(&hosting), vec!["2", "4"]);

        let someone_else = viewer("user2");
        let attending = filter_events(&events, EventTab::Attending, &someone_else, now);
        assert_eq!(ids(&attending), vec!["1", "3"]);
    }

    #[test]
    fn empty_collection_filters_to_empty() {
        let me = viewer("me");
        assert!(filter_help_requests(&[], HelpTab::Mine, &me).is_empty());
        assert!(filter_events(&[], EventTab::Past, &me, Utc::now()).is_empty());
    }

    #[test]
    fn tabs_parse_from_query_words() {
        #[derive(Deserialize)]
        struct Q {
            tab: EventTab,
        }
        let q: Q = serde_json::from_str(r#"{"tab":"hosting"}"#).unwrap();
        assert_eq!(q.tab, EventTab::Hosting);
        assert!(serde_json::from_str::<Q>(r#"{"tab":"someday"}"#).is_err());
    }
}
