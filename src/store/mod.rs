pub mod seed;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{Event, GeoLocation, HelpRequest, Post};

/// The working collections. Each page owns exactly one of them.
///
/// Handlers lock a single collection, compute its replacement with a pure
/// transition and swap it in before the guard drops.
pub struct Neighborhood {
    pub posts: Mutex<Vec<Post>>,
    pub help_requests: Mutex<Vec<HelpRequest>>,
    pub events: Mutex<Vec<Event>>,
}

impl Neighborhood {
    pub fn empty() -> Self {
        Self::with(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn with(posts: Vec<Post>, help_requests: Vec<HelpRequest>, events: Vec<Event>) -> Self {
        Self {
            posts: Mutex::new(posts),
            help_requests: Mutex::new(help_requests),
            events: Mutex::new(events),
        }
    }

    /// Canned dataset placed around `center`, with timestamps relative to `now`.
    pub fn seeded(center: GeoLocation, now: DateTime<Utc>) -> Self {
        let posts = seed::posts(center, now);
        let help_requests = seed::help_requests(center, now);
        let events = seed::events(center, now);

        tracing::info!(
            "Seeded neighborhood: {} posts, {} help requests, {} events",
            posts.len(),
            help_requests.len(),
            events.len()
        );

        Self::with(posts, help_requests, events)
    }
}
