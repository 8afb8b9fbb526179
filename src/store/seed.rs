// Canned neighborhood the server starts with.
use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    Comment, Event, GeoLocation, HelpCategory, HelpRequest, HelpStatus, Post, PostCategory, UserId,
};

const AVATAR: &str = "/assets/img/avatar-placeholder.svg";
const EVENT_IMAGE: &str = "/assets/img/placeholder-event.svg";

fn near(center: GeoLocation, dlat: f64, dlon: f64) -> GeoLocation {
    GeoLocation::new(center.latitude + dlat, center.longitude + dlon)
}

fn ids(users: &[&str]) -> Vec<UserId> {
    users.iter().map(|u| UserId::new(*u)).collect()
}

fn comment(
    id: &str,
    author: (&str, &str),
    content: &str,
    created_at: DateTime<Utc>,
    likes: u32,
) -> Comment {
    Comment {
        id: id.to_string(),
        author_id: UserId::new(author.0),
        author_name: author.1.to_string(),
        author_avatar: Some(AVATAR.to_string()),
        content: content.to_string(),
        created_at,
        likes,
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    author: (&str, &str),
    content: &str,
    created_at: DateTime<Utc>,
    likes: u32,
    comments: Vec<Comment>,
    category: PostCategory,
    location: GeoLocation,
) -> Post {
    Post {
        id: id.to_string(),
        author_id: UserId::new(author.0),
        author_name: author.1.to_string(),
        author_avatar: Some(AVATAR.to_string()),
        content: content.to_string(),
        created_at,
        likes,
        liked_by: Vec::new(),
        comments,
        category,
        location,
    }
}

pub fn posts(center: GeoLocation, now: DateTime<Utc>) -> Vec<Post> {
    vec![
        post(
            "1",
            ("user1", "Sarah Johnson"),
            "Hi neighbors! Just moved to Maple Street last week. Looking forward to meeting everyone! I've got some extra moving boxes if anyone needs them.",
            now - Duration::hours(1),
            12,
            vec![comment(
                "c1",
                ("user2", "Mike Chen"),
                "Welcome to the neighborhood! I live down at 432. Let me know if you need anything!",
                now - Duration::minutes(50),
                2,
            )],
            PostCategory::General,
            near(center, 0.002, -0.001),
        ),
        post(
            "2",
            ("user2", "Mike Chen"),
            "ALERT: Several cars on Oak St had their windows smashed last night. Please check your vehicles and report any incidents to the police. I've already contacted our community officer.",
            now - Duration::days(1),
            24,
            vec![
                comment(
                    "c2",
                    ("user3", "Jennifer Lopez"),
                    "Thanks for the heads up, checking my car now.",
                    now - Duration::seconds(84_400),
                    1,
                ),
                comment(
                    "c3",
                    ("user4", "Robert Williams"),
                    "I saw a suspicious person around 2AM. Will DM you the details.",
                    now - Duration::seconds(82_400),
                    3,
                ),
            ],
            PostCategory::Alert,
            near(center, -0.003, 0.002),
        ),
        post(
            "3",
            ("user5", "Emily Taylor"),
            "Does anyone know a good plumber in the area? My kitchen sink is leaking and it's becoming a real issue. Looking for someone reliable who can come on short notice.",
            now - Duration::days(2),
            7,
            vec![comment(
                "c4",
                ("user6", "David Miller"),
                "I used ABC Plumbing last month, they were great. Their number is 555-1234",
                now - Duration::seconds(169_800),
                2,
            )],
            PostCategory::Question,
            near(center, 0.004, 0.003),
        ),
        post(
            "4",
            ("user7", "Local Library"),
            "NEWS: The community library is extending hours starting next week! We'll now be open until 8PM on weekdays and 6PM on weekends. We're also starting a new book club on Thursdays at 6PM. All are welcome!",
            now - Duration::days(3),
            32,
            vec![comment(
                "c5",
                ("user8", "Lisa Anderson"),
                "This is great news! Will definitely join the book club.",
                now - Duration::seconds(255_200),
                4,
            )],
            PostCategory::News,
            near(center, -0.006, -0.004),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn help(
    id: &str,
    author: (&str, &str),
    title: &str,
    description: &str,
    category: HelpCategory,
    created_at: DateTime<Utc>,
    status: HelpStatus,
    volunteers: Vec<UserId>,
    location: GeoLocation,
) -> HelpRequest {
    HelpRequest {
        id: id.to_string(),
        author_id: UserId::new(author.0),
        author_name: author.1.to_string(),
        author_avatar: Some(AVATAR.to_string()),
        title: title.to_string(),
        description: description.to_string(),
        category,
        created_at,
        status,
        volunteers,
        location,
    }
}

pub fn help_requests(center: GeoLocation, now: DateTime<Utc>) -> Vec<HelpRequest> {
    vec![
        help(
            "1",
            ("user1", "Emily Taylor"),
            "Need help moving furniture",
            "I'm moving to a new apartment this Saturday and could use some help moving a couch and a bookshelf. I can provide pizza and drinks as a thank you!\n\nI live on the second floor, and the new place is on the third floor of a building about 2 miles away. I've rented a small moving truck, so we just need to get the furniture down the stairs, into the truck, and then up the stairs at the new place.",
            HelpCategory::Request,
            now - Duration::days(1),
            HelpStatus::Open,
            Vec::new(),
            near(center, 0.003, 0.002),
        ),
        help(
            "2",
            ("user2", "Mike Chen"),
            "Offering free math tutoring",
            "I'm a high school math teacher with some free time on weekends. Happy to help students in the neighborhood with math homework or test prep. All grade levels welcome!",
            HelpCategory::Offer,
            now - Duration::days(2),
            HelpStatus::Open,
            Vec::new(),
            near(center, -0.005, 0.001),
        ),
        help(
            "3",
            ("user3", "Sarah Johnson"),
            "Looking for a lawnmower to borrow",
            "My lawnmower broke down and I need to mow my lawn before the HOA inspection this Friday. Would anyone be willing to let me borrow theirs for a few hours? I'll return it in perfect condition.",
            HelpCategory::Request,
            now - Duration::days(3),
            HelpStatus::InProgress,
            ids(&["user4"]),
            near(center, 0.007, -0.006),
        ),
        help(
            "4",
            ("user5", "Robert Williams"),
            "Free plants and gardening supplies",
            "I'm downsizing my garden and have several healthy plants and supplies to give away. I have succulents, herbs, and some vegetable seedlings. Also have extra pots, soil, and tools. First come, first served!",
            HelpCategory::Offer,
            now - Duration::days(4),
            HelpStatus::Completed,
            Vec::new(),
            near(center, -0.009, -0.008),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    host: (&str, &str),
    title: &str,
    description: &str,
    start_date: DateTime<Utc>,
    hours: i64,
    address: &str,
    attendees: Vec<UserId>,
    capacity: Option<u32>,
    image: Option<&str>,
    location: GeoLocation,
) -> Event {
    Event {
        id: id.to_string(),
        host_id: UserId::new(host.0),
        host_name: host.1.to_string(),
        host_avatar: Some(AVATAR.to_string()),
        title: title.to_string(),
        description: description.to_string(),
        start_date,
        end_date: start_date + Duration::hours(hours),
        location,
        address: address.to_string(),
        attendees,
        capacity,
        image: image.map(str::to_string),
    }
}

pub fn events(center: GeoLocation, now: DateTime<Utc>) -> Vec<Event> {
    vec![
        event(
            "1",
            ("user1", "Community Center"),
            "Neighborhood Block Party",
            "Join us for our annual block party! There will be food, games, and live music. Everyone is welcome. Bring a dish to share if you'd like.\n\nWe'll have activities for children, including face painting and a bouncy castle. For adults, we'll have a barbecue and local craft beer.",
            now + Duration::days(7),
            5,
            "Maple Street Park",
            ids(&["user2", "user3", "user4", "user5", "user6"]),
            Some(50),
            Some(EVENT_IMAGE),
            near(center, 0.001, 0.001),
        ),
        event(
            "2",
            ("user2", "Sarah Johnson"),
            "Gardening Workshop",
            "Learn how to grow your own vegetables and herbs! I'll share tips on soil preparation, seed starting, and pest management. All skill levels welcome.",
            now + Duration::days(10),
            2,
            "123 Maple Street",
            ids(&["user1", "user3"]),
            Some(15),
            None,
            near(center, 0.002, -0.002),
        ),
        event(
            "3",
            ("user3", "Mike Chen"),
            "Neighborhood Watch Meeting",
            "Monthly meeting to discuss safety concerns and updates. Our community police officer will be joining us to answer questions.",
            now + Duration::days(5),
            2,
            "Community Hall, 456 Oak Street",
            ids(&["user1", "user2", "user4", "user7"]),
            Some(30),
            None,
            near(center, -0.004, 0.003),
        ),
        event(
            "4",
            ("user4", "Emily Taylor"),
            "Book Club: \"The Midnight Library\"",
            "Join our monthly book club! This month we're discussing 'The Midnight Library' by Matt Haig. New members always welcome.",
            now + Duration::days(14),
            2,
            "Local Coffee Shop, 789 Pine Street",
            ids(&["user2", "user5", "user6", "user8"]),
            Some(20),
            None,
            near(center, 0.005, 0.004),
        ),
        event(
            "5",
            ("user6", "David Miller"),
            "Spring Street Cleanup",
            "Thanks to everyone who came out with gloves and bags. We filled 40 bags and cleared the creek path.",
            now - Duration::days(20),
            3,
            "Oak Street Creek Path",
            ids(&["user1", "user3", "user6"]),
            None,
            None,
            near(center, -0.006, -0.002),
        ),
    ]
}
