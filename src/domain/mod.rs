// Domain layer - pure data and pure functions, no I/O
pub mod filters;
pub mod models;
pub mod time;
pub mod transitions;
pub mod viewer;

pub use models::{
    Comment, Event, GeoLocation, HelpCategory, HelpRequest, HelpStatus, Post, PostCategory,
    Record, User, UserId,
};
pub use transitions::ValidationError;
pub use viewer::Viewer;
