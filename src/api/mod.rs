//! Typed client for the site's backend endpoints.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    ContactRequest, EventRecord, EventsResponse, MemberRegistration, MemberType,
    NewsletterRequest, PollVote, RsvpRequest,
};

pub mod paths {
    use const_format::concatcp;

    pub const API: &str = "/api";

    pub const NEWSLETTER: &str = concatcp!(API, "/newsletter");
    pub const CONTACT: &str = concatcp!(API, "/contact");
    pub const RSVP: &str = concatcp!(API, "/rsvp");
    pub const MEMBERS: &str = concatcp!(API, "/members");
    pub const POLLS: &str = concatcp!(API, "/polls");
    pub const EVENTS: &str = concatcp!(API, "/events");
}

pub const USER_AGENT: &str =
    const_format::concatcp!(crate::SITE_ID, "/", env!("CARGO_PKG_VERSION"));
