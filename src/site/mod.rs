pub mod content;
pub mod events;
pub mod gallery;
pub mod pages;
mod routes;

pub use events::EventsView;
pub use gallery::Lightbox;
pub use pages::PageView;
pub use routes::Route;
