pub mod api;
pub mod config;
pub mod counter;
pub mod forms;
pub mod logging;
pub mod render;
pub mod site;
pub mod state;

pub const SITE_ID: &str = "party-site";
