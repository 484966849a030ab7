pub mod app;
pub mod cli;
pub mod convert;
pub mod error;
pub mod owm;
pub mod prefs;
pub mod ui;
pub mod weather;

pub use convert::{direction::wind_direction, icon::icon_url};
