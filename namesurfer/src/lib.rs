#![warn(clippy::all, rust_2018_idioms)]

mod app;

pub use app::command::{parse_command, HELP};
pub use app::config::Config;
pub use app::events;
pub use app::session::Session;
pub use app::storage;
pub use app::NameSurfer;
