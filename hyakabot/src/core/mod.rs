pub use self::{config::BotConfig, context::Context, events::event_loop};

mod config;
mod context;
mod events;

pub mod logging;
