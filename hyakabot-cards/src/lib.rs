mod builder;
mod card;
mod error;
mod font;

pub use self::{card::StatsCard, error::CardError};
