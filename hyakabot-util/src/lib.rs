mod builder;

pub mod constants;
pub mod datetime;

pub use self::builder::{AuthorBuilder, EmbedBuilder, FooterBuilder, MessageBuilder};
