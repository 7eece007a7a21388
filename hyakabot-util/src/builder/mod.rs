pub use self::{
    author::AuthorBuilder, embed::EmbedBuilder, footer::FooterBuilder, message::MessageBuilder,
};

mod author;
mod embed;
mod footer;
mod message;
