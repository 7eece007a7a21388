use std::{borrow::Cow, slice};

use eyre::{Result, WrapErr};
use hyakabot_util::{constants::RED, EmbedBuilder, MessageBuilder};
use twilight_model::{
    application::interaction::Interaction,
    channel::Message,
    http::interaction::{InteractionResponse, InteractionResponseType},
};

use crate::core::Context;

#[allow(async_fn_in_trait)]
pub trait InteractionExt {
    /// Acknowledge the command but don't respond yet.
    ///
    /// Must use [`InteractionExt::update`] afterwards!
    async fn defer(&self, ctx: &Context) -> Result<()>;

    /// After having acknowledged the command via [`InteractionExt::defer`],
    /// use this to update the response.
    async fn update(&self, ctx: &Context, builder: &MessageBuilder<'_>) -> Result<Message>;

    /// Update a command to some content in a red embed.
    ///
    /// Be sure the command was deferred beforehand.
    async fn error(&self, ctx: &Context, content: impl Into<String>) -> Result<Message>;
}

impl InteractionExt for Interaction {
    async fn defer(&self, ctx: &Context) -> Result<()> {
        let response = InteractionResponse {
            kind: InteractionResponseType::DeferredChannelMessageWithSource,
            data: None,
        };

        ctx.interaction()
            .create_response(self.id, &self.token, &response)
            .await
            .wrap_err("Failed to defer response")?;

        Ok(())
    }

    async fn update(&self, ctx: &Context, builder: &MessageBuilder<'_>) -> Result<Message> {
        let client = ctx.interaction();

        let mut req = client
            .update_response(&self.token)
            .content(builder.content.as_ref().map(Cow::as_ref))
            .wrap_err("Invalid content")?
            .embeds(builder.embed.as_ref().map(slice::from_ref))
            .wrap_err("Invalid embed")?;

        if let Some(ref attachment) = builder.attachment {
            req = req
                .attachments(slice::from_ref(attachment))
                .wrap_err("Invalid attachment")?;
        }

        req.await
            .wrap_err("Failed to update response")?
            .model()
            .await
            .wrap_err("Failed to deserialize response message")
    }

    async fn error(&self, ctx: &Context, content: impl Into<String>) -> Result<Message> {
        let embed = EmbedBuilder::new().description(content).color(RED);
        let builder = MessageBuilder::new().embed(embed);

        self.update(ctx, &builder).await
    }
}
