use std::sync::Arc;

use eyre::{Result, WrapErr};
use twilight_gateway::{Intents, Shard, ShardId};
use twilight_http::{client::InteractionClient, Client};
use twilight_model::id::{marker::ApplicationMarker, Id};

use crate::core::BotConfig;

pub struct Context {
    pub http: Arc<Client>,
    pub client: hyakabot_client::Client,
    application_id: Id<ApplicationMarker>,
}

impl Context {
    pub async fn init() -> Result<(Self, Shard)> {
        let config = BotConfig::get();
        let token = config.tokens.discord.to_string();

        let http = Arc::new(Client::new(token.clone()));

        let application_id = http
            .current_user_application()
            .await
            .wrap_err("Failed to request current user application")?
            .model()
            .await
            .wrap_err("Failed to deserialize current user application")?
            .id;

        let client = hyakabot_client::Client::new(config.hyakanime_api.as_ref())
            .wrap_err("Failed to create hyakanime client")?;

        // slash commands require no intent
        let shard = Shard::new(ShardId::ONE, token, Intents::empty());

        let ctx = Self {
            http,
            client,
            application_id,
        };

        Ok((ctx, shard))
    }

    pub fn interaction(&self) -> InteractionClient<'_> {
        self.http.interaction(self.application_id)
    }
}
