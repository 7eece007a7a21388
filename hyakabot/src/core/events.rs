use std::sync::Arc;

use twilight_gateway::{Event, Shard};

use crate::{commands, core::Context};

pub async fn event_loop(ctx: Arc<Context>, shard: &mut Shard) {
    loop {
        match shard.next_event().await {
            Ok(Event::Ready(_)) => info!("Shard is ready"),
            Ok(Event::InteractionCreate(event)) => {
                let ctx = Arc::clone(&ctx);

                tokio::spawn(async move {
                    commands::handle_interaction(ctx, event.0).await;
                });
            }
            Ok(_) => {}
            Err(source) => {
                if source.is_fatal() {
                    error!(?source, "Fatal gateway error");

                    return;
                }

                warn!(?source, "Gateway error");
            }
        }
    }
}
