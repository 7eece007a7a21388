mod profile;

pub use self::profile::Profile;

use std::{mem, sync::Arc};

use eyre::Result;
use twilight_model::application::interaction::{Interaction, InteractionData};

use crate::core::Context;

pub async fn handle_interaction(ctx: Arc<Context>, mut interaction: Interaction) {
    let Some(InteractionData::ApplicationCommand(mut data)) = interaction.data.take() else {
        return;
    };

    let name = mem::take(&mut data.name);

    let res: Result<()> = match name.as_str() {
        "profile" => profile::profile(ctx, &interaction, *data).await,
        _ => return error!("Unknown slash command `{name}`"),
    };

    match res {
        Ok(_) => info!("Processed slash command `{name}`"),
        Err(err) => {
            let wrap = format!("Failed to process slash command `{name}`");
            error!("{:?}", err.wrap_err(wrap));
        }
    }
}
