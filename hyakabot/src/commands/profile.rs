use std::{borrow::Cow, sync::Arc};

use eyre::{Report, Result, WrapErr};
use hyakabot_cards::StatsCard;
use hyakabot_model::AggregatedStats;
use hyakabot_util::{
    constants::{GENERAL_ISSUE, HYAKANIME_API_ISSUE, HYAKANIME_BASE},
    datetime::DATE_FORMAT,
    AuthorBuilder, EmbedBuilder, MessageBuilder,
};
use time::OffsetDateTime;
use twilight_interactions::command::{CommandInputData, CommandModel, CreateCommand};
use twilight_model::application::interaction::{
    application_command::CommandData, Interaction,
};

use crate::{
    core::{BotConfig, Context},
    embeds::attachment,
    util::InteractionExt,
};

#[derive(CommandModel, CreateCommand)]
#[command(name = "profile", desc = "Display a hyakanime user's anime stats")]
pub struct Profile {
    #[command(desc = "Specify a hyakanime username")]
    pseudo: String,
}

pub async fn profile(ctx: Arc<Context>, interaction: &Interaction, data: CommandData) -> Result<()> {
    let input_data = CommandInputData {
        options: data.options,
        resolved: data.resolved.map(Cow::Owned),
    };

    let args = Profile::from_interaction(input_data)?;

    interaction.defer(&ctx).await?;

    let user = match ctx.client.resolve_user(&args.pseudo).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            let content = format!("No user found with the name `{}`", args.pseudo);
            interaction.error(&ctx, content).await?;

            return Ok(());
        }
        Err(err) => {
            let _ = interaction.error(&ctx, HYAKANIME_API_ISSUE).await;

            return Err(err.wrap_err("Failed to resolve user"));
        }
    };

    let progressions_fut = ctx.client.anime_progressions(&user.uid);
    let counts_fut = ctx.client.anime_status_counts(&user.uid);

    let (entries, counts) = match tokio::join!(progressions_fut, counts_fut) {
        (Ok(entries), Ok(counts)) => (entries, counts),
        (Err(err), _) | (_, Err(err)) => {
            let _ = interaction.error(&ctx, HYAKANIME_API_ISSUE).await;

            return Err(err.wrap_err("Failed to get progression data"));
        }
    };

    let stats = AggregatedStats::aggregate(&entries);

    let card_res = StatsCard::new(&counts, &stats)
        .assets(BotConfig::get().paths.assets.clone())
        .draw();

    let bytes = match card_res {
        Ok(bytes) => bytes,
        Err(err) => {
            let _ = interaction.error(&ctx, GENERAL_ISSUE).await;

            return Err(Report::new(err).wrap_err("Failed to draw stats card"));
        }
    };

    let badges = user.badges();

    let title = if badges.is_empty() {
        user.username.to_string()
    } else {
        format!("{} {badges}", user.username)
    };

    let created_at = user
        .created_at
        .format(DATE_FORMAT)
        .wrap_err("Failed to format creation date")?;

    let embed = EmbedBuilder::new()
        .title(title)
        .url(format!("{HYAKANIME_BASE}user/{}", user.username))
        .author(
            AuthorBuilder::new("Hyakanime")
                .url(HYAKANIME_BASE)
                .icon_url(BotConfig::get().logo_url.as_ref()),
        )
        .thumbnail(user.photo_url.as_ref())
        .image(attachment("stats.png"))
        .timestamp(OffsetDateTime::now_utc())
        .footer(format!("Compte créé le {created_at}"));

    let builder = MessageBuilder::new()
        .attachment("stats.png", bytes)
        .embed(embed);

    interaction.update(&ctx, &builder).await?;

    Ok(())
}
