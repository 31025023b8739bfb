use serenity::all::GuildId;

use super::{MessageStage, Services};
use crate::{afk::AfkRecord, constant, events::MessageEvent};

/// Clears the author's AFK status when they speak, and warns people who
/// mention someone who is AFK.
pub struct AfkStage;

#[serenity::async_trait]
impl MessageStage for AfkStage {
    fn name(&self) -> &'static str {
        "afk"
    }

    async fn run(&self, services: &Services, msg: &MessageEvent) -> anyhow::Result<()> {
        let Some(guild_id) = msg.guild_id else {
            return Ok(());
        };

        if let Some(record) = services.afk.find_afk(guild_id, msg.author.id).await? {
            return welcome_back(services, guild_id, msg, record).await;
        }

        let Some(mention) = msg.mentions.first() else {
            return Ok(());
        };
        let Some(record) = services.afk.find_afk(guild_id, mention.id).await? else {
            return Ok(());
        };
        if !mention.appears_in(&msg.content) {
            return Ok(());
        }

        let reason = if record.message.is_empty() {
            constant::text::NO_AFK_REASON
        } else {
            record.message.as_str()
        };
        let warning = services
            .chat
            .reply(
                msg.message_ref(),
                &format!(
                    "👤 **{}** is currently **AFK**, please don't mention them right now | **Reason:** {reason}",
                    mention.tag
                ),
            )
            .await?;
        services.janitor.schedule(
            vec![warning, msg.message_ref()],
            services.config.cleanup_delay(),
        );
        Ok(())
    }
}

async fn welcome_back(
    services: &Services,
    guild_id: GuildId,
    msg: &MessageEvent,
    record: AfkRecord,
) -> anyhow::Result<()> {
    services.afk.clear_afk(guild_id, msg.author.id).await?;
    tracing::debug!("{} is back from AFK in {guild_id}", msg.author.tag);

    if let Err(err) = services
        .chat
        .set_nickname(guild_id, msg.author.id, &record.nickname)
        .await
    {
        tracing::debug!("Could not restore nickname of {}: {err}", msg.author.id);
    }

    let reply = services
        .chat
        .reply(
            msg.message_ref(),
            &format!(
                "Welcome back, <@{}>! Your **AFK** status has been **removed**",
                msg.author.id
            ),
        )
        .await?;
    services
        .janitor
        .schedule(vec![reply], services.config.cleanup_delay());
    Ok(())
}
