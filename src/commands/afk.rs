use anyhow::Context as _;

use super::{CommandHandler, HandlerContext, Origin};
use crate::constant;

/// Discord rejects nicknames longer than this
const MAX_NICKNAME_CHARS: usize = 32;

/// Marks the author as AFK in the current guild, with the arguments as the reason
pub struct Handler;

#[serenity::async_trait]
impl CommandHandler for Handler {
    async fn run(&self, cx: &HandlerContext, args: &[String]) -> anyhow::Result<()> {
        let Origin::Message(msg) = &cx.origin else {
            anyhow::bail!("afk can only be used as a text command");
        };
        let guild_id = cx.guild_id().context("afk can only be used in a guild")?;

        let reason = args.join(" ");
        cx.afk
            .set_afk(guild_id, msg.author.id, &msg.author.display_name, &reason)
            .await?;

        let afk_nickname: String = format!(
            "{}{}",
            constant::text::AFK_NICKNAME_PREFIX,
            msg.author.display_name
        )
        .chars()
        .take(MAX_NICKNAME_CHARS)
        .collect();
        if let Err(err) = cx
            .chat
            .set_nickname(guild_id, msg.author.id, &afk_nickname)
            .await
        {
            tracing::debug!("Could not set AFK nickname for {}: {err}", msg.author.id);
        }

        let reason = if reason.is_empty() {
            constant::text::NO_AFK_REASON
        } else {
            reason.as_str()
        };
        cx.reply(&format!("Your AFK status has been set | **Reason:** {reason}"))
            .await
    }
}
