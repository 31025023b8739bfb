use super::{CommandHandler, HandlerContext, HandlerKind};

/// Lists the registered text commands
pub struct Handler;

#[serenity::async_trait]
impl CommandHandler for Handler {
    async fn run(&self, cx: &HandlerContext, _args: &[String]) -> anyhow::Result<()> {
        let commands = cx
            .registry
            .names(HandlerKind::Command)
            .iter()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");

        cx.reply(&format!(
            "Prefix: `{}`\nCommands: {commands}",
            cx.config.prefix
        ))
        .await
    }
}
