use super::{CommandHandler, HandlerContext};

pub struct Handler;

#[serenity::async_trait]
impl CommandHandler for Handler {
    async fn run(&self, cx: &HandlerContext, _args: &[String]) -> anyhow::Result<()> {
        cx.reply("Pong!").await
    }
}
