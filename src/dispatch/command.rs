use super::{MessageStage, Services};
use crate::{commands::Origin, events::MessageEvent};

/// Runs `<prefix><command> [args...]` messages through the command executor
pub struct CommandStage;

#[serenity::async_trait]
impl MessageStage for CommandStage {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn run(&self, services: &Services, msg: &MessageEvent) -> anyhow::Result<()> {
        let Some((name, args)) = parse_command(&services.config.prefix, &msg.content) else {
            return Ok(());
        };

        let cx = services.context(Origin::Message(msg.clone()));
        if !services.executor.execute_command(&name, &cx, &args).await {
            tracing::debug!("Ignoring unknown command `{name}` from {}", msg.author.id);
        }
        Ok(())
    }
}

/// Splits a prefixed message into a lower-cased command name and its arguments.
///
/// Whitespace after the prefix is optional, so `anyaping` and `anya ping` are
/// the same command.
fn parse_command(prefix: &str, content: &str) -> Option<(String, Vec<String>)> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some((name, tokens.map(str::to_string).collect()))
}
