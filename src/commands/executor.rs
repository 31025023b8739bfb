use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

use serenity::futures::FutureExt as _;

use super::{HandlerContext, HandlerKind, HandlerRegistry};
use crate::constant;

/// Runs registered handlers behind a fault boundary: an error or panic in a
/// handler is logged and, unless the handler already answered, turned into a
/// single failure reply.
#[derive(Clone)]
pub struct CommandExecutor {
    registry: Arc<HandlerRegistry>,
}
impl CommandExecutor {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute_command(
        &self,
        name: &str,
        cx: &HandlerContext,
        args: &[String],
    ) -> bool {
        self.execute(HandlerKind::Command, name, cx, args).await
    }

    /// Returns whether a handler was registered under `name`
    pub async fn execute(
        &self,
        kind: HandlerKind,
        name: &str,
        cx: &HandlerContext,
        args: &[String],
    ) -> bool {
        let Some(handler) = self.registry.lookup(kind, name) else {
            return false;
        };

        let outcome = AssertUnwindSafe(handler.run(cx, args))
            .catch_unwind()
            .await;
        let failure = match outcome {
            Ok(Ok(())) => return true,
            Ok(Err(err)) => format!("{err:#}"),
            Err(panic) => format!("panicked: {}", panic_message(panic.as_ref())),
        };

        tracing::error!(
            "{kind} handler `{name}` failed for user {}: {failure}",
            cx.user_id()
        );
        if cx.has_replied() {
            return true;
        }
        if let Err(err) = cx.reply(constant::text::COMMAND_FAILED).await {
            tracing::warn!("Could not report failure of {kind} handler `{name}`: {err}");
        }
        true
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
