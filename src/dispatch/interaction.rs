use super::{Services, notices};
use crate::{
    commands::{HandlerKind, Origin},
    constant,
    events::{ComponentKind, InteractionEvent},
};

pub(super) async fn handle(services: &Services, interaction: InteractionEvent) -> anyhow::Result<()> {
    if interaction.kind == ComponentKind::Button
        && interaction.custom_id == constant::component::RULES_BUTTON
    {
        return show_rules(services, &interaction).await;
    }

    let kind = HandlerKind::from(interaction.kind);
    let custom_id = interaction.custom_id.clone();
    let channel_id = interaction.channel_id;
    let values = interaction.values.clone();
    let cx = services.context(Origin::Interaction(interaction));
    if !services.executor.execute(kind, &custom_id, &cx, &values).await {
        tracing::debug!("Unhandled {kind} interaction `{custom_id}` in {channel_id}");
    }
    Ok(())
}

async fn show_rules(services: &Services, interaction: &InteractionEvent) -> anyhow::Result<()> {
    let Some(channel_id) = services.config.rules_channel() else {
        return Ok(());
    };

    services
        .chat
        .send_notice(channel_id, &notices::rules(&services.config))
        .await?;
    services
        .chat
        .respond(
            &interaction.interaction_ref(),
            constant::text::RULES_SENT,
            true,
        )
        .await
}
