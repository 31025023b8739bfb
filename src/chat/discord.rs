use std::sync::Arc;

use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, EditMember,
    GuildId, Http, MessageReference, Timestamp, UserId,
};

use super::{Chat, InteractionRef, MessageRef, Notice};

/// [`Chat`] backed by Discord's REST API
pub struct DiscordChat {
    http: Arc<Http>,
}
impl DiscordChat {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[serenity::async_trait]
impl Chat for DiscordChat {
    async fn reply(&self, to: MessageRef, content: &str) -> anyhow::Result<MessageRef> {
        let message = to
            .channel_id
            .send_message(
                &*self.http,
                CreateMessage::new()
                    .content(content)
                    .reference_message(MessageReference::from((to.channel_id, to.message_id))),
            )
            .await?;

        Ok(MessageRef {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn send_notice(
        &self,
        channel_id: ChannelId,
        notice: &Notice,
    ) -> anyhow::Result<MessageRef> {
        let mut embed = CreateEmbed::new()
            .title(&notice.title)
            .description(&notice.description)
            .color(notice.color)
            .timestamp(Timestamp::now());
        if let Some(thumbnail) = &notice.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }
        for field in &notice.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        let mut message = CreateMessage::new().embed(embed);
        if let Some(button) = &notice.button {
            message = message.components(vec![CreateActionRow::Buttons(vec![
                CreateButton::new(&button.custom_id)
                    .label(&button.label)
                    .style(ButtonStyle::Primary),
            ])]);
        }

        let message = channel_id.send_message(&*self.http, message).await?;
        Ok(MessageRef {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn delete(&self, message: MessageRef) -> anyhow::Result<()> {
        Ok(message
            .channel_id
            .delete_message(&*self.http, message.message_id)
            .await?)
    }

    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
    ) -> anyhow::Result<()> {
        guild_id
            .edit_member(&*self.http, user_id, EditMember::new().nickname(nickname))
            .await?;
        Ok(())
    }

    async fn respond(
        &self,
        interaction: &InteractionRef,
        content: &str,
        ephemeral: bool,
    ) -> anyhow::Result<()> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(ephemeral),
        );
        Ok(self
            .http
            .create_interaction_response(interaction.id, &interaction.token, &response, Vec::new())
            .await?)
    }
}
