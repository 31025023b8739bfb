//! Conversions from serenity models into the dispatcher's event types.

use serenity::all::{
    ActionRowComponent, ComponentInteractionDataKind, Interaction, Member, Message, UserId,
};

use crate::events::{
    Author, ComponentKind, InteractionEvent, MemberJoinEvent, Mention, MessageEvent,
};

pub fn message_event(msg: &Message, current_user: UserId) -> MessageEvent {
    let display_name = msg
        .member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .unwrap_or_else(|| msg.author.display_name().to_string());

    MessageEvent {
        id: msg.id,
        channel_id: msg.channel_id,
        guild_id: msg.guild_id,
        author: Author {
            id: msg.author.id,
            tag: msg.author.tag(),
            display_name,
            bot: msg.author.bot,
        },
        from_self: msg.author.id == current_user,
        content: msg.content.clone(),
        mentions: msg
            .mentions
            .iter()
            .map(|user| Mention {
                id: user.id,
                tag: user.tag(),
            })
            .collect(),
    }
}

pub fn member_join_event(member: &Member) -> MemberJoinEvent {
    MemberJoinEvent {
        guild_id: member.guild_id,
        user_id: member.user.id,
        tag: member.user.tag(),
        avatar_url: member.user.face(),
    }
}

/// `None` for interactions the dispatcher does not route (slash commands, autocomplete, pings)
pub fn interaction_event(interaction: &Interaction) -> Option<InteractionEvent> {
    match interaction {
        Interaction::Component(cmp) => {
            let (kind, values) = match &cmp.data.kind {
                ComponentInteractionDataKind::Button => (ComponentKind::Button, Vec::new()),
                ComponentInteractionDataKind::StringSelect { values } => {
                    (ComponentKind::SelectMenu, values.clone())
                }
                ComponentInteractionDataKind::UserSelect { values } => {
                    (ComponentKind::SelectMenu, to_strings(values))
                }
                ComponentInteractionDataKind::RoleSelect { values } => {
                    (ComponentKind::SelectMenu, to_strings(values))
                }
                ComponentInteractionDataKind::ChannelSelect { values } => {
                    (ComponentKind::SelectMenu, to_strings(values))
                }
                ComponentInteractionDataKind::MentionableSelect { values } => {
                    (ComponentKind::SelectMenu, to_strings(values))
                }
                _ => return None,
            };

            Some(InteractionEvent {
                id: cmp.id,
                token: cmp.token.clone(),
                kind,
                custom_id: cmp.data.custom_id.clone(),
                guild_id: cmp.guild_id,
                channel_id: cmp.channel_id,
                user_id: cmp.user.id,
                values,
            })
        }
        Interaction::Modal(modal) => {
            let values = modal
                .data
                .components
                .iter()
                .flat_map(|row| &row.components)
                .filter_map(|component| match component {
                    ActionRowComponent::InputText(input) => input.value.clone(),
                    _ => None,
                })
                .collect();

            Some(InteractionEvent {
                id: modal.id,
                token: modal.token.clone(),
                kind: ComponentKind::Modal,
                custom_id: modal.data.custom_id.clone(),
                guild_id: modal.guild_id,
                channel_id: modal.channel_id,
                user_id: modal.user.id,
                values,
            })
        }
        _ => None,
    }
}

fn to_strings<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
