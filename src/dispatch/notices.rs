use crate::{
    chat::{Notice, NoticeButton, NoticeField},
    config, constant,
    events::MemberJoinEvent,
};

const RULES_COLOR: u32 = 0xff0000;

pub fn welcome(config: &config::Discord, member: &MemberJoinEvent) -> Notice {
    Notice {
        title: format!("Welcome {} to our server! 🎉", member.tag),
        description: "Thanks for joining us! We hope you enjoy your time here.".to_string(),
        color: config.embed_color,
        thumbnail: (!member.avatar_url.is_empty()).then(|| member.avatar_url.clone()),
        fields: Vec::new(),
        // The button only works when there is somewhere to post the rules
        button: config.rules_channel().map(|_| NoticeButton {
            custom_id: constant::component::RULES_BUTTON.to_string(),
            label: "Rules".to_string(),
        }),
    }
}

pub fn rules(config: &config::Discord) -> Notice {
    Notice {
        title: "Server Rules".to_string(),
        description: "Here are the rules of our server:".to_string(),
        color: RULES_COLOR,
        thumbnail: None,
        fields: config
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| NoticeField {
                name: format!("Rule {}", i + 1),
                value: rule.clone(),
                inline: false,
            })
            .collect(),
        button: None,
    }
}
