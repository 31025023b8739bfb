/// custom ids of components handled inline by the dispatcher
pub mod component {
    pub const RULES_BUTTON: &str = "rules_button";
}

/// names of the built-in text commands
pub mod commands {
    pub const PING: &str = "ping";
    pub const AFK: &str = "afk";
    pub const HELP: &str = "help";
}

/// user-facing text
pub mod text {
    pub const COMMAND_FAILED: &str = "Command execution failed.";
    pub const NO_AFK_REASON: &str = "No reason given";
    pub const RULES_SENT: &str = "Rules sent.";
    pub const AFK_NICKNAME_PREFIX: &str = "[AFK] ";
}
