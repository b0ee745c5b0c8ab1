#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

/// Bot authorization link used when `WEREWOLF_BOT_INVITE_URL` is unset at build time.
pub const DEFAULT_INVITE_URL: &str =
    "https://discord.com/api/oauth2/authorize?client_id=YOUR_CLIENT_ID&permissions=8&scope=bot%20applications.commands";

/// Embedded verbatim into the hero call-to-action.
pub fn invite_url() -> &'static str {
    match option_env!("WEREWOLF_BOT_INVITE_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_INVITE_URL,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
