use log::Level;

/// Added to the raw scroll offset before testing section membership, so a
/// section activates while the fixed header still overlaps its top edge.
pub const SCROLL_BIAS: f64 = 100.0;

/// Scroll offset past which the header switches to its "scrolled" style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Webhook the contact form posts to. Baked in at compile time, e.g.
/// `PORTFOLIO_WEBHOOK_URL=https://discord.com/api/webhooks/... trunk build`.
pub fn get_webhook_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_WEBHOOK_URL").filter(|url| !url.trim().is_empty())
}

/// Absolute image URL the chat service shows as the bot's avatar. Left out of
/// the payload when unset.
pub fn get_webhook_avatar_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_WEBHOOK_AVATAR_URL").filter(|url| !url.trim().is_empty())
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
