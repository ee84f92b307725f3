use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use crate::document::LogDocument;
use crate::index_name::sanitize_index_name;
use crate::Data;

/// Bot-authored messages (our own included) are never logged.
pub fn should_log(message: &serenity::Message) -> bool {
    !message.author.bot
}

/// Log one incoming message into its channel's index.
///
/// Runs to completion for every non-bot message: backend failures are logged
/// and swallowed here so command dispatch in the framework is never affected.
/// A lost write stays lost; there is no retry path.
pub async fn handle_message(
    ctx: &serenity::Context,
    new_message: &serenity::Message,
    data: &Data,
) {
    if !should_log(new_message) {
        info!("🤖 Ignoring bot message from {}", new_message.author.name);
        return;
    }

    let channel_name = match new_message.channel_id.name(ctx).await {
        Ok(name) => name,
        // DMs and uncached channels have no resolvable name; fall back to the id.
        Err(_) => new_message.channel_id.to_string(),
    };

    info!(
        "📩 Message received from {} in {}: {}",
        new_message.author.name, channel_name, new_message.content
    );

    let index_name = sanitize_index_name(&channel_name);
    let document = LogDocument::from_message(new_message, &channel_name);
    info!("📝 Log data: {:?}", document);

    if !data.connected {
        warn!("⚠️ Skipping log: search backend is not connected");
        return;
    }

    if let Err(e) = data.search.ensure_index(&index_name).await {
        error!("⚠️ Failed to check/create index {}: {}", index_name, e);
    }

    if let Err(e) = data.search.write_document(&index_name, &document).await {
        error!("❌ Failed to send log to {}: {}", index_name, e);
    }
}
