use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use serde::Serialize;

use crate::embed_text::{flatten_embeds, EmbedRecord};

/// Placeholder stored when a message has no text and no embeds (e.g. a pure
/// attachment or sticker message).
pub const NO_TEXT_PLACEHOLDER: &str = "[No text content]";

/// One record per logged message, serialized as-is into the channel's index.
/// Built fresh for each message and handed off; the backend's copy is the
/// durable one.
#[derive(Debug, Clone, Serialize)]
pub struct LogDocument {
    pub log_id: String,
    pub user: String,
    pub user_id: String,
    pub channel: String,
    pub channel_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl LogDocument {
    /// Assemble the document for a message. The timestamp is the acquisition
    /// instant, not the message's own timestamp.
    pub fn from_message(message: &serenity::Message, channel_name: &str) -> Self {
        Self {
            log_id: message.id.to_string(),
            user: message.author.name.clone(),
            user_id: message.author.id.to_string(),
            channel: channel_name.to_string(),
            channel_id: message.channel_id.to_string(),
            text: resolve_text(message),
            timestamp: Utc::now(),
        }
    }
}

/// Pick the text to store for a message.
///
/// Messages without embeds store their raw content (or the placeholder when
/// that is empty). Messages with embeds store the flattened embed text only;
/// any raw content alongside the embeds is discarded.
pub fn resolve_text(message: &serenity::Message) -> String {
    if message.embeds.is_empty() {
        if message.content.is_empty() {
            NO_TEXT_PLACEHOLDER.to_string()
        } else {
            message.content.clone()
        }
    } else {
        let records: Vec<EmbedRecord> = message.embeds.iter().map(EmbedRecord::from).collect();
        flatten_embeds(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn mock_message(content: &str) -> serenity::Message {
        let mut msg = serenity::Message::default();
        msg.id = serenity::MessageId::new(42);
        msg.channel_id = serenity::ChannelId::new(7);
        msg.author.id = serenity::UserId::new(1);
        msg.author.name = "alice".to_string();
        msg.content = content.to_string();
        msg
    }

    fn mock_embed(title: &str) -> serenity::Embed {
        serde_json::from_value(serde_json::json!({
            "type": "rich",
            "title": title,
            "fields": [],
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_message_gets_placeholder() {
        let msg = mock_message("");
        assert_eq!(resolve_text(&msg), NO_TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_plain_text_is_kept() {
        let msg = mock_message("hello");
        assert_eq!(resolve_text(&msg), "hello");
    }

    #[test]
    fn test_embeds_replace_raw_text() {
        let mut msg = mock_message("this text is discarded");
        msg.embeds = vec![mock_embed("X")];
        assert_eq!(resolve_text(&msg), "📌 Title: X");
    }

    #[test]
    fn test_document_fields_come_from_message() {
        let msg = mock_message("hello");
        let doc = LogDocument::from_message(&msg, "General-Chat");
        assert_eq!(doc.log_id, "42");
        assert_eq!(doc.user, "alice");
        assert_eq!(doc.user_id, "1");
        assert_eq!(doc.channel, "General-Chat");
        assert_eq!(doc.channel_id, "7");
        assert_eq!(doc.text, "hello");
    }

    #[test]
    fn test_document_serializes_with_expected_keys() {
        let msg = mock_message("hello");
        let doc = LogDocument::from_message(&msg, "general");
        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "log_id",
            "user",
            "user_id",
            "channel",
            "channel_id",
            "text",
            "timestamp",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
    }
}
