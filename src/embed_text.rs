use poise::serenity_prelude as serenity;
use serde::Serialize;
use tracing::info;

/// Fixed schema for a Discord embed, decoded once at the platform boundary.
///
/// Every field Discord may omit is an `Option`; the flattener below never has
/// to look inside a raw platform object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbedRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<EmbedFieldRecord>,
    pub footer_text: Option<String>,
    pub author_name: Option<String>,
    pub url: Option<String>,
    pub timestamp: Option<String>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFieldRecord {
    pub name: String,
    pub value: String,
}

impl From<&serenity::Embed> for EmbedRecord {
    fn from(embed: &serenity::Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            fields: embed
                .fields
                .iter()
                .map(|f| EmbedFieldRecord {
                    name: f.name.clone(),
                    value: f.value.clone(),
                })
                .collect(),
            footer_text: embed.footer.as_ref().map(|f| f.text.clone()),
            author_name: embed.author.as_ref().map(|a| a.name.clone()),
            url: embed.url.clone(),
            timestamp: embed.timestamp.map(|t| t.to_string()),
            thumbnail_url: embed.thumbnail.as_ref().map(|t| t.url.clone()),
            image_url: embed.image.as_ref().map(|i| i.url.clone()),
            video_url: embed.video.as_ref().map(|v| v.url.clone()),
        }
    }
}

impl EmbedRecord {
    /// One human-readable line per present field, in fixed priority order.
    /// An embed with nothing recognizable still yields a single fallback line
    /// carrying a raw dump, so no embed is ever silently dropped.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(title) = &self.title {
            lines.push(format!("📌 Title: {}", title));
        }
        if let Some(description) = &self.description {
            lines.push(format!("📝 Description: {}", description));
        }
        for field in &self.fields {
            lines.push(format!("🔹 {}: {}", field.name, field.value));
        }
        if let Some(footer) = &self.footer_text {
            lines.push(format!("🦶 Footer: {}", footer));
        }
        if let Some(author) = &self.author_name {
            lines.push(format!("👤 Author: {}", author));
        }
        if let Some(url) = &self.url {
            lines.push(format!("🔗 URL: {}", url));
        }
        if let Some(timestamp) = &self.timestamp {
            lines.push(format!("⏱ Timestamp: {}", timestamp));
        }
        if let Some(thumbnail) = &self.thumbnail_url {
            lines.push(format!("🖼 Thumbnail: {}", thumbnail));
        }
        if let Some(image) = &self.image_url {
            lines.push(format!("🖼 Image: {}", image));
        }
        if let Some(video) = &self.video_url {
            lines.push(format!("🎥 Video: {}", video));
        }

        if lines.is_empty() {
            lines.push(format!(
                "[⚠️ Embed object with no common fields]\n{}",
                self.raw_dump()
            ));
        }

        lines
    }

    fn raw_dump(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// Flatten a message's embeds into one text blob, one block per embed in
/// input order, blocks separated by a blank line.
pub fn flatten_embeds(records: &[EmbedRecord]) -> String {
    let mut blocks = Vec::with_capacity(records.len());
    for record in records {
        info!("🔍 Raw embed data: {}", record.raw_dump());
        blocks.push(record.lines().join("\n"));
    }
    blocks.join("\n\n")
}
