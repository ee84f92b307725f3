pub mod commands;
pub mod config;
pub mod document;
pub mod embed_text;
pub mod handler;
pub mod index_name;
pub mod search;

/// Custom data passed to the event handler and all commands
pub struct Data {
    pub config: config::Config,
    pub search: search::SearchClient,
    /// Result of the startup ping; `false` means degraded mode where backend
    /// calls are skipped but the Discord connection keeps running.
    pub connected: bool,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
