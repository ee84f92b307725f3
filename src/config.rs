use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub search_url: String,
    pub search_user: String,
    pub search_password: String,
    pub search_timeout_secs: u64,
    pub command_prefix: String,
    pub status_message: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::build()
    }

    fn build() -> anyhow::Result<Self> {
        Ok(Config {
            discord_token: env::var("DISCORD_TOKEN")
                .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN must be set"))?,
            search_url: env::var("SEARCH_URL")
                .unwrap_or_else(|_| "https://localhost:9200".to_string()),
            search_user: env::var("SEARCH_USER").unwrap_or_else(|_| "elastic".to_string()),
            search_password: env::var("SEARCH_PASSWORD")
                .map_err(|_| anyhow::anyhow!("SEARCH_PASSWORD must be set"))?,
            search_timeout_secs: env::var("SEARCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            command_prefix: env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string()),
            status_message: env::var("STATUS_MESSAGE")
                .unwrap_or_else(|_| "Logging channels".to_string()),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"[REDACTED]")
            .field("search_url", &self.search_url)
            .field("search_user", &self.search_user)
            .field("search_password", &"[REDACTED]")
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("command_prefix", &self.command_prefix)
            .field("status_message", &self.status_message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_config_logic() {
        // 1. Missing required vars
        env::remove_var("DISCORD_TOKEN");
        env::remove_var("SEARCH_PASSWORD");
        let result = Config::build();
        assert!(result.is_err(), "Should fail when required vars are missing");

        // 2. Defaults
        env::set_var("DISCORD_TOKEN", "test_token");
        env::set_var("SEARCH_PASSWORD", "secret_pass");
        let config = Config::build().unwrap();
        assert_eq!(config.discord_token, "test_token");
        assert_eq!(config.search_url, "https://localhost:9200");
        assert_eq!(config.search_timeout_secs, 30);
        assert_eq!(config.command_prefix, "!");

        // 3. Debug redaction
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("test_token"));
        assert!(!debug_output.contains("secret_pass"));
        assert!(debug_output.contains("[REDACTED]"));

        // Cleanup
        env::remove_var("DISCORD_TOKEN");
        env::remove_var("SEARCH_PASSWORD");
    }
}
