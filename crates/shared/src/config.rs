use std::env;

/// Sink credentials, environment-sourced. Every value is optional here:
/// a missing value only fails the sink that needs it, at publish time, so a
/// catalog fetch still happens (and a dry run works with nothing set).
#[derive(Debug, Clone)]
pub struct Config {
    pub slack_webhook_url: Option<String>,
    pub notion_token: Option<String>,
    pub notion_database_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self {
            slack_webhook_url: env::var("SLACK_WEBHOOK_URL").ok(),
            notion_token: env::var("NOTION_TOKEN").ok(),
            notion_database_id: env::var("NOTION_DATABASE_ID").ok(),
        }
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/leetcode-daily/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("leetcode-daily").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                if dotenvy::from_path(&home_path).is_ok() {
                    return;
                }
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
