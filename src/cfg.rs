use std::{env, fs, path::Path};

use anyhow::Context as _;
use serde::Deserialize;

const DEFAULT_DB_URL: &str = "worknook.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    /// Endpoint of the frontend revalidation webhook.
    pub revalidation_webhook_url: Option<String>,
    /// Sender address for outgoing mail.
    pub email_from: Option<String>,
    /// Write outgoing mail as JSON files into this directory instead of
    /// piping it through sendmail.
    pub email_json_dir: Option<String>,
    /// Recipient of moderation notifications.
    pub moderation_inbox: Option<String>,
}

impl Cfg {
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut cfg = match file {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(url) = env::var("WORKNOOK_REVALIDATION_WEBHOOK_URL") {
            cfg.revalidation_webhook_url = Some(url);
        }
        if let Ok(inbox) = env::var("WORKNOOK_MODERATION_INBOX") {
            cfg.moderation_inbox = Some(inbox);
        }
        Ok(cfg)
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
            revalidation_webhook_url: None,
            email_from: None,
            email_json_dir: None,
            moderation_inbox: None,
        }
    }
}
