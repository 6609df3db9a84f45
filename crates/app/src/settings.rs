//! Application settings, read from `settings.toml` with optional
//! `GRUZZOLO_*` environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

/// Optional overrides for the ledger's account list and reserved labels.
/// Anything left out keeps its default.
#[derive(Debug, Deserialize, Default)]
pub struct Ledger {
    pub accounts: Option<Vec<String>>,
    pub income_category: Option<String>,
    pub transfer_out: Option<String>,
    pub transfer_in: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub ledger: Option<Ledger>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .add_source(Environment::with_prefix("GRUZZOLO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

impl Ledger {
    pub fn into_config(self) -> ledger::LedgerConfig {
        let mut config = ledger::LedgerConfig::default();
        if let Some(accounts) = self.accounts {
            config.accounts = accounts;
        }
        if let Some(label) = self.income_category {
            config.income_category = label;
        }
        if let Some(label) = self.transfer_out {
            config.transfer_out = label;
        }
        if let Some(label) = self.transfer_in {
            config.transfer_in = label;
        }
        config
    }
}
