use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string. Override with DATABASE_URL.
    pub database_url: String,
    /// Listen address (default 0.0.0.0:8080). Override with BIND_ADDR.
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL").unwrap_or_else(|| "sqlite://hivemind.db?mode=rwc".to_owned());
        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_owned());
        let max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS={v} is not a number"))?,
            None => 16,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
