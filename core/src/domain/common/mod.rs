use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

pub mod entities;

#[derive(Clone, Debug)]
pub struct BlockdbConfig {
    pub database: DatabaseConfig,
    pub network: NetworkConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatabaseDialect {
    #[default]
    Postgres,
    Sqlite,
}

impl FromStr for DatabaseDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DatabaseDialect::Postgres),
            "sqlite" => Ok(DatabaseDialect::Sqlite),
            other => Err(format!("unsupported database dialect `{other}`")),
        }
    }
}

impl fmt::Display for DatabaseDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDialect::Postgres => f.write_str("postgres"),
            DatabaseDialect::Sqlite => f.write_str("sqlite"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub dialect: DatabaseDialect,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    /// SQLite file path, or `:memory:`.
    pub storage: Option<String>,
    /// Enables sqlx statement logging.
    pub logging: bool,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        match self.dialect {
            DatabaseDialect::Postgres => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
            DatabaseDialect::Sqlite => match self.storage.as_deref() {
                None | Some(":memory:") => "sqlite::memory:".to_string(),
                Some(path) => format!("sqlite://{path}?mode=rwc"),
            },
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.dialect == DatabaseDialect::Sqlite
            && matches!(self.storage.as_deref(), None | Some(":memory:"))
    }
}

#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub nethash: String,
    pub token: String,
    pub symbol: String,
    pub explorer: String,
    pub pub_key_hash: u8,
    pub epoch: DateTime<Utc>,
    /// Seconds between two forging slots.
    pub blocktime: u32,
}

impl NetworkConfig {
    /// Seconds elapsed since the network epoch, the unit block timestamps are stored in.
    pub fn slot_time(&self, now: DateTime<Utc>) -> i64 {
        (now - self.epoch).num_seconds()
    }
}
