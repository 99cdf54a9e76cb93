use blockdb_core::domain::common::{
    BlockdbConfig, DatabaseConfig, DatabaseDialect, NetworkConfig,
};
use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "blockdb", version, about = "Read API over a node's blocks table")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub network: NetworkArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "db-dialect", env = "ARK_DB_DIALECT", default_value = "postgres")]
    pub dialect: DatabaseDialect,

    #[arg(id = "db_host", long = "db-host", env = "ARK_DB_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "db_port", long = "db-port", env = "ARK_DB_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-username", env = "ARK_DB_USERNAME", default_value = "ark")]
    pub username: String,

    #[arg(long = "db-password", env = "ARK_DB_PASSWORD", default_value = "password")]
    pub password: String,

    #[arg(long = "db-database", env = "ARK_DB_DATABASE", default_value = "ark_devnet")]
    pub name: String,

    /// SQLite file path, or `:memory:`.
    #[arg(long = "db-storage", env = "ARK_DB_STORAGE")]
    pub storage: Option<String>,

    #[arg(long = "db-logging", env = "ARK_DB_LOGGING")]
    pub logging: bool,

    #[arg(
        long = "db-max-connections",
        env = "ARK_DB_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

/// Devnet defaults.
#[derive(Debug, Clone, ClapArgs)]
pub struct NetworkArgs {
    #[arg(
        long = "nethash",
        env = "ARK_NETWORK_NETHASH",
        default_value = "578e820911f24e039733b45e4882b73e301f813a0d2c31330dafda84534ffa23"
    )]
    pub nethash: String,

    #[arg(long = "token", env = "ARK_NETWORK_TOKEN", default_value = "DARK")]
    pub token: String,

    #[arg(long = "symbol", env = "ARK_NETWORK_SYMBOL", default_value = "DѦ")]
    pub symbol: String,

    #[arg(
        long = "explorer",
        env = "ARK_NETWORK_EXPLORER",
        default_value = "https://dexplorer.ark.io"
    )]
    pub explorer: String,

    #[arg(long = "pub-key-hash", env = "ARK_NETWORK_PUB_KEY_HASH", default_value_t = 30)]
    pub pub_key_hash: u8,

    #[arg(
        long = "epoch",
        env = "ARK_NETWORK_EPOCH",
        default_value = "2017-03-21T13:00:00Z"
    )]
    pub epoch: DateTime<Utc>,

    #[arg(long = "blocktime", env = "ARK_NETWORK_BLOCKTIME", default_value_t = 8)]
    pub blocktime: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "api-host", env = "ARK_API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "api-port", env = "ARK_API_PORT", default_value_t = 4003)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:4003"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-level", env = "ARK_LOG_LEVEL", default_value = "debug")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<DatabaseArgs> for DatabaseConfig {
    fn from(args: DatabaseArgs) -> Self {
        Self {
            dialect: args.dialect,
            host: args.host,
            port: args.port,
            username: args.username,
            password: args.password,
            name: args.name,
            storage: args.storage,
            logging: args.logging,
            max_connections: args.max_connections,
        }
    }
}

impl From<NetworkArgs> for NetworkConfig {
    fn from(args: NetworkArgs) -> Self {
        Self {
            nethash: args.nethash,
            token: args.token,
            symbol: args.symbol,
            explorer: args.explorer,
            pub_key_hash: args.pub_key_hash,
            epoch: args.epoch,
            blocktime: args.blocktime,
        }
    }
}

impl From<Args> for BlockdbConfig {
    fn from(args: Args) -> Self {
        Self {
            database: args.db.into(),
            network: args.network.into(),
        }
    }
}
