//! Runtime settings for stockroomd.
//!
//! Precedence, highest first: environment, `stockroom.toml` (or the file named
//! by `STOCKROOM_CONFIG`), built-in defaults. A missing default file is fine;
//! a missing file named explicitly is an error.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8010
//!
//! [database]
//! url = "sqlite:stockroom.db?mode=rwc"
//!
//! [logging]
//! filter = "stockroomd=debug"
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_FILE: &str = "stockroom.toml";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8010;
const DEFAULT_DATABASE_URL: &str = "sqlite:stockroom.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "stockroomd=info,stockroom=info,tower_http=debug";

/// Resolved settings the daemon runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen: SocketAddr,
    pub database_url: String,
    pub log_filter: String,
}

/// On-disk shape of `stockroom.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    server: FileServer,
    database: FileDatabase,
    logging: FileLogging,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileServer {
    host: Option<IpAddr>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileDatabase {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileLogging {
    filter: Option<String>,
}

/// Reasons stockroomd refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{key}={value:?} is not an IP address")]
    Host {
        key: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{key}={value:?} is not a TCP port")]
    Port {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("STOCKROOM_BIND={value:?} is not an ip:port address")]
    Bind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("port 0 would bind a random port")]
    ZeroPort,
    #[error("database url {0:?} is not a sqlite: url")]
    Database(String),
}

impl Config {
    /// Read the config file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unreadable or malformed file, an
    /// unparseable override, port 0, or a non-SQLite database URL.
    pub fn load() -> Result<Self, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();
        let file = match env("STOCKROOM_CONFIG") {
            Some(path) => read_file(Path::new(&path))?,
            None => read_optional_file(Path::new(DEFAULT_FILE))?,
        };
        Self::resolve(file, env)
    }

    fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = match env("STOCKROOM_HOST") {
            Some(value) => value.parse().map_err(|source| ConfigError::Host {
                key: "STOCKROOM_HOST",
                value,
                source,
            })?,
            None => file.server.host.unwrap_or(DEFAULT_HOST),
        };
        let port = match env("STOCKROOM_PORT") {
            Some(value) => value.parse().map_err(|source| ConfigError::Port {
                key: "STOCKROOM_PORT",
                value,
                source,
            })?,
            None => file.server.port.unwrap_or(DEFAULT_PORT),
        };
        let listen = match env("STOCKROOM_BIND") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::Bind { value, source })?,
            None => SocketAddr::new(host, port),
        };
        if listen.port() == 0 {
            return Err(ConfigError::ZeroPort);
        }

        let database_url = env("STOCKROOM_DATABASE_URL")
            .or(file.database.url)
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::Database(database_url));
        }

        let log_filter = env("RUST_LOG")
            .or_else(|| env("STOCKROOM_LOG"))
            .or(file.logging.filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            listen,
            database_url,
            log_filter,
        })
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_file(path, &content)
}

fn read_optional_file(path: &Path) -> Result<FileConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_file(path, &content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_file(path: &Path, content: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
