//! Configuration for the sachet server.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. Command-line flags in `main.rs`
//! take precedence over both.

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 4001;
const DEFAULT_CONFIG_DIR: &str = ".config/sachet/data";
const DEV_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "sachet.db";

/// Get the address the HTTP server listens on.
///
/// Priority:
/// 1. `SACHET_BIND` env variable if set and parsable as a socket address
/// 2. `0.0.0.0:4001` as fallback
pub fn get_bind_addr() -> SocketAddr {
    let default = || SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT));

    match std::env::var("SACHET_BIND") {
        Ok(bind) => bind.parse().unwrap_or_else(|_| {
            tracing::warn!(bind = %bind, "Ignoring unparsable SACHET_BIND");
            default()
        }),
        Err(_) => default(),
    }
}

/// Get the data directory for persistence.
///
/// Priority:
/// 1. `SACHET_DATA_DIR` env variable if set
/// 2. `$HOME/.config/sachet/data` if HOME is set
/// 3. `./data` as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SACHET_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Get the SQLite database file path.
///
/// Priority:
/// 1. `SACHET_DATABASE_PATH` env variable if set
/// 2. `sachet.db` inside [`get_data_dir`]
pub fn get_database_path() -> PathBuf {
    if let Ok(path) = std::env::var("SACHET_DATABASE_PATH") {
        return PathBuf::from(path);
    }

    get_data_dir().join(DATABASE_FILE)
}
