// src/error.rs
//
// Errors that can stop the app from starting. Everything that goes wrong
// per-datagram is handled inside the listener and never becomes one of these.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid listen address {host}:{port}")]
    InvalidAddress { host: String, port: u16 },

    #[error("failed to bind OSC listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to start OSC listener thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("failed to create OSC sender: {0}")]
    Sender(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, DisplayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_sources_are_kept() {
        let err = DisplayError::Sender(io::Error::new(io::ErrorKind::AddrInUse, "in use"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "in use");
        assert_eq!(err.to_string(), "failed to create OSC sender: in use");

        let err = DisplayError::Bind {
            addr: "0.0.0.0:9999".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "taken"),
        };
        assert!(err.source().is_some());
    }
}
