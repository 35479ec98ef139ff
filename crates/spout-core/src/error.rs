use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Zookeeper port mismatch: server '{server}' uses port {port} but the first server uses {expected}")]
    ZkPortMismatch {
        server: String,
        port: u16,
        expected: u16,
    },

    #[error("Invalid Zookeeper server entry '{entry}': {reason}")]
    InvalidHostEntry { entry: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
