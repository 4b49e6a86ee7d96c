use thiserror::Error;

use common::error::Error as GraphBenchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Channel sender failed: Receiver has been dropped.")]
    ChannelSendFailed,

    #[error("Background task failed: {0}")]
    TaskJoinFailed(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphBenchError),
}
