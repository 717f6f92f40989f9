use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketsError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("File is empty")]
    EmptyArchive,
    #[error("File contains no tickets")]
    NoTickets,
    #[error("Text '{input}' could not be parsed: {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },
    #[error("Text '{input}' could not be parsed: expected dd.MM.yy H:mm")]
    Malformed { input: String },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("no values to aggregate")]
    EmptyInput,
}

impl TicketsError {
    /// Archives without tickets are reported bare, not as failures.
    pub fn is_empty_archive(&self) -> bool {
        matches!(self, TicketsError::EmptyArchive | TicketsError::NoTickets)
    }
}

pub type Result<T> = std::result::Result<T, TicketsError>;
