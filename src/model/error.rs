//! Error types for catalog fetches and controller commands

use thiserror::Error;

/// Failure of a single catalog page fetch
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog API error: HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid catalog endpoint: {0}")]
    InvalidEndpoint(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Network
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::InvalidEndpoint(_) => {
                "The catalog endpoint is misconfigured. Check BOOK_EXPLORER_API_URL.".to_string()
            }
            _ => "An error occurred while fetching books. Please try again.".to_string(),
        }
    }
}

/// A command whose precondition does not hold; state is left untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Search term is empty")]
    EmptySearchTerm,

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("A page is already loading")]
    AlreadyLoading,

    #[error("Nothing loaded to continue from")]
    NothingToLoad,

    #[error("Item not in current results: {0}")]
    UnknownItem(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
}

/// Error surfaced to the renderer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CatalogError> for ErrorInfo {
    fn from(error: &CatalogError) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_network_kind() {
        let error = CatalogError::Status { status: 503 };
        let info = ErrorInfo::from(&error);
        assert_eq!(info.kind, ErrorKind::Network);
        assert!(info.message.contains("Please try again"));
    }

    #[test]
    fn misconfigured_endpoint_names_the_variable() {
        let error = CatalogError::InvalidEndpoint("not a url".to_string());
        assert!(error.user_message().contains("BOOK_EXPLORER_API_URL"));
    }

    #[test]
    fn command_errors_display() {
        assert_eq!(CommandError::EmptySearchTerm.to_string(), "Search term is empty");
        assert_eq!(
            CommandError::UnknownGenre("poetry".to_string()).to_string(),
            "Unknown genre: poetry"
        );
    }
}
