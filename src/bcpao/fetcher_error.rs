// fetcher_error.rs
use thiserror::Error;

/// Everything that can go wrong while talking to the appraiser API.
///
/// `NoResults` and `Ambiguous` are kept as separate variants so callers can
/// tell "not found" apart from "needs disambiguation".
#[derive(Debug, Error)]
pub enum BcpaoError {
    #[error("Request to {url} failed with HTTP {status}")]
    RemoteRequest { url: String, status: u16 },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("Could not find any accounts associated with the address '{address}'")]
    NoResults { address: String },

    #[error("Found multiple accounts associated with the address '{address}': {accounts:?}")]
    Ambiguous { address: String, accounts: Vec<u64> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BcpaoError {
    pub(crate) fn malformed(url: impl ToString, message: impl ToString) -> Self {
        BcpaoError::MalformedResponse {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// True for the two address-search outcomes that are not transport or shape failures.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            BcpaoError::NoResults { .. } | BcpaoError::Ambiguous { .. }
        )
    }
}
