//! Error types for the client crate.

use tezos_ledger_protocol::status::error_code_to_string;
use tezos_ledger_protocol::{LedgerError, ProtocolError, CATCH_ALL};
use thiserror::Error;

use crate::config::ConfigError;

/// Failure reported by a transport implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Device answered with a status outside the accepted list.
    #[error("device returned status {code:#06x}")]
    Status {
        /// Raw status word.
        code: u16,
    },

    /// Command could not be encoded for the link.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Link-level read or write failure.
    #[error("transport I/O failed: {0}")]
    Io(String),

    /// Device is no longer reachable.
    #[error("device disconnected")]
    Disconnected,
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::NotConnected
            | ErrorKind::ConnectionReset
            | ErrorKind::BrokenPipe
            | ErrorKind::UnexpectedEof => TransportError::Disconnected,
            _ => TransportError::Io(err.to_string()),
        }
    }
}

/// Client error type.
///
/// Every variant resolves to a return code and a message through
/// [`return_code`](Self::return_code) and
/// [`error_message`](Self::error_message). Failures that never produced a
/// device status report [`CATCH_ALL`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Device answered with a non-success status.
    #[error("{message} ({code:#06x})")]
    Device {
        /// Raw status word.
        code: u16,
        /// Canonical message, possibly augmented with device text.
        message: String,
    },

    /// Transport failed before a status was available.
    #[error("transport error: {0}")]
    Transport(String),

    /// Local validation or decoding failure.
    #[error(transparent)]
    Protocol(ProtocolError),

    /// Configuration rejected before any exchange.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Device error with the canonical message for `code`.
    pub fn device(code: u16) -> Self {
        ClientError::Device {
            code,
            message: error_code_to_string(code),
        }
    }

    /// Status word associated with this failure.
    pub fn return_code(&self) -> u16 {
        match self {
            ClientError::Device { code, .. } => *code,
            ClientError::Transport(_) | ClientError::Protocol(_) | ClientError::Config(_) => {
                CATCH_ALL
            }
        }
    }

    /// Human-readable message associated with this failure.
    pub fn error_message(&self) -> String {
        match self {
            ClientError::Device { message, .. } => message.clone(),
            ClientError::Transport(message) => message.clone(),
            ClientError::Protocol(err) => err.to_string(),
            ClientError::Config(err) => err.to_string(),
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status { code } => ClientError::device(code),
            other => ClientError::Transport(other.to_string()),
        }
    }
}

impl From<ProtocolError> for ClientError {
    fn from(err: ProtocolError) -> Self {
        match err {
            // The dashboard only defines format 1; anything else reads as busy.
            ProtocolError::UnknownFormat(_) => ClientError::Device {
                code: LedgerError::DeviceIsBusy.code(),
                message: err.to_string(),
            },
            other => ClientError::Protocol(other),
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
