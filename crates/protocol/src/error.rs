//! Error types for the protocol crate.

use thiserror::Error;

/// Protocol error type covering every local validation and decoding failure.
///
/// None of these involve the device: they are raised before a command is
/// sent or while a response body is being parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    // Path errors
    /// Path does not begin with the `m` root marker.
    #[error("Path should start with \"m\" (e.g \"m/44'/1729'/0'/0'\")")]
    PathMissingRoot,

    /// Path has a component count other than 2 or 4.
    #[error("Invalid path: expected 2 or 4 components, got {0}")]
    PathLength(usize),

    /// A path component is not a decimal number.
    #[error("Invalid path: {0:?} is not a number")]
    PathComponentNotNumber(String),

    /// A path component already has the hardened bit set.
    #[error("Incorrect child value {0} (bigger or equal to 0x80000000)")]
    PathComponentHardened(u64),

    // Key and address errors
    /// Byte value does not name a known curve.
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(u8),

    /// Public key has the wrong shape for its curve.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Address text could not be decoded.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Address checksum does not match its payload.
    #[error("address checksum mismatch")]
    ChecksumMismatch,

    // Response errors
    /// Response body does not match the expected layout.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Buffer is shorter than the layout requires.
    #[error("message too short: expected at least {expected} bytes, got {actual}")]
    MessageTooShort {
        /// Minimum number of bytes required.
        expected: usize,
        /// Number of bytes present.
        actual: usize,
    },

    /// App info response uses a format id other than 1.
    #[error("response format ID not recognized")]
    UnknownFormat(u8),

    // Message classification errors
    /// Endorsement message carries an unknown operation tag.
    #[error("unknown endorsement tag: {0}")]
    UnknownEndorsementTag(u8),

    // Size errors
    /// Payload exceeds what a single command can carry.
    #[error("payload too large: {size} bytes exceeds maximum of {max} bytes")]
    PayloadTooLarge {
        /// Actual payload size.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },
}

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

impl From<bs58::decode::Error> for ProtocolError {
    fn from(err: bs58::decode::Error) -> Self {
        ProtocolError::InvalidAddress(err.to_string())
    }
}
