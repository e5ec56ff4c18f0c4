//! Device status codes and their canonical messages.
//!
//! Every raw response ends in a two-byte big-endian status word. Codes
//! outside the table render as `Unknown Status Code: <decimal>`, and
//! failures that never produced a status word use [`CATCH_ALL`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status reported for transport or decoding failures without a device code.
pub const CATCH_ALL: u16 = 0xffff;

/// Known status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum LedgerError {
    U2FUnknown = 1,
    U2FBadRequest = 2,
    U2FConfigurationUnsupported = 3,
    U2FDeviceIneligible = 4,
    U2FTimeout = 5,
    Timeout = 14,
    NoErrors = 0x9000,
    DeviceIsBusy = 0x9001,
    ErrorDerivingKeys = 0x6802,
    ExecutionError = 0x6400,
    WrongLength = 0x6700,
    EmptyBuffer = 0x6982,
    OutputBufferTooSmall = 0x6983,
    DataIsInvalid = 0x6984,
    ConditionsNotSatisfied = 0x6985,
    TransactionRejected = 0x6986,
    BadKeyHandle = 0x6a80,
    InvalidP1P2 = 0x6b00,
    InstructionNotSupported = 0x6d00,
    AppDoesNotSeemToBeOpen = 0x6e00,
    UnknownError = 0x6f00,
    SignVerifyError = 0x6f01,
}

impl LedgerError {
    /// Every known code, in table order.
    pub const ALL: [LedgerError; 22] = [
        LedgerError::U2FUnknown,
        LedgerError::U2FBadRequest,
        LedgerError::U2FConfigurationUnsupported,
        LedgerError::U2FDeviceIneligible,
        LedgerError::U2FTimeout,
        LedgerError::Timeout,
        LedgerError::NoErrors,
        LedgerError::DeviceIsBusy,
        LedgerError::ErrorDerivingKeys,
        LedgerError::ExecutionError,
        LedgerError::WrongLength,
        LedgerError::EmptyBuffer,
        LedgerError::OutputBufferTooSmall,
        LedgerError::DataIsInvalid,
        LedgerError::ConditionsNotSatisfied,
        LedgerError::TransactionRejected,
        LedgerError::BadKeyHandle,
        LedgerError::InvalidP1P2,
        LedgerError::InstructionNotSupported,
        LedgerError::AppDoesNotSeemToBeOpen,
        LedgerError::UnknownError,
        LedgerError::SignVerifyError,
    ];

    /// Raw status word.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Known status for a raw word.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }

    /// Canonical message for this status.
    pub fn message(self) -> &'static str {
        match self {
            LedgerError::U2FUnknown => "U2F: Unknown",
            LedgerError::U2FBadRequest => "U2F: Bad request",
            LedgerError::U2FConfigurationUnsupported => "U2F: Configuration unsupported",
            LedgerError::U2FDeviceIneligible => "U2F: Device Ineligible",
            LedgerError::U2FTimeout => "U2F: Timeout",
            LedgerError::Timeout => "Timeout",
            LedgerError::NoErrors => "No errors",
            LedgerError::DeviceIsBusy => "Device is busy",
            LedgerError::ErrorDerivingKeys => "Error deriving keys",
            LedgerError::ExecutionError => "Execution Error",
            LedgerError::WrongLength => "Wrong Length",
            LedgerError::EmptyBuffer => "Empty Buffer",
            LedgerError::OutputBufferTooSmall => "Output buffer too small",
            LedgerError::DataIsInvalid => "Data is invalid",
            LedgerError::ConditionsNotSatisfied => "Conditions not satisfied",
            LedgerError::TransactionRejected => "Transaction rejected",
            LedgerError::BadKeyHandle => "Bad key handle",
            LedgerError::InvalidP1P2 => "Invalid P1/P2",
            LedgerError::InstructionNotSupported => "Instruction not supported",
            LedgerError::AppDoesNotSeemToBeOpen => "App does not seem to be open",
            LedgerError::UnknownError => "Unknown error",
            LedgerError::SignVerifyError => "Sign/verify error",
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Message for any status word, known or not.
pub fn error_code_to_string(code: u16) -> String {
    match LedgerError::from_code(code) {
        Some(known) => known.message().to_string(),
        None => format!("Unknown Status Code: {code}"),
    }
}

/// Whether a status word means success.
#[inline]
pub fn is_success(code: u16) -> bool {
    code == LedgerError::NoErrors.code()
}
