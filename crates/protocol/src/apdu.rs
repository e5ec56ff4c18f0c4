//! APDU command encoding.
//!
//! # Command Format
//!
//! - 1 byte: class
//! - 1 byte: instruction
//! - 1 byte: P1
//! - 1 byte: P2
//! - 1 byte: data length (Lc)
//! - N bytes: data

use crate::error::{ProtocolError, Result};

/// Command header size: class, instruction, P1, P2 and Lc.
pub const APDU_HEADER_SIZE: usize = 5;

/// Largest data field a short APDU can carry.
pub const MAX_APDU_DATA: usize = u8::MAX as usize;

/// A single command sent to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduCommand {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    pub data: Vec<u8>,
}

impl ApduCommand {
    /// Create a command.
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8, data: Vec<u8>) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data,
        }
    }

    /// Encode as `cla ins p1 p2 lc data`.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > MAX_APDU_DATA {
            return Err(ProtocolError::PayloadTooLarge {
                size: self.data.len(),
                max: MAX_APDU_DATA,
            });
        }

        let mut out = Vec::with_capacity(APDU_HEADER_SIZE + self.data.len());
        out.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        out.push(self.data.len() as u8);
        out.extend_from_slice(&self.data);
        Ok(out)
    }

    /// Decode a command previously produced by [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < APDU_HEADER_SIZE {
            return Err(ProtocolError::MessageTooShort {
                expected: APDU_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let lc = bytes[4] as usize;
        let data = &bytes[APDU_HEADER_SIZE..];
        if data.len() != lc {
            return Err(ProtocolError::MalformedResponse(format!(
                "apdu length byte says {lc}, found {} data bytes",
                data.len()
            )));
        }

        Ok(Self::new(bytes[0], bytes[1], bytes[2], bytes[3], data.to_vec()))
    }
}
