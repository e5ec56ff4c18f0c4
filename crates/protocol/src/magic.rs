//! Magic bytes identifying the kind of message being signed.
//!
//! The device refuses to sign a message unless its first byte names the
//! message kind. Consensus messages need their magic byte inferred from
//! the payload, because the byte differs between the older and newer
//! consensus protocols.
//!
//! # Inspected Offsets
//!
//! - endorsement: operation tag at byte 36, after the 4-byte chain id and
//!   the 32-byte branch
//! - block header: fitness version at byte 90, after chain id (4), level (4),
//!   proto (1), predecessor (32), timestamp (8), validation pass (1),
//!   operations hash (32), fitness length (4) and first fitness element
//!   length (4)

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Emmy block header.
pub const MAGIC_BLOCK: u8 = 0x01;
/// Emmy endorsement.
pub const MAGIC_ENDORSEMENT: u8 = 0x02;
/// Generic operation, also used for baker delegations.
pub const MAGIC_OPERATION: u8 = 0x03;
/// Packed Michelson expression.
pub const MAGIC_MICHELSON: u8 = 0x05;
/// Tenderbake block header.
pub const MAGIC_TENDERBAKE_BLOCK: u8 = 0x11;
/// Tenderbake preendorsement.
pub const MAGIC_PREENDORSEMENT: u8 = 0x12;
/// Tenderbake endorsement.
pub const MAGIC_TENDERBAKE_ENDORSEMENT: u8 = 0x13;

/// Offset of the operation tag in an endorsement.
pub const ENDORSEMENT_TAG_OFFSET: usize = 36;

/// Offset of the fitness version byte in a block header.
pub const FITNESS_VERSION_OFFSET: usize = 90;

/// Length of the digest the device signs.
pub const SIG_HASH_LENGTH: usize = 32;

const TAG_EMMY_ENDORSEMENT: u8 = 0;
const TAG_PREENDORSEMENT: u8 = 20;
const TAG_ENDORSEMENT: u8 = 21;

type Blake2b256 = Blake2b<U32>;

/// Kind of message handed to a signing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Manager operation (transfer, origination and so on).
    #[default]
    Operation,
    /// Consensus block header.
    Block,
    /// Consensus endorsement or preendorsement.
    Endorsement,
    /// Packed Michelson data.
    Michelson,
    /// Baker delegation.
    Delegation,
}

impl MessageKind {
    /// Magic byte for a message of this kind.
    pub fn magic_byte(self, message: &[u8]) -> Result<u8> {
        match self {
            MessageKind::Operation | MessageKind::Delegation => Ok(MAGIC_OPERATION),
            MessageKind::Michelson => Ok(MAGIC_MICHELSON),
            MessageKind::Endorsement => {
                match byte_at(message, ENDORSEMENT_TAG_OFFSET)? {
                    TAG_EMMY_ENDORSEMENT => Ok(MAGIC_ENDORSEMENT),
                    TAG_PREENDORSEMENT => Ok(MAGIC_PREENDORSEMENT),
                    TAG_ENDORSEMENT => Ok(MAGIC_TENDERBAKE_ENDORSEMENT),
                    other => Err(ProtocolError::UnknownEndorsementTag(other)),
                }
            }
            MessageKind::Block => {
                if byte_at(message, FITNESS_VERSION_OFFSET)? >= 2 {
                    Ok(MAGIC_TENDERBAKE_BLOCK)
                } else {
                    Ok(MAGIC_BLOCK)
                }
            }
        }
    }

    /// `magic || message`, as sent to the device.
    pub fn prepend_magic(self, message: &[u8]) -> Result<Vec<u8>> {
        let magic = self.magic_byte(message)?;
        let mut out = Vec::with_capacity(1 + message.len());
        out.push(magic);
        out.extend_from_slice(message);
        Ok(out)
    }
}

/// BLAKE2b-256 of `magic || message`, the digest the device signs.
pub fn sig_hash(kind: MessageKind, message: &[u8]) -> Result<[u8; SIG_HASH_LENGTH]> {
    let prefixed = kind.prepend_magic(message)?;
    Ok(Blake2b256::digest(&prefixed).into())
}

fn byte_at(message: &[u8], offset: usize) -> Result<u8> {
    message
        .get(offset)
        .copied()
        .ok_or(ProtocolError::MessageTooShort {
            expected: offset + 1,
            actual: message.len(),
        })
}
