//! Instruction registry for both firmware generations.
//!
//! The legacy baking/wallet firmware uses a narrow opcode space and marks
//! the last frame of a chunked command by OR-ing `0x80` into P1. The modern
//! firmware uses a wider opcode space and tags every frame explicitly.

use serde::{Deserialize, Serialize};

/// Class byte of every Tezos application command.
pub const CLA: u8 = 0x80;

/// Class byte of the dashboard "get app info" command.
pub const CLA_APP_INFO: u8 = 0xb0;

/// Instruction byte of the dashboard "get app info" command.
pub const INS_APP_INFO: u8 = 0x01;

/// Maximum payload bytes carried by one frame.
pub const CHUNK_SIZE: usize = 250;

/// P1 values for address retrieval.
pub mod p1 {
    /// Return the key without user interaction.
    pub const ONLY_RETRIEVE: u8 = 0x00;
    /// Display the address on the device and wait for confirmation.
    pub const SHOW_ADDRESS_IN_DEVICE: u8 = 0x01;
}

/// Firmware protocol generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    /// Narrow opcode space, OR-flag last frame marking.
    Legacy,
    /// Wide opcode space, explicit frame tags.
    #[default]
    Modern,
}

/// Opcodes of the modern firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModernIns {
    GetVersion = 0x10,
    GetAddress = 0x11,
    Sign = 0x12,
    AuthorizeBaking = 0xa1,
    DeauthorizeBaking = 0xac,
    QueryAuthKeyWithCurve = 0xad,
    BakerSign = 0xaf,
}

/// Opcodes of the legacy firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LegacyIns {
    Version = 0x00,
    AuthorizeBaking = 0x01,
    GetPublicKey = 0x02,
    PromptPublicKey = 0x03,
    Sign = 0x04,
    SignUnsafe = 0x05,
    Reset = 0x06,
    QueryAuthKey = 0x07,
    QueryMainHwm = 0x08,
    Git = 0x09,
    Setup = 0x0a,
    QueryAllHwm = 0x0b,
    Deauthorize = 0x0c,
    QueryAuthKeyWithCurve = 0x0d,
    Hmac = 0x0e,
    SignWithHash = 0x0f,
}

/// A (class, opcode, generation) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub cla: u8,
    pub ins: u8,
    pub generation: Generation,
}

impl Instruction {
    /// Instruction in the modern opcode space.
    pub const fn modern(ins: ModernIns) -> Self {
        Self {
            cla: CLA,
            ins: ins as u8,
            generation: Generation::Modern,
        }
    }

    /// Instruction in the legacy opcode space.
    pub const fn legacy(ins: LegacyIns) -> Self {
        Self {
            cla: CLA,
            ins: ins as u8,
            generation: Generation::Legacy,
        }
    }

    /// Whether a successful signing response starts with the 32-byte digest.
    pub fn sends_hash(&self) -> bool {
        match self.generation {
            Generation::Modern => {
                self.ins == ModernIns::Sign as u8 || self.ins == ModernIns::BakerSign as u8
            }
            Generation::Legacy => self.ins == LegacyIns::SignWithHash as u8,
        }
    }
}

/// Position tag of a frame in a chunked exchange, sent as P1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PayloadType {
    Init = 0x00,
    Add = 0x01,
    Last = 0x02,
}

/// Bit OR-ed into a legacy P1 to mark the last frame.
pub const LEGACY_LAST_FLAG: u8 = 0x80;

impl PayloadType {
    /// P1 byte for the frame at `index` out of `total` frames.
    ///
    /// A single-frame exchange is tagged as the last frame.
    pub fn for_position(index: usize, total: usize) -> Self {
        if index + 1 == total {
            PayloadType::Last
        } else if index == 0 {
            PayloadType::Init
        } else {
            PayloadType::Add
        }
    }

    /// Modern P1 byte.
    #[inline]
    pub fn modern_p1(self) -> u8 {
        self as u8
    }

    /// Legacy P1 byte: INIT or ADD, with the last-frame flag OR-ed in.
    pub fn legacy_p1(index: usize, total: usize) -> u8 {
        let base = if index == 0 {
            PayloadType::Init as u8
        } else {
            PayloadType::Add as u8
        };
        if index + 1 == total {
            base | LEGACY_LAST_FLAG
        } else {
            base
        }
    }
}
