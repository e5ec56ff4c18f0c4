//! Signing curves and their address families.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Curve selector sent as P2 on the first frame of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Curve {
    /// Ed25519 with SLIP-10 derivation.
    #[default]
    Ed25519Slip10 = 0x00,
    /// secp256k1.
    Secp256k1 = 0x01,
    /// secp256r1 (P-256).
    Secp256r1 = 0x02,
    /// Ed25519 with BIP32-Ed25519 derivation.
    Ed25519 = 0x03,
}

/// Curves that share an address prefix and key extraction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    /// `tz1` addresses.
    Tz1,
    /// `tz2` addresses.
    Tz2,
    /// `tz3` addresses.
    Tz3,
}

impl Curve {
    /// All curves, in selector order.
    pub const ALL: [Curve; 4] = [
        Curve::Ed25519Slip10,
        Curve::Secp256k1,
        Curve::Secp256r1,
        Curve::Ed25519,
    ];

    /// The wire selector byte.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Address family for keys on this curve.
    pub fn family(self) -> CurveFamily {
        match self {
            Curve::Ed25519Slip10 | Curve::Ed25519 => CurveFamily::Tz1,
            Curve::Secp256k1 => CurveFamily::Tz2,
            Curve::Secp256r1 => CurveFamily::Tz3,
        }
    }

    /// Raw public key length as returned by the device.
    pub fn public_key_len(self) -> usize {
        match self.family() {
            CurveFamily::Tz1 => 33,
            CurveFamily::Tz2 | CurveFamily::Tz3 => 65,
        }
    }

    /// Name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Ed25519Slip10 => "ed25519-slip10",
            Curve::Secp256k1 => "secp256k1",
            Curve::Secp256r1 => "secp256r1",
            Curve::Ed25519 => "ed25519",
        }
    }

    /// Look up a curve by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl CurveFamily {
    /// Three-byte base58check prefix producing the family's text prefix.
    pub fn prefix(self) -> [u8; 3] {
        match self {
            CurveFamily::Tz1 => [0x06, 0xa1, 0x9f],
            CurveFamily::Tz2 => [0x06, 0xa1, 0xa1],
            CurveFamily::Tz3 => [0x06, 0xa1, 0xa4],
        }
    }

    /// Family whose binary prefix matches, if any.
    pub fn from_prefix(prefix: &[u8]) -> Option<Self> {
        [CurveFamily::Tz1, CurveFamily::Tz2, CurveFamily::Tz3]
            .into_iter()
            .find(|f| f.prefix() == prefix)
    }

    /// Text prefix of addresses in this family.
    pub fn as_str(self) -> &'static str {
        match self {
            CurveFamily::Tz1 => "tz1",
            CurveFamily::Tz2 => "tz2",
            CurveFamily::Tz3 => "tz3",
        }
    }
}

impl TryFrom<u8> for Curve {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Curve::Ed25519Slip10),
            0x01 => Ok(Curve::Secp256k1),
            0x02 => Ok(Curve::Secp256r1),
            0x03 => Ok(Curve::Ed25519),
            other => Err(ProtocolError::UnsupportedCurve(other)),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
