//! BIP32 derivation paths.
//!
//! A path is written `m/44'/1729'/0'/0'` and always carries 2 or 4
//! components after the root. Every component is hardened regardless of
//! whether the apostrophe suffix is present.
//!
//! # Wire Format
//!
//! - 1 byte: component count
//! - 4 bytes per component: big-endian index with the top bit set

use std::fmt;
use std::str::FromStr;

use crate::error::{ProtocolError, Result};

/// Bit marking a hardened derivation index.
pub const HARDENED: u32 = 0x8000_0000;

/// Default Tezos account path.
pub const DEFAULT_PATH: &str = "m/44'/1729'/0'/0'";

/// A validated derivation path holding hardened index words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    words: Vec<u32>,
}

impl DerivationPath {
    /// Parse a textual path such as `m/44'/1729'/0'/0'`.
    pub fn parse(path: &str) -> Result<Self> {
        if !path.starts_with('m') {
            return Err(ProtocolError::PathMissingRoot);
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != 3 && parts.len() != 5 {
            return Err(ProtocolError::PathLength(parts.len().saturating_sub(1)));
        }

        let words = parts[1..]
            .iter()
            .map(|part| parse_component(part))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { words })
    }

    /// The hardened index words, in order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of components after the root.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the path has no components.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Serialize to `[count][be-u32]*count`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 4 * self.words.len());
        out.push(self.words.len() as u8);
        for word in &self.words {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        Self {
            words: vec![HARDENED | 44, HARDENED | 1729, HARDENED, HARDENED],
        }
    }
}

impl FromStr for DerivationPath {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_path_words(&self.words))
    }
}

/// Serialize a textual path in one step.
pub fn serialize_path(path: &str) -> Result<Vec<u8>> {
    Ok(DerivationPath::parse(path)?.serialize())
}

/// Render raw index words as read back from the device.
///
/// Hardened words render with a trailing apostrophe; others render bare.
pub fn format_path_words(words: &[u32]) -> String {
    let mut out = String::from("m");
    for word in words {
        if word & HARDENED != 0 {
            out.push_str(&format!("/{}'", word & !HARDENED));
        } else {
            out.push_str(&format!("/{word}"));
        }
    }
    out
}

fn parse_component(part: &str) -> Result<u32> {
    let digits = part.strip_suffix('\'').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::PathComponentNotNumber(part.to_string()));
    }

    // An all-digit string that overflows u64 is certainly past the limit.
    let value: u64 = digits.parse().unwrap_or(u64::MAX);
    if value >= u64::from(HARDENED) {
        return Err(ProtocolError::PathComponentHardened(value));
    }

    Ok(HARDENED | value as u32)
}
