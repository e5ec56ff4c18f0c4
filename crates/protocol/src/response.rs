//! Response decoding.
//!
//! Every raw response is `body || status` where the status is a two-byte
//! big-endian word. [`split_status`] separates the two; the `decode_*`
//! functions parse a body whose status has already been checked.

use serde::Serialize;

use crate::address::derive_address;
use crate::curve::Curve;
use crate::error::{ProtocolError, Result};
use crate::magic::SIG_HASH_LENGTH;
use crate::path::format_path_words;

/// Size of the trailing status word.
pub const STATUS_LENGTH: usize = 2;

/// App info format understood by this decoder.
pub const APP_INFO_FORMAT_ID: u8 = 1;

/// App info flag masks.
pub mod app_flags {
    pub const RECOVERY: u8 = 1;
    pub const SIGNED_MCU_CODE: u8 = 2;
    pub const ONBOARDED: u8 = 4;
    pub const PIN_VALIDATED: u8 = 128;
}

/// Split a raw response into its body and status word.
pub fn split_status(response: &[u8]) -> Result<(&[u8], u16)> {
    if response.len() < STATUS_LENGTH {
        return Err(ProtocolError::MessageTooShort {
            expected: STATUS_LENGTH,
            actual: response.len(),
        });
    }
    let (body, status) = response.split_at(response.len() - STATUS_LENGTH);
    Ok((body, u16::from_be_bytes([status[0], status[1]])))
}

/// Application version reported by the modern firmware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub test_mode: bool,
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub device_locked: bool,
    /// Target id as lowercase hex, `"0"` when absent.
    pub target_id: String,
}

/// Application version reported by the legacy firmware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyVersionInfo {
    /// Whether the baking application (rather than the wallet) answered.
    pub baking: bool,
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

/// Commit the firmware was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitInfo {
    pub commit_hash: String,
}

/// Dashboard information about the running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub app_name: String,
    pub app_version: String,
    pub flag_len: u8,
    pub flags_value: u8,
    pub flag_recovery: bool,
    pub flag_signed_mcu_code: bool,
    pub flag_onboarded: bool,
    pub flag_pin_validated: bool,
}

/// A public key and its textual address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressInfo {
    #[serde(serialize_with = "hex::serde::serialize")]
    pub public_key: Vec<u8>,
    pub address: String,
}

/// Result of a completed signing exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureInfo {
    /// Digest the device signed; all zeros when the command does not return it.
    #[serde(serialize_with = "hex::serde::serialize")]
    pub hash: [u8; SIG_HASH_LENGTH],
    #[serde(serialize_with = "hex::serde::serialize")]
    pub signature: Vec<u8>,
}

/// Device high-watermark counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WatermarkState {
    pub main: u32,
    pub test: Option<u32>,
    pub chain_id: Option<u32>,
}

/// Key currently authorized for baking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizedKey {
    /// Absent for the legacy query that does not report the curve.
    pub curve: Option<Curve>,
    pub path: Vec<u32>,
}

impl AuthorizedKey {
    /// Path rendered as `m/44'/1729'/...`.
    pub fn path_string(&self) -> String {
        format_path_words(&self.path)
    }
}

/// Output of the legacy HMAC command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HmacResult {
    #[serde(serialize_with = "hex::serde::serialize")]
    pub hmac: Vec<u8>,
}

/// Decode a modern version body.
pub fn decode_version(body: &[u8]) -> Result<VersionInfo> {
    require(body, 5)?;

    let target_id = match body.get(5..9) {
        Some(id) => format!("{:x}", u32::from_be_bytes([id[0], id[1], id[2], id[3]])),
        None => "0".to_string(),
    };

    Ok(VersionInfo {
        test_mode: body[0] != 0,
        major: body[1],
        minor: body[2],
        patch: body[3],
        device_locked: body[4] == 1,
        target_id,
    })
}

/// Decode a legacy version body.
pub fn decode_legacy_version(body: &[u8]) -> Result<LegacyVersionInfo> {
    require(body, 4)?;
    Ok(LegacyVersionInfo {
        baking: body[0] == 1,
        major: body[1],
        minor: body[2],
        patch: body[3],
    })
}

/// Decode a legacy git body, trimming the trailing NUL.
pub fn decode_git(body: &[u8]) -> Result<GitInfo> {
    let end = body.iter().position(|&b| b == 0).unwrap_or(body.len());
    Ok(GitInfo {
        commit_hash: ascii(&body[..end])?,
    })
}

/// Decode a dashboard app info body.
pub fn decode_app_info(body: &[u8]) -> Result<AppInfo> {
    require(body, 1)?;
    if body[0] != APP_INFO_FORMAT_ID {
        return Err(ProtocolError::UnknownFormat(body[0]));
    }

    let mut reader = Reader::new(&body[1..]);
    let app_name = ascii(reader.length_prefixed()?)?;
    let app_version = ascii(reader.length_prefixed()?)?;
    let flag_len = reader.byte()?;
    let flags_value = reader.byte()?;

    Ok(AppInfo {
        app_name,
        app_version,
        flag_len,
        flags_value,
        flag_recovery: flags_value & app_flags::RECOVERY != 0,
        flag_signed_mcu_code: flags_value & app_flags::SIGNED_MCU_CODE != 0,
        flag_onboarded: flags_value & app_flags::ONBOARDED != 0,
        flag_pin_validated: flags_value & app_flags::PIN_VALIDATED != 0,
    })
}

/// Decode a get-address body.
///
/// Two layouts exist: a length-prefixed key followed by the ascii address,
/// or a fixed-length key followed by the address. The first byte tells them
/// apart because a key length (33 or 65) never equals a key tag byte. When
/// the device sends no address text, it is derived from the key.
pub fn decode_address(body: &[u8], curve: Curve) -> Result<AddressInfo> {
    require(body, 1)?;

    let prefixed = matches!(body[0], 33 | 65) && body.len() > body[0] as usize;
    let (public_key, rest) = if prefixed {
        let len = body[0] as usize;
        (&body[1..1 + len], &body[1 + len..])
    } else {
        let len = curve.public_key_len();
        require(body, len)?;
        body.split_at(len)
    };

    let address = if rest.is_empty() {
        derive_address(curve, public_key)?
    } else {
        ascii(rest)?
    };

    Ok(AddressInfo {
        public_key: public_key.to_vec(),
        address,
    })
}

/// Decode a body holding only a length-prefixed key, deriving the address.
///
/// Used by the legacy public key, setup and authorize commands.
pub fn decode_public_key(body: &[u8], curve: Curve) -> Result<AddressInfo> {
    let mut reader = Reader::new(body);
    let public_key = reader.length_prefixed()?;
    Ok(AddressInfo {
        public_key: public_key.to_vec(),
        address: derive_address(curve, public_key)?,
    })
}

/// Decode a signing body.
///
/// With `with_hash` the body is `digest(32) || signature`; otherwise the
/// whole body is the signature and the digest is all zeros.
pub fn decode_signature(body: &[u8], with_hash: bool) -> Result<SignatureInfo> {
    let mut hash = [0u8; SIG_HASH_LENGTH];
    let signature = if with_hash {
        require(body, SIG_HASH_LENGTH + 1)?;
        hash.copy_from_slice(&body[..SIG_HASH_LENGTH]);
        &body[SIG_HASH_LENGTH..]
    } else {
        require(body, 1)?;
        body
    };

    Ok(SignatureInfo {
        hash,
        signature: signature.to_vec(),
    })
}

/// Decode the main high watermark.
pub fn decode_main_watermark(body: &[u8]) -> Result<WatermarkState> {
    let mut reader = Reader::new(body);
    Ok(WatermarkState {
        main: reader.u32()?,
        test: None,
        chain_id: None,
    })
}

/// Decode the main and test watermarks with the chain id.
pub fn decode_all_watermarks(body: &[u8]) -> Result<WatermarkState> {
    let mut reader = Reader::new(body);
    Ok(WatermarkState {
        main: reader.u32()?,
        test: Some(reader.u32()?),
        chain_id: Some(reader.u32()?),
    })
}

/// Decode an authorized-key query body.
pub fn decode_authorized_key(body: &[u8], with_curve: bool) -> Result<AuthorizedKey> {
    let mut reader = Reader::new(body);
    let curve = if with_curve {
        Some(Curve::try_from(reader.byte()?)?)
    } else {
        None
    };

    let count = reader.byte()?;
    let path = (0..count)
        .map(|_| reader.u32())
        .collect::<Result<Vec<_>>>()?;

    Ok(AuthorizedKey { curve, path })
}

/// Decode a legacy HMAC body.
pub fn decode_hmac(body: &[u8]) -> Result<HmacResult> {
    require(body, 1)?;
    Ok(HmacResult {
        hmac: body.to_vec(),
    })
}

/// Render a body as ascii, replacing non-ascii bytes.
pub fn ascii_lossy(body: &[u8]) -> String {
    body.iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

fn ascii(bytes: &[u8]) -> Result<String> {
    if !bytes.is_ascii() {
        return Err(ProtocolError::MalformedResponse(format!(
            "expected ascii text, got {}",
            hex::encode(bytes)
        )));
    }
    Ok(bytes.iter().map(|&b| b as char).collect())
}

fn require(body: &[u8], expected: usize) -> Result<()> {
    if body.len() < expected {
        return Err(ProtocolError::MessageTooShort {
            expected,
            actual: body.len(),
        });
    }
    Ok(())
}

/// Cursor over a response body.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos + len;
        let slice = self.data.get(self.pos..end).ok_or(ProtocolError::MessageTooShort {
            expected: end,
            actual: self.data.len(),
        })?;
        self.pos = end;
        Ok(slice)
    }

    fn byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn length_prefixed(&mut self) -> Result<&'a [u8]> {
        let len = self.byte()? as usize;
        self.take(len)
    }
}
