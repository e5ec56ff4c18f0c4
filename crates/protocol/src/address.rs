//! Address derivation from raw device public keys.
//!
//! An address is `base58(prefix || blake2b160(key) || checksum)` where the
//! checksum is the first four bytes of a double SHA-256 over
//! `prefix || hash`.

use blake2::digest::consts::U20;
use blake2::{Blake2b, Digest};
use sha2::Sha256;

use crate::curve::{Curve, CurveFamily};
use crate::error::{ProtocolError, Result};

/// Length of a public key hash.
pub const PUBLIC_KEY_HASH_LENGTH: usize = 20;

/// Length of the base58check checksum.
pub const CHECKSUM_LENGTH: usize = 4;

const PREFIX_LENGTH: usize = 3;
const ADDRESS_BYTES_LENGTH: usize = PREFIX_LENGTH + PUBLIC_KEY_HASH_LENGTH + CHECKSUM_LENGTH;

type Blake2b160 = Blake2b<U20>;

/// Derive the textual address for a raw key returned by the device.
pub fn derive_address(curve: Curve, public_key: &[u8]) -> Result<String> {
    let hash = public_key_hash(curve, public_key)?;
    Ok(encode_address(curve.family(), &hash))
}

/// 20-byte BLAKE2b hash of the curve's canonical key encoding.
pub fn public_key_hash(curve: Curve, public_key: &[u8]) -> Result<[u8; PUBLIC_KEY_HASH_LENGTH]> {
    let key = extract_key(curve.family(), public_key)?;
    Ok(Blake2b160::digest(&key).into())
}

/// Base58check-encode a key hash with the family prefix.
pub fn encode_address(family: CurveFamily, hash: &[u8; PUBLIC_KEY_HASH_LENGTH]) -> String {
    let mut payload = Vec::with_capacity(ADDRESS_BYTES_LENGTH);
    payload.extend_from_slice(&family.prefix());
    payload.extend_from_slice(hash);
    let checksum = sha256x2(&payload);
    payload.extend_from_slice(&checksum[..CHECKSUM_LENGTH]);
    bs58::encode(payload).into_string()
}

/// Decode an address, verifying its prefix and checksum.
pub fn decode_address(address: &str) -> Result<(CurveFamily, [u8; PUBLIC_KEY_HASH_LENGTH])> {
    let bytes = bs58::decode(address).into_vec()?;
    if bytes.len() != ADDRESS_BYTES_LENGTH {
        return Err(ProtocolError::InvalidAddress(format!(
            "expected {ADDRESS_BYTES_LENGTH} bytes, got {}",
            bytes.len()
        )));
    }

    let (body, checksum) = bytes.split_at(PREFIX_LENGTH + PUBLIC_KEY_HASH_LENGTH);
    if sha256x2(body)[..CHECKSUM_LENGTH] != *checksum {
        return Err(ProtocolError::ChecksumMismatch);
    }

    let family = CurveFamily::from_prefix(&body[..PREFIX_LENGTH])
        .ok_or_else(|| ProtocolError::InvalidAddress(format!("unknown prefix in {address}")))?;

    let mut hash = [0u8; PUBLIC_KEY_HASH_LENGTH];
    hash.copy_from_slice(&body[PREFIX_LENGTH..]);
    Ok((family, hash))
}

/// Double SHA-256.
pub fn sha256x2(input: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(input)).into()
}

fn extract_key(family: CurveFamily, public_key: &[u8]) -> Result<Vec<u8>> {
    match (family, public_key.len()) {
        // Tag byte followed by the 32-byte key.
        (CurveFamily::Tz1, 33) => Ok(public_key[1..].to_vec()),
        (CurveFamily::Tz1, 32) => Ok(public_key.to_vec()),
        // Uncompressed point: compress from the parity of Y.
        (CurveFamily::Tz2 | CurveFamily::Tz3, 65) => {
            let mut key = Vec::with_capacity(33);
            key.push(0x02 + (public_key[64] & 0x01));
            key.extend_from_slice(&public_key[1..33]);
            Ok(key)
        }
        (CurveFamily::Tz2 | CurveFamily::Tz3, 33) => Ok(public_key.to_vec()),
        (family, len) => Err(ProtocolError::InvalidPublicKey(format!(
            "{len} bytes is not a valid {family} key"
        ))),
    }
}
