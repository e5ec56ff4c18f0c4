//! # Tezos Ledger Protocol Library
//!
//! This crate provides the command/response codec spoken by the Tezos
//! application on a Ledger hardware signer.
//!
//! ## Overview
//!
//! The protocol crate is pure and synchronous. It never touches a transport;
//! it only turns requests into bytes and bytes into typed results:
//!
//! - **Derivation Paths**: BIP32 path parsing and wire serialization
//! - **Instruction Registry**: opcodes for the legacy and modern firmware
//! - **Chunked Framing**: splitting payloads into 250-byte frames
//! - **Response Decoding**: status word handling and per-command layouts
//! - **Address Codec**: base58check addresses from raw device keys
//! - **Magic Bytes**: message kind tags and the signed digest
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        High-level operations            │  ledger-tezos client
//! ├─────────────────────────────────────────┤
//! │   Magic byte  │  Path  │  Instruction   │  request preparation
//! ├─────────────────────────────────────────┤
//! │              Framing                    │  ≤250-byte chunks
//! ├─────────────────────────────────────────┤
//! │   Status word  │  Response layouts      │  decoding
//! ├─────────────────────────────────────────┤
//! │         Transport (USB/BLE/HID)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use tezos_ledger_protocol::{derive_address, prepare_chunks, Curve, DerivationPath, MessageKind};
//!
//! let path: DerivationPath = "m/44'/1729'/0'/0'".parse().unwrap();
//! let message = MessageKind::Operation.prepend_magic(&[0u8; 600]).unwrap();
//!
//! let chunks = prepare_chunks(&message, Some(&path.serialize()));
//! assert_eq!(chunks.len(), 4);
//!
//! let mut key = vec![0x02];
//! key.extend_from_slice(&[7u8; 32]);
//! let address = derive_address(Curve::Ed25519, &key).unwrap();
//! assert!(address.starts_with("tz1"));
//! ```
//!
//! ## Modules
//!
//! - [`path`]: derivation path parsing and serialization
//! - [`curve`]: curve selectors and address families
//! - [`instructions`]: class, opcodes and frame tags
//! - [`apdu`]: raw command encoding
//! - [`framing`]: chunked message framing
//! - [`magic`]: message kind tags and signing digest
//! - [`response`]: response layouts
//! - [`address`]: address derivation and decoding
//! - [`status`]: status codes and messages
//! - [`error`]: error types

pub mod address;
pub mod apdu;
pub mod curve;
pub mod error;
pub mod framing;
pub mod instructions;
pub mod magic;
pub mod path;
pub mod response;
pub mod status;

pub use address::{decode_address, derive_address, encode_address, public_key_hash};
pub use apdu::ApduCommand;
pub use curve::{Curve, CurveFamily};
pub use error::{ProtocolError, Result};
pub use framing::{prepare_chunks, Frame};
pub use instructions::{
    Generation, Instruction, LegacyIns, ModernIns, PayloadType, CHUNK_SIZE, CLA,
};
pub use magic::{sig_hash, MessageKind};
pub use path::{serialize_path, DerivationPath, DEFAULT_PATH, HARDENED};
pub use response::{
    AddressInfo, AppInfo, AuthorizedKey, GitInfo, HmacResult, LegacyVersionInfo, SignatureInfo,
    VersionInfo, WatermarkState,
};
pub use status::{error_code_to_string, LedgerError, CATCH_ALL};
