//! # Tezos Ledger Client
//!
//! Async client for the Tezos application running on a Ledger device.
//!
//! The client drives the command/response codec from
//! [`tezos_ledger_protocol`] over any [`Transport`]. It handles both
//! firmware generations, streams large payloads as ordered frames, and
//! reports every failure as a [`ClientError`] with the device status code
//! and its canonical message.
//!
//! ## Example Usage
//!
//! ```rust
//! use tezos_ledger_client::{ScriptedTransport, TezosApp};
//! use tezos_ledger_protocol::{Curve, MessageKind};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut transport = ScriptedTransport::new();
//! transport.push_response(&[0u8; 96], 0x9000); // path frame
//! transport.push_response(&[0u8; 96], 0x9000); // message frame
//!
//! let mut app = TezosApp::new(transport);
//! let signed = app
//!     .sign("m/44'/1729'/0'/0'", Curve::Ed25519, b"\x00\x01", MessageKind::Operation)
//!     .await
//!     .unwrap();
//! assert_eq!(signed.signature.len(), 64);
//! # }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod transport;

pub use app::{public_key_to_address, sig_hash, sign_get_chunks, TezosApp};
pub use config::{ClientConfig, ConfigError, DeviceConfig};
pub use error::{ClientError, Result, TransportError};
pub use session::{LegacySession, ModernSession, SessionState, SignExchange, SigningSession};
pub use transport::{ScriptedTransport, SharedTransport, Transport};
