//! Transport contract and in-process implementations.
//!
//! A transport delivers one command and returns the raw response
//! (`body || status`). Statuses outside the caller's accepted list are
//! reported as [`TransportError::Status`]. Exchanges are serialized by
//! `&mut self`: one transport carries one exchange at a time.

use std::collections::VecDeque;
use std::sync::Arc;

use tezos_ledger_protocol::response::STATUS_LENGTH;
use tezos_ledger_protocol::ApduCommand;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::TransportError;

/// Byte-level link to the device.
#[allow(async_fn_in_trait)]
pub trait Transport: Send {
    /// Send one command and return the raw response.
    ///
    /// # Arguments
    /// * `cla`, `ins`, `p1`, `p2` - Command header bytes.
    /// * `data` - Command payload, at most 255 bytes.
    /// * `accepted` - Status words the caller handles itself.
    async fn send(
        &mut self,
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: &[u8],
        accepted: &[u16],
    ) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport> Transport for &mut T {
    async fn send(
        &mut self,
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: &[u8],
        accepted: &[u16],
    ) -> Result<Vec<u8>, TransportError> {
        (**self).send(cla, ins, p1, p2, data, accepted).await
    }
}

/// A transport shared between tasks.
///
/// Holding the guard from [`lock`](Self::lock) for the whole exchange keeps
/// the frames of two multi-frame commands from interleaving.
#[derive(Debug)]
pub struct SharedTransport<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> SharedTransport<T> {
    /// Wrap a transport for sharing.
    pub fn new(transport: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(transport)),
        }
    }

    /// Wait for exclusive use of the transport.
    pub async fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().await
    }
}

/// In-memory transport replaying queued responses.
///
/// Every command is recorded as decoded from its wire encoding, so tests
/// can assert on the exact frames sent. An exhausted script reports [`TransportError::Disconnected`].
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: VecDeque<Result<Vec<u8>, TransportError>>,
    sent: Vec<ApduCommand>,
}

impl ScriptedTransport {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response made of `body` followed by `status`.
    pub fn push_response(&mut self, body: &[u8], status: u16) {
        let mut raw = body.to_vec();
        raw.extend_from_slice(&status.to_be_bytes());
        self.responses.push_back(Ok(raw));
    }

    /// Queue raw response bytes verbatim.
    pub fn push_raw(&mut self, raw: Vec<u8>) {
        self.responses.push_back(Ok(raw));
    }

    /// Queue a transport failure.
    pub fn push_error(&mut self, err: TransportError) {
        self.responses.push_back(Err(err));
    }

    /// Builder form of [`push_response`](Self::push_response).
    pub fn with_response(mut self, body: &[u8], status: u16) -> Self {
        self.push_response(body, status);
        self
    }

    /// Commands sent so far, in order.
    pub fn sent(&self) -> &[ApduCommand] {
        &self.sent
    }

    /// Responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(
        &mut self,
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: &[u8],
        accepted: &[u16],
    ) -> Result<Vec<u8>, TransportError> {
        let wire = ApduCommand::new(cla, ins, p1, p2, data.to_vec())
            .encode()
            .map_err(|e| TransportError::InvalidCommand(e.to_string()))?;
        let command =
            ApduCommand::decode(&wire).map_err(|e| TransportError::InvalidCommand(e.to_string()))?;
        self.sent.push(command);

        let raw = self
            .responses
            .pop_front()
            .unwrap_or(Err(TransportError::Disconnected))?;

        if raw.len() >= STATUS_LENGTH {
            let code = u16::from_be_bytes([raw[raw.len() - 2], raw[raw.len() - 1]]);
            if !accepted.contains(&code) {
                return Err(TransportError::Status { code });
            }
        }

        Ok(raw)
    }
}
