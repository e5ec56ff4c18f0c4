//! Chunked signing exchanges.
//!
//! A signing exchange walks `Idle → Framing → Streaming → Completed` or
//! ends in `Failed`. The message is prefixed with its magic byte, split into
//! frames behind the serialized path, and the frames are sent strictly in
//! order with one response awaited per frame. Any non-success status aborts
//! the exchange immediately; only the last frame's response carries the
//! signature.

use tezos_ledger_protocol::response::{ascii_lossy, decode_signature, split_status};
use tezos_ledger_protocol::status::is_success;
use tezos_ledger_protocol::{
    prepare_chunks, Curve, DerivationPath, Frame, Instruction, LedgerError, LegacyIns,
    MessageKind, ModernIns, PayloadType, SignatureInfo,
};

use crate::error::{ClientError, Result};
use crate::transport::Transport;

/// Statuses a signing frame may return without the transport failing.
///
/// The error statuses among them carry a device explanation in the body.
pub const SIGN_ACCEPTED_STATUSES: [u16; 4] = [
    LedgerError::NoErrors as u16,
    LedgerError::DataIsInvalid as u16,
    LedgerError::BadKeyHandle as u16,
    LedgerError::SignVerifyError as u16,
];

/// Lifecycle of one signing exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing prepared yet.
    Idle,
    /// Message prefixed and split into frames.
    Framing,
    /// Frames are being sent.
    Streaming {
        /// Frames acknowledged so far.
        sent: usize,
        /// Frames in the exchange.
        total: usize,
    },
    /// Signature received.
    Completed,
    /// Exchange aborted; partial material was discarded.
    Failed,
}

/// Generation-specific parts of a signing exchange.
pub trait SigningSession {
    /// Instruction sent with every frame.
    fn instruction(&self) -> Instruction;

    /// P1 byte for frame `index` of `total`.
    fn frame_p1(&self, index: usize, total: usize) -> u8;
}

/// Modern firmware: every frame tagged INIT, ADD or LAST.
#[derive(Debug, Clone, Copy)]
pub struct ModernSession {
    ins: ModernIns,
}

impl ModernSession {
    /// Regular signing.
    pub fn sign() -> Self {
        Self { ins: ModernIns::Sign }
    }

    /// Baking-key signing.
    pub fn baker_sign() -> Self {
        Self {
            ins: ModernIns::BakerSign,
        }
    }
}

impl SigningSession for ModernSession {
    fn instruction(&self) -> Instruction {
        Instruction::modern(self.ins)
    }

    fn frame_p1(&self, index: usize, total: usize) -> u8 {
        PayloadType::for_position(index, total).modern_p1()
    }
}

/// Legacy firmware: INIT or ADD with the last-frame flag OR-ed in.
#[derive(Debug, Clone, Copy)]
pub struct LegacySession {
    ins: LegacyIns,
}

impl LegacySession {
    /// Signing without the digest in the response.
    pub fn sign() -> Self {
        Self { ins: LegacyIns::Sign }
    }

    /// Signing with the digest in the response.
    pub fn sign_with_hash() -> Self {
        Self {
            ins: LegacyIns::SignWithHash,
        }
    }

    /// Signing of arbitrary unparsed data.
    pub fn sign_unsafe() -> Self {
        Self {
            ins: LegacyIns::SignUnsafe,
        }
    }
}

impl SigningSession for LegacySession {
    fn instruction(&self) -> Instruction {
        Instruction::legacy(self.ins)
    }

    fn frame_p1(&self, index: usize, total: usize) -> u8 {
        PayloadType::legacy_p1(index, total)
    }
}

/// Inputs of one signing exchange.
#[derive(Debug, Clone, Copy)]
pub struct SignRequest<'a> {
    pub path: &'a DerivationPath,
    pub curve: Curve,
    pub message: &'a [u8],
    pub kind: MessageKind,
}

/// One signing exchange driven through a [`SigningSession`].
#[derive(Debug)]
pub struct SignExchange<S> {
    session: S,
    state: SessionState,
}

impl<S: SigningSession> SignExchange<S> {
    /// Create an idle exchange.
    pub fn new(session: S) -> Self {
        Self {
            session,
            state: SessionState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Prefix the message and build the frames. No I/O is performed.
    pub fn prepare(&mut self, request: &SignRequest<'_>) -> Result<Vec<Frame>> {
        let prefixed = match request.kind.prepend_magic(request.message) {
            Ok(prefixed) => prefixed,
            Err(err) => return Err(self.fail(err.into())),
        };

        let path = request.path.serialize();
        let chunks = prepare_chunks(&prefixed, Some(&path));
        let total = chunks.len();

        let frames = chunks
            .into_iter()
            .enumerate()
            .map(|(index, payload)| {
                let p2 = if index == 0 { request.curve.as_byte() } else { 0 };
                Frame::new(self.session.frame_p1(index, total), p2, payload)
            })
            .collect();

        self.transition(SessionState::Framing);
        Ok(frames)
    }

    /// Run the whole exchange over `transport`.
    pub async fn run<T: Transport>(
        &mut self,
        transport: &mut T,
        request: &SignRequest<'_>,
    ) -> Result<SignatureInfo> {
        let frames = self.prepare(request)?;
        let instruction = self.session.instruction();
        let total = frames.len();

        self.transition(SessionState::Streaming { sent: 0, total });

        let mut last_body = Vec::new();
        for (index, frame) in frames.iter().enumerate() {
            tracing::debug!(
                ins = instruction.ins,
                p1 = frame.p1,
                p2 = frame.p2,
                len = frame.payload.len(),
                "Sending frame {}/{}",
                index + 1,
                total
            );

            let raw = match transport
                .send(
                    instruction.cla,
                    instruction.ins,
                    frame.p1,
                    frame.p2,
                    &frame.payload,
                    &SIGN_ACCEPTED_STATUSES,
                )
                .await
            {
                Ok(raw) => raw,
                Err(err) => return Err(self.fail(err.into())),
            };

            let (body, status) = match split_status(&raw) {
                Ok(parts) => parts,
                Err(err) => return Err(self.fail(err.into())),
            };

            if !is_success(status) {
                return Err(self.fail(status_error(status, body)));
            }

            self.transition(SessionState::Streaming {
                sent: index + 1,
                total,
            });
            last_body = body.to_vec();
        }

        match decode_signature(&last_body, instruction.sends_hash()) {
            Ok(signature) => {
                self.transition(SessionState::Completed);
                Ok(signature)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    fn transition(&mut self, next: SessionState) {
        tracing::trace!(from = ?self.state, to = ?next, "Sign exchange state change");
        self.state = next;
    }

    fn fail(&mut self, err: ClientError) -> ClientError {
        tracing::debug!(
            code = err.return_code(),
            "Sign exchange failed: {}",
            err.error_message()
        );
        self.transition(SessionState::Failed);
        err
    }
}

/// Device error for a failed frame, appending the device explanation for
/// statuses that carry one.
fn status_error(status: u16, body: &[u8]) -> ClientError {
    let explained = [
        LedgerError::BadKeyHandle.code(),
        LedgerError::DataIsInvalid.code(),
        LedgerError::SignVerifyError.code(),
    ];

    match ClientError::device(status) {
        ClientError::Device { code, message } if explained.contains(&code) => {
            ClientError::Device {
                code,
                message: format!("{message} : {}", ascii_lossy(body)),
            }
        }
        other => other,
    }
}
