//! High-level operations of the Tezos application.
//!
//! [`TezosApp`] wraps a [`Transport`] and exposes one async method per
//! device command, for both firmware generations. Every method returns a
//! typed result or a [`ClientError`] carrying the status code and message.

use tezos_ledger_protocol::instructions::{p1, CLA_APP_INFO, INS_APP_INFO};
use tezos_ledger_protocol::magic::SIG_HASH_LENGTH;
use tezos_ledger_protocol::response::{
    decode_address, decode_all_watermarks, decode_app_info, decode_authorized_key, decode_git,
    decode_hmac, decode_legacy_version, decode_main_watermark, decode_public_key, decode_version,
    split_status,
};
use tezos_ledger_protocol::status::is_success;
use tezos_ledger_protocol::{
    derive_address, prepare_chunks, AddressInfo, AppInfo, AuthorizedKey, Curve, DerivationPath,
    Generation, GitInfo, HmacResult, Instruction, LedgerError, LegacyIns, LegacyVersionInfo,
    MessageKind, ModernIns, ProtocolError, SignatureInfo, VersionInfo, WatermarkState,
    CHUNK_SIZE,
};

use crate::config::{ClientConfig, DeviceConfig};
use crate::error::{ClientError, Result};
use crate::session::{LegacySession, ModernSession, SignExchange, SignRequest, SigningSession};
use crate::transport::Transport;

/// Client for the Tezos application.
#[derive(Debug)]
pub struct TezosApp<T> {
    transport: T,
    defaults: DeviceConfig,
}

impl<T: Transport> TezosApp<T> {
    /// Create a client using the built-in device defaults.
    pub fn new(transport: T) -> Self {
        Self::with_defaults(transport, DeviceConfig::default())
    }

    /// Create a client whose default path, curve and generation come from
    /// configuration.
    pub fn with_defaults(transport: T, defaults: DeviceConfig) -> Self {
        Self {
            transport,
            defaults,
        }
    }

    /// Create a client from a loaded configuration, rejecting it when
    /// invalid.
    pub fn from_config(transport: T, config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_defaults(transport, config.device.clone()))
    }

    /// Configured defaults.
    pub fn defaults(&self) -> &DeviceConfig {
        &self.defaults
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the underlying transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    // ------------------------------------------------------------------
    // Modern firmware
    // ------------------------------------------------------------------

    /// Application version and device state.
    pub async fn get_version(&mut self) -> Result<VersionInfo> {
        let body = self
            .command(Instruction::modern(ModernIns::GetVersion), 0, 0, &[])
            .await?;
        Ok(decode_version(&body)?)
    }

    /// Dashboard information about the running application.
    pub async fn get_app_info(&mut self) -> Result<AppInfo> {
        let body = self
            .exchange(CLA_APP_INFO, INS_APP_INFO, 0, 0, &[])
            .await?;
        Ok(decode_app_info(&body)?)
    }

    /// Public key and address for `path` without user interaction.
    pub async fn get_address(&mut self, path: &str, curve: Curve) -> Result<AddressInfo> {
        self.address(path, curve, p1::ONLY_RETRIEVE).await
    }

    /// Public key and address for `path`, confirmed on the device screen.
    pub async fn show_address(&mut self, path: &str, curve: Curve) -> Result<AddressInfo> {
        self.address(path, curve, p1::SHOW_ADDRESS_IN_DEVICE).await
    }

    /// Sign `message` with the key at `path`.
    pub async fn sign(
        &mut self,
        path: &str,
        curve: Curve,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        self.sign_with(ModernSession::sign(), path, curve, message, kind)
            .await
    }

    /// Sign a consensus message or delegation with the authorized baking key.
    pub async fn sign_baker(
        &mut self,
        path: &str,
        curve: Curve,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        self.sign_with(ModernSession::baker_sign(), path, curve, message, kind)
            .await
    }

    /// Authorize the key at `path` for baking.
    pub async fn authorize_baking(&mut self, path: &str, curve: Curve) -> Result<AddressInfo> {
        let path = DerivationPath::parse(path)?;
        let body = self
            .command(
                Instruction::modern(ModernIns::AuthorizeBaking),
                0,
                curve.as_byte(),
                &path.serialize(),
            )
            .await?;
        Ok(decode_public_key(&body, curve)?)
    }

    /// Remove the baking authorization.
    pub async fn deauthorize_baking(&mut self) -> Result<()> {
        self.command(Instruction::modern(ModernIns::DeauthorizeBaking), 0, 0, &[])
            .await?;
        Ok(())
    }

    /// Key currently authorized for baking, with its curve.
    pub async fn query_auth_key_with_curve(&mut self) -> Result<AuthorizedKey> {
        let body = self
            .command(
                Instruction::modern(ModernIns::QueryAuthKeyWithCurve),
                0,
                0,
                &[],
            )
            .await?;
        Ok(decode_authorized_key(&body, true)?)
    }

    // ------------------------------------------------------------------
    // Legacy firmware
    // ------------------------------------------------------------------

    /// Legacy version query.
    pub async fn legacy_get_version(&mut self) -> Result<LegacyVersionInfo> {
        let body = self
            .command(Instruction::legacy(LegacyIns::Version), 0, 0, &[])
            .await?;
        Ok(decode_legacy_version(&body)?)
    }

    /// Commit the firmware was built from.
    pub async fn legacy_get_git(&mut self) -> Result<GitInfo> {
        let body = self
            .command(Instruction::legacy(LegacyIns::Git), 0, 0, &[])
            .await?;
        Ok(decode_git(&body)?)
    }

    /// Public key for `path`; the address is derived on the host.
    pub async fn legacy_get_pubkey(&mut self, path: &str, curve: Curve) -> Result<AddressInfo> {
        self.legacy_pubkey(LegacyIns::GetPublicKey, path, curve).await
    }

    /// Public key for `path` after confirmation on the device.
    pub async fn legacy_prompt_pubkey(
        &mut self,
        path: &str,
        curve: Curve,
    ) -> Result<AddressInfo> {
        self.legacy_pubkey(LegacyIns::PromptPublicKey, path, curve)
            .await
    }

    /// Reset both high watermarks to `level`.
    pub async fn legacy_reset_high_watermark(&mut self, level: u32) -> Result<()> {
        self.command(
            Instruction::legacy(LegacyIns::Reset),
            0,
            0,
            &level.to_be_bytes(),
        )
        .await?;
        Ok(())
    }

    /// Main-chain high watermark.
    pub async fn legacy_get_high_watermark(&mut self) -> Result<WatermarkState> {
        let body = self
            .command(Instruction::legacy(LegacyIns::QueryMainHwm), 0, 0, &[])
            .await?;
        Ok(decode_main_watermark(&body)?)
    }

    /// Main and test high watermarks with the chain id.
    pub async fn legacy_get_all_watermark(&mut self) -> Result<WatermarkState> {
        let body = self
            .command(Instruction::legacy(LegacyIns::QueryAllHwm), 0, 0, &[])
            .await?;
        Ok(decode_all_watermarks(&body)?)
    }

    /// Authorize the key at `path` for baking on the legacy firmware.
    pub async fn legacy_authorize_baking(
        &mut self,
        path: &str,
        curve: Curve,
    ) -> Result<AddressInfo> {
        self.legacy_pubkey(LegacyIns::AuthorizeBaking, path, curve)
            .await
    }

    /// Remove the baking authorization on the legacy firmware.
    pub async fn legacy_deauthorize(&mut self) -> Result<()> {
        self.command(Instruction::legacy(LegacyIns::Deauthorize), 0, 0, &[])
            .await?;
        Ok(())
    }

    /// Authorized baking key path, without the curve.
    pub async fn legacy_query_auth_key(&mut self) -> Result<AuthorizedKey> {
        let body = self
            .command(Instruction::legacy(LegacyIns::QueryAuthKey), 0, 0, &[])
            .await?;
        Ok(decode_authorized_key(&body, false)?)
    }

    /// Authorized baking key path and curve.
    pub async fn legacy_query_auth_key_with_curve(&mut self) -> Result<AuthorizedKey> {
        let body = self
            .command(
                Instruction::legacy(LegacyIns::QueryAuthKeyWithCurve),
                0,
                0,
                &[],
            )
            .await?;
        Ok(decode_authorized_key(&body, true)?)
    }

    /// Authorize a baking key and set chain id and watermarks in one step.
    pub async fn legacy_setup(
        &mut self,
        path: &str,
        curve: Curve,
        chain_id: u32,
        main_level: u32,
        test_level: u32,
    ) -> Result<AddressInfo> {
        let path = DerivationPath::parse(path)?;
        let mut data = Vec::with_capacity(12 + 1 + 4 * path.len());
        data.extend_from_slice(&chain_id.to_be_bytes());
        data.extend_from_slice(&main_level.to_be_bytes());
        data.extend_from_slice(&test_level.to_be_bytes());
        data.extend_from_slice(&path.serialize());

        let body = self
            .command(
                Instruction::legacy(LegacyIns::Setup),
                0,
                curve.as_byte(),
                &data,
            )
            .await?;
        Ok(decode_public_key(&body, curve)?)
    }

    /// HMAC of `message` under the key at `path`.
    pub async fn legacy_hmac(
        &mut self,
        path: &str,
        curve: Curve,
        message: &[u8],
    ) -> Result<HmacResult> {
        let mut data = DerivationPath::parse(path)?.serialize();
        data.extend_from_slice(message);

        let body = self
            .command(
                Instruction::legacy(LegacyIns::Hmac),
                0,
                curve.as_byte(),
                &data,
            )
            .await?;
        Ok(decode_hmac(&body)?)
    }

    /// Legacy signing; the digest is not returned.
    pub async fn legacy_sign(
        &mut self,
        path: &str,
        curve: Curve,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        self.sign_with(LegacySession::sign(), path, curve, message, kind)
            .await
    }

    /// Legacy signing returning the digest with the signature.
    pub async fn legacy_sign_with_hash(
        &mut self,
        path: &str,
        curve: Curve,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        self.sign_with(LegacySession::sign_with_hash(), path, curve, message, kind)
            .await
    }

    /// Legacy signing of arbitrary data without parsing on the device.
    pub async fn legacy_sign_unsafe(
        &mut self,
        path: &str,
        curve: Curve,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        self.sign_with(LegacySession::sign_unsafe(), path, curve, message, kind)
            .await
    }

    // ------------------------------------------------------------------
    // Configured defaults
    // ------------------------------------------------------------------

    /// Address at the configured path and curve.
    pub async fn default_address(&mut self) -> Result<AddressInfo> {
        let DeviceConfig {
            generation,
            curve,
            path,
        } = self.defaults.clone();
        match generation {
            Generation::Modern => self.get_address(&path, curve).await,
            Generation::Legacy => self.legacy_get_pubkey(&path, curve).await,
        }
    }

    /// Sign with the configured path, curve and generation.
    ///
    /// The legacy generation uses the variant returning the digest so both
    /// generations yield the same result shape.
    pub async fn sign_default(
        &mut self,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        let DeviceConfig {
            generation,
            curve,
            path,
        } = self.defaults.clone();
        match generation {
            Generation::Modern => self.sign(&path, curve, message, kind).await,
            Generation::Legacy => {
                self.legacy_sign_with_hash(&path, curve, message, kind)
                    .await
            }
        }
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    async fn address(&mut self, path: &str, curve: Curve, p1: u8) -> Result<AddressInfo> {
        let path = DerivationPath::parse(path)?;
        let body = self
            .command(
                Instruction::modern(ModernIns::GetAddress),
                p1,
                curve.as_byte(),
                &path.serialize(),
            )
            .await?;
        let info = decode_address(&body, curve)?;
        tracing::info!(curve = %curve, "Retrieved address {}", info.address);
        Ok(info)
    }

    async fn legacy_pubkey(
        &mut self,
        ins: LegacyIns,
        path: &str,
        curve: Curve,
    ) -> Result<AddressInfo> {
        let path = DerivationPath::parse(path)?;
        let body = self
            .command(
                Instruction::legacy(ins),
                0,
                curve.as_byte(),
                &path.serialize(),
            )
            .await?;
        Ok(decode_public_key(&body, curve)?)
    }

    async fn sign_with<S: SigningSession>(
        &mut self,
        session: S,
        path: &str,
        curve: Curve,
        message: &[u8],
        kind: MessageKind,
    ) -> Result<SignatureInfo> {
        let path = DerivationPath::parse(path)?;
        let request = SignRequest {
            path: &path,
            curve,
            message,
            kind,
        };

        let ins = session.instruction().ins;
        let signature = SignExchange::new(session)
            .run(&mut self.transport, &request)
            .await?;
        tracing::info!(
            ins,
            curve = %curve,
            len = message.len(),
            "Signed {:?} message",
            kind
        );
        Ok(signature)
    }

    async fn command(
        &mut self,
        instruction: Instruction,
        p1: u8,
        p2: u8,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        self.exchange(instruction.cla, instruction.ins, p1, p2, data)
            .await
    }

    /// Single-frame exchange accepting only success.
    async fn exchange(&mut self, cla: u8, ins: u8, p1: u8, p2: u8, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() > CHUNK_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                size: data.len(),
                max: CHUNK_SIZE,
            }
            .into());
        }

        tracing::debug!(cla, ins, p1, p2, data = %hex::encode(data), "Sending command");
        let raw = self
            .transport
            .send(cla, ins, p1, p2, data, &[LedgerError::NoErrors.code()])
            .await?;

        let (body, status) = split_status(&raw)?;
        if !is_success(status) {
            return Err(ClientError::device(status));
        }
        Ok(body.to_vec())
    }
}

/// Frames a signing call would send, path first.
pub fn sign_get_chunks(path: &str, message: &[u8]) -> Result<Vec<Vec<u8>>> {
    let path = DerivationPath::parse(path)?;
    Ok(prepare_chunks(message, Some(&path.serialize())))
}

/// Address for a raw key, computed without the device.
pub fn public_key_to_address(public_key: &[u8], curve: Curve) -> Result<String> {
    Ok(derive_address(curve, public_key)?)
}

/// Digest the device signs for `message`.
pub fn sig_hash(message: &[u8], kind: MessageKind) -> Result<[u8; SIG_HASH_LENGTH]> {
    Ok(tezos_ledger_protocol::sig_hash(kind, message)?)
}
