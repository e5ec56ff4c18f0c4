//! Integration tests for the Tezos application client.
//!
//! These tests drive [`TezosApp`] against a scripted device and verify:
//! - Frame layout of chunked signing for both firmware generations
//! - Status mapping for rejected and failed exchanges
//! - Decoding of every command's response
//! - Local validation happening before any I/O

use tezos_ledger_client::{
    ClientConfig, ClientError, ScriptedTransport, SharedTransport, TezosApp, TransportError,
};
use tezos_ledger_protocol::{Curve, Generation, MessageKind};

const DEFAULT_PATH_BYTES: [u8; 17] = [
    0x04, 0x80, 0x00, 0x00, 0x2c, 0x80, 0x00, 0x06, 0xc1, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00,
    0x00, 0x00,
];

const PATH: &str = "m/44'/1729'/0'/0'";

/// Compressed Ed25519 key as the device reports it (tag byte first).
fn ed_key() -> Vec<u8> {
    let mut key = vec![0x02];
    key.extend(0x01..=0x20u8);
    key
}

/// Uncompressed secp256k1 key with an odd Y coordinate.
fn secp_key() -> Vec<u8> {
    let mut key = vec![0x04];
    key.extend(0x20..=0x3fu8);
    key.extend(0x40..=0x5fu8);
    key
}

fn length_prefixed(key: &[u8]) -> Vec<u8> {
    let mut body = vec![key.len() as u8];
    body.extend_from_slice(key);
    body
}

fn signature_body() -> Vec<u8> {
    let mut body = vec![0xaa; 32];
    body.extend_from_slice(&[0xbb; 64]);
    body
}

// =============================================================================
// Modern Signing Tests
// =============================================================================

#[tokio::test]
async fn test_sign_600_bytes_frames() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&[], 0x9000)
        .with_response(&[], 0x9000)
        .with_response(&signature_body(), 0x9000);
    let mut app = TezosApp::new(transport);

    let message = vec![0x42; 600];
    let signed = app
        .sign(PATH, Curve::Secp256k1, &message, MessageKind::Operation)
        .await
        .unwrap();

    assert_eq!(signed.hash, [0xaa; 32]);
    assert_eq!(signed.signature, vec![0xbb; 64]);

    let sent = app.transport().sent();
    assert_eq!(sent.len(), 4);

    let lens: Vec<usize> = sent.iter().map(|c| c.data.len()).collect();
    let p1s: Vec<u8> = sent.iter().map(|c| c.p1).collect();
    let p2s: Vec<u8> = sent.iter().map(|c| c.p2).collect();
    assert_eq!(lens, vec![17, 250, 250, 101]);
    assert_eq!(p1s, vec![0x00, 0x01, 0x01, 0x02]);
    assert_eq!(p2s, vec![0x01, 0x00, 0x00, 0x00]);

    assert!(sent.iter().all(|c| c.cla == 0x80 && c.ins == 0x12));
    assert_eq!(sent[0].data, DEFAULT_PATH_BYTES);
    assert_eq!(sent[1].data[0], 0x03);
}

#[tokio::test]
async fn test_sign_rejected_by_user() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&[], 0x6986)
        .with_response(&signature_body(), 0x9000);
    let mut app = TezosApp::new(transport);

    let err = app
        .sign(PATH, Curve::Ed25519, &[1, 2, 3], MessageKind::Operation)
        .await
        .unwrap_err();

    assert_eq!(err.return_code(), 0x6986);
    assert_eq!(err.error_message(), "Transaction rejected");
    assert_eq!(app.transport().sent().len(), 2);
    assert_eq!(app.transport().remaining(), 1);
}

#[tokio::test]
async fn test_sign_data_invalid_carries_device_text() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(b"unknown tag", 0x6984);
    let mut app = TezosApp::new(transport);

    let err = app
        .sign(PATH, Curve::Ed25519, &[0xff], MessageKind::Operation)
        .await
        .unwrap_err();

    assert_eq!(err.return_code(), 0x6984);
    assert_eq!(err.error_message(), "Data is invalid : unknown tag");
}

#[tokio::test]
async fn test_sign_baker_endorsement_magic() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&signature_body(), 0x9000);
    let mut app = TezosApp::new(transport);

    let mut endorsement = vec![0u8; 40];
    endorsement[36] = 21;
    app.sign_baker(PATH, Curve::Ed25519, &endorsement, MessageKind::Endorsement)
        .await
        .unwrap();

    let sent = app.transport().sent();
    assert_eq!(sent[1].ins, 0xaf);
    assert_eq!(sent[1].data[0], 0x13);
}

#[tokio::test]
async fn test_sign_transport_failure_is_catch_all() {
    let mut transport = ScriptedTransport::new();
    transport.push_response(&[], 0x9000);
    transport.push_error(TransportError::Disconnected);
    let mut app = TezosApp::new(transport);

    let err = app
        .sign(PATH, Curve::Ed25519, &[1], MessageKind::Michelson)
        .await
        .unwrap_err();

    assert_eq!(err.return_code(), 0xffff);
    assert!(matches!(err, ClientError::Transport(_)));
}

// =============================================================================
// Modern Query Tests
// =============================================================================

#[tokio::test]
async fn test_get_version() {
    let transport =
        ScriptedTransport::new().with_response(&[0, 2, 4, 1, 0, 0x31, 0x10, 0x00, 0x04], 0x9000);
    let mut app = TezosApp::new(transport);

    let version = app.get_version().await.unwrap();

    assert!(!version.test_mode);
    assert_eq!((version.major, version.minor, version.patch), (2, 4, 1));
    assert!(!version.device_locked);
    assert_eq!(version.target_id, "31100004");

    let sent = &app.transport().sent()[0];
    assert_eq!((sent.cla, sent.ins, sent.p1, sent.p2), (0x80, 0x10, 0, 0));
    assert!(sent.data.is_empty());
}

#[tokio::test]
async fn test_get_version_app_not_open() {
    let transport = ScriptedTransport::new().with_response(&[], 0x6e00);
    let mut app = TezosApp::new(transport);

    let err = app.get_version().await.unwrap_err();
    assert_eq!(err.return_code(), 0x6e00);
    assert_eq!(err.error_message(), "App does not seem to be open");
}

#[tokio::test]
async fn test_get_app_info() {
    let mut body = vec![1, 5];
    body.extend_from_slice(b"Tezos");
    body.push(5);
    body.extend_from_slice(b"3.0.0");
    body.extend_from_slice(&[1, 0x86]);
    let transport = ScriptedTransport::new().with_response(&body, 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.get_app_info().await.unwrap();

    assert_eq!(info.app_name, "Tezos");
    assert_eq!(info.app_version, "3.0.0");
    assert!(!info.flag_recovery);
    assert!(info.flag_signed_mcu_code);
    assert!(info.flag_onboarded);
    assert!(info.flag_pin_validated);

    let sent = &app.transport().sent()[0];
    assert_eq!((sent.cla, sent.ins), (0xb0, 0x01));
}

#[tokio::test]
async fn test_get_app_info_unknown_format_reads_as_busy() {
    let transport = ScriptedTransport::new().with_response(&[2, 0, 0], 0x9000);
    let mut app = TezosApp::new(transport);

    let err = app.get_app_info().await.unwrap_err();
    assert_eq!(err.return_code(), 0x9001);
    assert_eq!(err.error_message(), "response format ID not recognized");
}

#[tokio::test]
async fn test_get_address_length_prefixed() {
    let mut body = length_prefixed(&ed_key());
    body.extend_from_slice(b"tz1SLUmMzdR5fYcKvcDP6BdWrutM4X7kg212");
    let transport = ScriptedTransport::new().with_response(&body, 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.get_address(PATH, Curve::Ed25519Slip10).await.unwrap();

    assert_eq!(info.public_key, ed_key());
    assert_eq!(info.address, "tz1SLUmMzdR5fYcKvcDP6BdWrutM4X7kg212");

    let sent = &app.transport().sent()[0];
    assert_eq!((sent.ins, sent.p1, sent.p2), (0x11, 0x00, 0x00));
    assert_eq!(sent.data, DEFAULT_PATH_BYTES);
}

#[tokio::test]
async fn test_get_address_fixed_key_derives_address() {
    let transport = ScriptedTransport::new().with_response(&ed_key(), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.get_address(PATH, Curve::Ed25519).await.unwrap();
    assert_eq!(info.address, "tz1SLUmMzdR5fYcKvcDP6BdWrutM4X7kg212");
}

#[tokio::test]
async fn test_show_address_sets_p1() {
    let transport = ScriptedTransport::new().with_response(&secp_key(), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.show_address(PATH, Curve::Secp256r1).await.unwrap();

    assert_eq!(info.address, "tz3SW3ZKb4dXNLhtudeMK9HrkQdYn7mQ1pxJ");
    let sent = &app.transport().sent()[0];
    assert_eq!((sent.p1, sent.p2), (0x01, 0x02));
}

#[tokio::test]
async fn test_address_serializes_key_as_hex() {
    let transport = ScriptedTransport::new().with_response(&ed_key(), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.get_address(PATH, Curve::Ed25519).await.unwrap();
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["public_key"], hex::encode(ed_key()));
    assert_eq!(json["address"], "tz1SLUmMzdR5fYcKvcDP6BdWrutM4X7kg212");
}

// =============================================================================
// Baking Authorization Tests
// =============================================================================

#[tokio::test]
async fn test_authorize_baking() {
    let transport = ScriptedTransport::new().with_response(&length_prefixed(&secp_key()), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.authorize_baking(PATH, Curve::Secp256k1).await.unwrap();

    assert_eq!(info.address, "tz2EVEbzhCVyyiFbVNa6KBqUw3k31HbAWCbm");
    let sent = &app.transport().sent()[0];
    assert_eq!((sent.ins, sent.p2), (0xa1, 0x01));
    assert_eq!(sent.data, DEFAULT_PATH_BYTES);
}

#[tokio::test]
async fn test_deauthorize_baking() {
    let transport = ScriptedTransport::new().with_response(&[], 0x9000);
    let mut app = TezosApp::new(transport);

    app.deauthorize_baking().await.unwrap();
    assert_eq!(app.transport().sent()[0].ins, 0xac);
}

#[tokio::test]
async fn test_query_auth_key_with_curve() {
    let mut body = vec![0x01, 4];
    body.extend_from_slice(&DEFAULT_PATH_BYTES[1..]);
    let transport = ScriptedTransport::new().with_response(&body, 0x9000);
    let mut app = TezosApp::new(transport);

    let key = app.query_auth_key_with_curve().await.unwrap();

    assert_eq!(key.curve, Some(Curve::Secp256k1));
    assert_eq!(key.path_string(), PATH);
    assert_eq!(app.transport().sent()[0].ins, 0xad);
}

// =============================================================================
// Legacy Firmware Tests
// =============================================================================

#[tokio::test]
async fn test_legacy_get_version_and_git() {
    let transport = ScriptedTransport::new()
        .with_response(&[1, 2, 1, 0], 0x9000)
        .with_response(b"d3f1a2b\0", 0x9000);
    let mut app = TezosApp::new(transport);

    let version = app.legacy_get_version().await.unwrap();
    assert!(version.baking);
    assert_eq!((version.major, version.minor, version.patch), (2, 1, 0));

    let git = app.legacy_get_git().await.unwrap();
    assert_eq!(git.commit_hash, "d3f1a2b");

    let ins: Vec<u8> = app.transport().sent().iter().map(|c| c.ins).collect();
    assert_eq!(ins, vec![0x00, 0x09]);
}

#[tokio::test]
async fn test_legacy_get_pubkey_derives_address() {
    let transport = ScriptedTransport::new().with_response(&length_prefixed(&secp_key()), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.legacy_get_pubkey(PATH, Curve::Secp256k1).await.unwrap();

    assert_eq!(info.public_key, secp_key());
    assert_eq!(info.address, "tz2EVEbzhCVyyiFbVNa6KBqUw3k31HbAWCbm");
    let sent = &app.transport().sent()[0];
    assert_eq!((sent.ins, sent.p2), (0x02, 0x01));
}

#[tokio::test]
async fn test_legacy_prompt_pubkey_rejected() {
    let transport = ScriptedTransport::new().with_response(&[], 0x6985);
    let mut app = TezosApp::new(transport);

    let err = app
        .legacy_prompt_pubkey(PATH, Curve::Ed25519)
        .await
        .unwrap_err();
    assert_eq!(err.return_code(), 0x6985);
    assert_eq!(app.transport().sent()[0].ins, 0x03);
}

#[tokio::test]
async fn test_legacy_watermarks() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&[0, 0, 0, 5], 0x9000)
        .with_response(&[0, 0, 0, 5, 0, 0, 0, 6, 0x7a, 0x06, 0xa7, 0x70], 0x9000);
    let mut app = TezosApp::new(transport);

    app.legacy_reset_high_watermark(100).await.unwrap();

    let main = app.legacy_get_high_watermark().await.unwrap();
    assert_eq!(main.main, 5);
    assert_eq!(main.test, None);

    let all = app.legacy_get_all_watermark().await.unwrap();
    assert_eq!(all.main, 5);
    assert_eq!(all.test, Some(6));
    assert_eq!(all.chain_id, Some(0x7a06a770));

    let sent = app.transport().sent();
    assert_eq!(sent[0].ins, 0x06);
    assert_eq!(sent[0].data, vec![0, 0, 0, 100]);
    assert_eq!(sent[1].ins, 0x08);
    assert_eq!(sent[2].ins, 0x0b);
}

#[tokio::test]
async fn test_legacy_authorize_and_query() {
    let mut query = vec![4];
    query.extend_from_slice(&DEFAULT_PATH_BYTES[1..]);
    let transport = ScriptedTransport::new()
        .with_response(&length_prefixed(&ed_key()), 0x9000)
        .with_response(&query, 0x9000)
        .with_response(&[], 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app
        .legacy_authorize_baking(PATH, Curve::Ed25519)
        .await
        .unwrap();
    assert_eq!(info.address, "tz1SLUmMzdR5fYcKvcDP6BdWrutM4X7kg212");

    let key = app.legacy_query_auth_key().await.unwrap();
    assert_eq!(key.curve, None);
    assert_eq!(key.path_string(), PATH);

    app.legacy_deauthorize().await.unwrap();

    let ins: Vec<u8> = app.transport().sent().iter().map(|c| c.ins).collect();
    assert_eq!(ins, vec![0x01, 0x07, 0x0c]);
}

#[tokio::test]
async fn test_legacy_setup_payload() {
    let transport = ScriptedTransport::new().with_response(&length_prefixed(&secp_key()), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app
        .legacy_setup(PATH, Curve::Secp256r1, 0x7a06a770, 10, 20)
        .await
        .unwrap();
    assert_eq!(info.address, "tz3SW3ZKb4dXNLhtudeMK9HrkQdYn7mQ1pxJ");

    let mut expected = vec![0x7a, 0x06, 0xa7, 0x70, 0, 0, 0, 10, 0, 0, 0, 20];
    expected.extend_from_slice(&DEFAULT_PATH_BYTES);

    let sent = &app.transport().sent()[0];
    assert_eq!((sent.ins, sent.p2), (0x0a, 0x02));
    assert_eq!(sent.data, expected);
}

#[tokio::test]
async fn test_legacy_hmac_payload() {
    let transport = ScriptedTransport::new().with_response(&[0x5a; 32], 0x9000);
    let mut app = TezosApp::new(transport);

    let result = app
        .legacy_hmac(PATH, Curve::Ed25519, b"state")
        .await
        .unwrap();
    assert_eq!(result.hmac, vec![0x5a; 32]);

    let mut expected = DEFAULT_PATH_BYTES.to_vec();
    expected.extend_from_slice(b"state");
    let sent = &app.transport().sent()[0];
    assert_eq!((sent.ins, sent.p2), (0x0e, 0x03));
    assert_eq!(sent.data, expected);
}

#[tokio::test]
async fn test_legacy_sign_frames() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&[], 0x9000)
        .with_response(&[0xcc; 64], 0x9000);
    let mut app = TezosApp::new(transport);

    let signed = app
        .legacy_sign(PATH, Curve::Ed25519, &[0u8; 300], MessageKind::Operation)
        .await
        .unwrap();

    assert_eq!(signed.hash, [0u8; 32]);
    assert_eq!(signed.signature, vec![0xcc; 64]);

    let p1s: Vec<u8> = app.transport().sent().iter().map(|c| c.p1).collect();
    assert_eq!(p1s, vec![0x00, 0x01, 0x81]);
    assert!(app.transport().sent().iter().all(|c| c.ins == 0x04));
}

#[tokio::test]
async fn test_legacy_sign_unsafe_single_message_frame() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&[0xcc; 64], 0x9000);
    let mut app = TezosApp::new(transport);

    app.legacy_sign_unsafe(PATH, Curve::Ed25519, b"raw", MessageKind::Operation)
        .await
        .unwrap();

    let sent = app.transport().sent();
    assert_eq!(sent[1].ins, 0x05);
    assert_eq!(sent[1].p1, 0x81);
    assert_eq!(sent[1].data, vec![0x03, b'r', b'a', b'w']);
}

#[tokio::test]
async fn test_legacy_sign_unsafe_packed_michelson() {
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&[0xcc; 64], 0x9000);
    let mut app = TezosApp::new(transport);

    // Packed string "a".
    let packed = [0x01, 0x00, 0x00, 0x00, 0x01, b'a'];
    let signed = app
        .legacy_sign_unsafe(PATH, Curve::Ed25519, &packed, MessageKind::Michelson)
        .await
        .unwrap();
    assert_eq!(signed.signature, vec![0xcc; 64]);

    let sent = app.transport().sent();
    assert_eq!(sent[1].ins, 0x05);
    assert_eq!(sent[1].data, vec![0x05, 0x01, 0x00, 0x00, 0x00, 0x01, b'a']);
}

// =============================================================================
// Local Validation Tests
// =============================================================================

#[tokio::test]
async fn test_invalid_path_sends_nothing() {
    let mut app = TezosApp::new(ScriptedTransport::new());

    let err = app
        .get_address("44'/1729'/0'/0'", Curve::Ed25519)
        .await
        .unwrap_err();
    assert_eq!(err.return_code(), 0xffff);

    let err = app
        .sign("m/44'/1729'/0'", Curve::Ed25519, &[1], MessageKind::Operation)
        .await
        .unwrap_err();
    assert_eq!(err.return_code(), 0xffff);

    assert!(app.transport().sent().is_empty());
}

#[tokio::test]
async fn test_oversized_single_frame_payload_sends_nothing() {
    let mut app = TezosApp::new(ScriptedTransport::new());

    let err = app
        .legacy_hmac(PATH, Curve::Ed25519, &[0u8; 240])
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Protocol(_)));
    assert!(app.transport().sent().is_empty());
}

#[tokio::test]
async fn test_truncated_response_is_catch_all() {
    let mut transport = ScriptedTransport::new();
    transport.push_raw(vec![0x90]);
    let mut app = TezosApp::new(transport);

    let err = app.get_version().await.unwrap_err();

    assert_eq!(err.return_code(), 0xffff);
    assert!(matches!(err, ClientError::Protocol(_)));
}

#[tokio::test]
async fn test_truncated_response_mid_sign_is_catch_all() {
    let mut transport = ScriptedTransport::new();
    transport.push_response(&[], 0x9000);
    transport.push_raw(vec![0x90]);
    transport.push_response(&signature_body(), 0x9000);
    let mut app = TezosApp::new(transport);

    let err = app
        .sign(PATH, Curve::Ed25519, &[0u8; 300], MessageKind::Operation)
        .await
        .unwrap_err();

    assert_eq!(err.return_code(), 0xffff);
    assert_eq!(app.transport().sent().len(), 2);
    assert_eq!(app.transport().remaining(), 1);
}

// =============================================================================
// Configured Defaults Tests
// =============================================================================

#[tokio::test]
async fn test_sign_default_with_legacy_config() {
    let config = ClientConfig::from_toml(
        r#"
[device]
generation = "legacy"
curve = "secp256k1"
"#,
    )
    .unwrap();
    let transport = ScriptedTransport::new()
        .with_response(&[], 0x9000)
        .with_response(&signature_body(), 0x9000);
    let mut app = TezosApp::from_config(transport, &config).unwrap();
    assert_eq!(app.defaults().generation, Generation::Legacy);

    let signed = app
        .sign_default(&[1, 2, 3], MessageKind::Operation)
        .await
        .unwrap();
    assert_eq!(signed.hash, [0xaa; 32]);

    let sent = app.transport().sent();
    assert!(sent.iter().all(|c| c.ins == 0x0f));
    assert_eq!((sent[0].p1, sent[0].p2), (0x00, 0x01));
    assert_eq!((sent[1].p1, sent[1].p2), (0x81, 0x00));
}

#[tokio::test]
async fn test_default_address_modern() {
    let transport = ScriptedTransport::new().with_response(&ed_key(), 0x9000);
    let mut app = TezosApp::new(transport);

    let info = app.default_address().await.unwrap();
    assert_eq!(info.address, "tz1SLUmMzdR5fYcKvcDP6BdWrutM4X7kg212");
    assert_eq!(app.transport().sent()[0].p2, 0x00);
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let mut config = ClientConfig::default();
    config.device.path = "m/44'".to_string();

    let err = TezosApp::from_config(ScriptedTransport::new(), &config).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert_eq!(err.return_code(), 0xffff);
}

// =============================================================================
// Shared Transport Tests
// =============================================================================

#[tokio::test]
async fn test_shared_transport_serializes_exchanges() {
    let version = [0, 2, 4, 1, 0];
    let shared = SharedTransport::new(
        ScriptedTransport::new()
            .with_response(&[], 0x9000)
            .with_response(&signature_body(), 0x9000)
            .with_response(&version, 0x9000),
    );

    let signer = shared.clone();
    let sign = async move {
        let mut guard = signer.lock().await;
        TezosApp::new(&mut *guard)
            .sign(PATH, Curve::Ed25519, &[1], MessageKind::Operation)
            .await
    };

    let querier = shared.clone();
    let query = async move {
        let mut guard = querier.lock().await;
        TezosApp::new(&mut *guard).get_version().await
    };

    let (signed, version) = tokio::join!(sign, query);
    assert_eq!(signed.unwrap().signature, vec![0xbb; 64]);
    assert_eq!(version.unwrap().major, 2);

    let guard = shared.lock().await;
    let ins: Vec<u8> = guard.sent().iter().map(|c| c.ins).collect();
    assert_eq!(ins, vec![0x12, 0x12, 0x10]);
}

// =============================================================================
// Host-side Helper Tests
// =============================================================================

#[test]
fn test_helpers() {
    let chunks = tezos_ledger_client::sign_get_chunks(PATH, &[0u8; 300]).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0], DEFAULT_PATH_BYTES);

    let address =
        tezos_ledger_client::public_key_to_address(&secp_key(), Curve::Secp256k1).unwrap();
    assert_eq!(address, "tz2EVEbzhCVyyiFbVNa6KBqUw3k31HbAWCbm");

    let digest = tezos_ledger_client::sig_hash(&[1, 2, 3], MessageKind::Operation).unwrap();
    assert_eq!(
        hex::encode(digest),
        "49229e41121de7898281a7e8d34a9bc215ef2ce58ee7c756d06d9dd019554669"
    );
}
