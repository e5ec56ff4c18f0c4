//! Generate test vectors for interop testing against other client libraries.
//!
//! Run with: cargo run --package tezos-ledger-protocol --example test_vectors

use tezos_ledger_protocol::*;

fn main() {
    // Test vector 1: default account path
    let path = DerivationPath::default();
    print_test_vector("path_default", &path.to_string(), &path.serialize());

    // Test vector 2: two-component path
    let short = serialize_path("m/44'/1729'").unwrap();
    print_test_vector("path_short", "m/44'/1729'", &short);

    // Test vector 3: APDU for get address on secp256k1
    let apdu = ApduCommand::new(
        CLA,
        ModernIns::GetAddress as u8,
        instructions::p1::ONLY_RETRIEVE,
        Curve::Secp256k1.as_byte(),
        path.serialize(),
    );
    let wire = apdu.encode().unwrap();
    assert_eq!(ApduCommand::decode(&wire).unwrap(), apdu);
    print_test_vector("apdu_get_address", "secp256k1", &wire);

    // Test vector 4: frames of a 600-byte operation
    let message = MessageKind::Operation.prepend_magic(&[0u8; 600]).unwrap();
    let chunks = prepare_chunks(&message, Some(&path.serialize()));
    for (i, chunk) in chunks.iter().enumerate() {
        let tag = PayloadType::for_position(i, chunks.len()).modern_p1();
        print_test_vector(
            &format!("sign_frame_{i}"),
            &format!("p1={tag:#04x} len={}", chunk.len()),
            chunk,
        );
    }

    // Test vector 5: signing digest
    let digest = sig_hash(MessageKind::Operation, &[1, 2, 3]).unwrap();
    print_test_vector("sig_hash_operation", "03 || 010203", &digest);

    // Test vector 6: addresses for every curve
    let mut ed_key = vec![0x02];
    ed_key.extend(1..=32u8);
    let mut secp_key = vec![0x04];
    secp_key.extend(0x20..0x60u8);
    for curve in Curve::ALL {
        let key = if curve.family() == CurveFamily::Tz1 {
            &ed_key
        } else {
            &secp_key
        };
        let address = derive_address(curve, key).unwrap();
        let name = format!("address_{}", curve.name().replace('-', "_"));
        print_test_vector(&name, &address, key);
    }
}

fn print_test_vector(name: &str, input: &str, bytes: &[u8]) {
    println!("// Test vector: {}", name);
    println!("// Input: {}", input);
    println!("const {}_BYTES = \"{}\";", name.to_uppercase(), hex::encode(bytes));
    println!();
}
