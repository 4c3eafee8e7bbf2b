// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptolab::{
    AsymmetricAlgorithm, CryptoError, DataFormat, InputFormat, KeyPairSession, KeySpec,
    OperationKind, Provider, Registry,
};

#[test]
fn test_full_signature_flow() {
    // The flow the UI shell drives: list, resolve, bind, generate, sign.
    let registry = Registry::new();
    registry.self_check().unwrap();

    let algorithms = registry.list_valid_algorithms(Provider::Ring, OperationKind::Signature);
    assert!(algorithms.contains(&AsymmetricAlgorithm::Ecdsa));

    let handler = registry
        .resolve_asymmetric(
            Provider::Ring,
            OperationKind::Signature,
            AsymmetricAlgorithm::Ecdsa,
        )
        .unwrap();
    let mut session = KeyPairSession::new(handler);
    session.generate_by_curve("P-256").unwrap();

    let message = InputFormat::to_bytes(DataFormat::HexString, "deadbeef").unwrap();
    let signature = session.sign(&message).unwrap();
    assert!(session.verify(&signature, &message).unwrap());

    let tampered = InputFormat::to_bytes(DataFormat::HexString, "deadbeee").unwrap();
    assert!(!session.verify(&signature, &tampered).unwrap());
}

#[test]
fn test_full_encryption_flow() {
    let registry = Registry::new();
    let handler = registry
        .resolve_asymmetric(
            Provider::RustCrypto,
            OperationKind::Encryption,
            AsymmetricAlgorithm::Rsa,
        )
        .unwrap();
    let mut session = KeyPairSession::new(handler);
    session.generate(KeySpec::Bits(2048)).unwrap();

    let plaintext = InputFormat::to_bytes(DataFormat::PlainText, "attack at dawn").unwrap();
    let ciphertext = session.encrypt(&plaintext).unwrap();
    assert_eq!(session.decrypt(&ciphertext).unwrap(), plaintext);

    // Signature operations are a different capability.
    assert!(matches!(
        session.sign(&plaintext),
        Err(CryptoError::CapabilityMismatch(_))
    ));
}

#[test]
fn test_full_key_exchange_flow() {
    let registry = Registry::new();
    let handler = registry
        .resolve_asymmetric(
            Provider::RustCrypto,
            OperationKind::KeyExchange,
            AsymmetricAlgorithm::Ecdh,
        )
        .unwrap();

    let mut alice = KeyPairSession::new(handler.clone());
    alice.generate_by_curve("P-256").unwrap();
    let mut bob = KeyPairSession::new(handler);
    bob.generate_by_curve("P-256").unwrap();

    let alice_public = alice.public_key().unwrap().to_vec();
    let bob_public = bob.public_key().unwrap().to_vec();

    let alice_secret = alice.derive_shared_secret(&bob_public, Some(32)).unwrap();
    let bob_secret = bob.derive_shared_secret(&alice_public, Some(32)).unwrap();
    assert_eq!(alice_secret, bob_secret);

    // A P-384 peer key is a parameter mismatch, not a silent failure.
    let mut carol = KeyPairSession::new(
        registry
            .resolve_asymmetric(
                Provider::RustCrypto,
                OperationKind::KeyExchange,
                AsymmetricAlgorithm::Ecdh,
            )
            .unwrap(),
    );
    carol.generate_by_curve("P-384").unwrap();
    let carol_public = carol.public_key().unwrap().to_vec();
    assert!(matches!(
        alice.derive_shared_secret(&carol_public, None),
        Err(CryptoError::KeyExchangeFailed(_))
    ));
}

#[test]
fn test_key_pair_is_bound_to_generating_handler() {
    use cryptolab::SignatureScheme;

    let registry = Registry::new();
    let ring = registry
        .resolve_asymmetric(
            Provider::Ring,
            OperationKind::Signature,
            AsymmetricAlgorithm::Ed25519,
        )
        .unwrap();
    let rustcrypto = registry
        .resolve_asymmetric(
            Provider::RustCrypto,
            OperationKind::Signature,
            AsymmetricAlgorithm::Ed25519,
        )
        .unwrap();

    let mut session = KeyPairSession::new(rustcrypto);
    session.generate_by_curve("Ed25519").unwrap();
    let key_pair = session.key_pair().unwrap();

    // Same algorithm, different provider: the key material is refused.
    let scheme = match ring.operation() {
        cryptolab::OperationImpl::Signature(op) => op,
        _ => panic!("Ed25519 signs"),
    };
    assert!(matches!(
        SignatureScheme::sign(scheme, key_pair, b"data"),
        Err(CryptoError::KeyError(_))
    ));
}

#[test]
fn test_generation_error_paths() {
    let registry = Registry::new();

    let mut dsa = KeyPairSession::new(
        registry
            .resolve_asymmetric(
                Provider::RustCrypto,
                OperationKind::Signature,
                AsymmetricAlgorithm::Dsa,
            )
            .unwrap(),
    );
    assert!(matches!(
        dsa.generate_by_size(4096),
        Err(CryptoError::UnsupportedKeySize { requested: 4096, .. })
    ));
    assert!(matches!(
        dsa.generate_by_curve("P-256"),
        Err(CryptoError::CapabilityMismatch(_))
    ));

    let mut x25519 = KeyPairSession::new(
        registry
            .resolve_asymmetric(
                Provider::RustCrypto,
                OperationKind::KeyExchange,
                AsymmetricAlgorithm::X25519,
            )
            .unwrap(),
    );
    assert!(matches!(
        x25519.generate_by_curve("Ed25519"),
        Err(CryptoError::UnknownCurve { .. })
    ));
    assert!(!x25519.is_generated());
}
