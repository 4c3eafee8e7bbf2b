// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptolab::{
    AsymmetricAlgorithm, Catalog, KeyGenerator, OperationImpl, OperationKind, Provider, Registry,
};

const PROVIDERS: [Provider; 2] = [Provider::Ring, Provider::RustCrypto];

fn test_key(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test]
fn test_every_symmetric_handler_round_trips() {
    let registry = Registry::new();
    // Lengths cover empty, single byte, block-aligned and non-aligned
    // inputs.
    let payload: Vec<u8> = (0..=255).collect();
    let lengths = [0usize, 1, 15, 16, 17, 255];

    for provider in PROVIDERS {
        for &algorithm in Catalog::symmetric(provider) {
            let cipher = registry.resolve_symmetric(provider, algorithm).unwrap();
            let iv = test_key(cipher.iv_size());
            for &bits in cipher.key_sizes() {
                let key = test_key(bits / 8);
                for &len in &lengths {
                    let plaintext = &payload[..len];
                    let sealed = cipher.encrypt(&key, &iv, plaintext).unwrap();
                    let opened = cipher.decrypt(&key, &iv, &sealed).unwrap();
                    assert_eq!(
                        opened, plaintext,
                        "{provider}/{algorithm} with {bits}-bit key, {len}-byte input"
                    );
                }
            }
        }
    }
}

#[test]
fn test_symmetric_wrong_key_does_not_round_trip() {
    let registry = Registry::new();
    for provider in PROVIDERS {
        for &algorithm in Catalog::symmetric(provider) {
            let cipher = registry.resolve_symmetric(provider, algorithm).unwrap();
            let bits = cipher.key_sizes()[0];
            let key = test_key(bits / 8);
            let mut wrong_key = key.clone();
            wrong_key[0] ^= 0xff;
            let iv = test_key(cipher.iv_size());

            let sealed = cipher.encrypt(&key, &iv, b"wrong key check").unwrap();
            // AEAD modes must reject outright; CBC modes may decrypt to
            // garbage when the padding happens to parse, but never to the
            // original plaintext.
            match cipher.decrypt(&wrong_key, &iv, &sealed) {
                Ok(opened) => assert_ne!(opened, b"wrong key check", "{provider}/{algorithm}"),
                Err(_) => {}
            }
        }
    }
}

#[test]
fn test_every_hash_handler_matches_metadata() {
    let registry = Registry::new();
    for provider in PROVIDERS {
        for &algorithm in Catalog::hashes(provider) {
            let hasher = registry.resolve_hash(provider, algorithm).unwrap();
            let digest = hasher.compute(b"metadata check");
            assert_eq!(digest.len(), algorithm.output_size(), "{provider}/{algorithm}");
            assert_eq!(digest, hasher.compute(b"metadata check"));
        }
    }
}

#[test]
fn test_sha256_known_answer_on_both_providers() {
    let registry = Registry::new();
    for provider in PROVIDERS {
        let hasher = registry
            .resolve_hash(provider, cryptolab::HashAlgorithm::Sha256)
            .unwrap();
        assert_eq!(
            hex::encode(hasher.compute(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

#[test]
fn test_asymmetric_encryption_round_trip() {
    let registry = Registry::new();
    let handler = registry
        .resolve_asymmetric(
            Provider::RustCrypto,
            OperationKind::Encryption,
            AsymmetricAlgorithm::Rsa,
        )
        .unwrap();

    let generator = match handler.generator() {
        KeyGenerator::Size(generator) => generator,
        KeyGenerator::Curve(_) => panic!("RSA generates by size"),
    };
    let encryptor = match handler.operation() {
        OperationImpl::Encryption(op) => op,
        _ => panic!("RSA encryption handler"),
    };

    let key_pair = generator.generate_keypair(2048).unwrap();
    let ciphertext = encryptor.encrypt(&key_pair, b"round trip").unwrap();
    assert_eq!(encryptor.decrypt(&key_pair, &ciphertext).unwrap(), b"round trip");
}

#[test]
fn test_every_signature_handler_round_trips() {
    let registry = Registry::new();
    for provider in PROVIDERS {
        for &algorithm in Catalog::asymmetric(provider, OperationKind::Signature) {
            let handler = registry
                .resolve_asymmetric(provider, OperationKind::Signature, algorithm)
                .unwrap();
            let scheme = match handler.operation() {
                OperationImpl::Signature(op) => op,
                _ => panic!("signature handler for {provider}/{algorithm}"),
            };
            let key_pair = match handler.generator() {
                // Smallest size keeps RSA/DSA generation fast.
                KeyGenerator::Size(generator) => {
                    generator.generate_keypair(generator.key_sizes()[0]).unwrap()
                }
                KeyGenerator::Curve(generator) => {
                    generator.generate_keypair(generator.curves()[0]).unwrap()
                }
            };

            let signature = scheme.sign(&key_pair, b"signed data").unwrap();
            assert!(
                scheme.verify(&signature, &key_pair, b"signed data").unwrap(),
                "{provider}/{algorithm} verify"
            );
            assert!(
                !scheme.verify(&signature, &key_pair, b"other data").unwrap(),
                "{provider}/{algorithm} tamper"
            );
        }
    }
}

#[test]
fn test_key_exchange_agreement() {
    let registry = Registry::new();
    for &algorithm in Catalog::asymmetric(Provider::RustCrypto, OperationKind::KeyExchange) {
        let handler = registry
            .resolve_asymmetric(Provider::RustCrypto, OperationKind::KeyExchange, algorithm)
            .unwrap();
        let generator = match handler.generator() {
            KeyGenerator::Curve(generator) => generator,
            KeyGenerator::Size(_) => panic!("key exchange generates by curve"),
        };
        let exchange = match handler.operation() {
            OperationImpl::KeyExchange(op) => op,
            _ => panic!("key exchange handler"),
        };

        for &curve in generator.curves() {
            let alice = generator.generate_keypair(curve).unwrap();
            let bob = generator.generate_keypair(curve).unwrap();

            let alice_secret = exchange
                .derive_shared_secret(&alice, Some(32), bob.public_key())
                .unwrap();
            let bob_secret = exchange
                .derive_shared_secret(&bob, Some(32), alice.public_key())
                .unwrap();
            assert_eq!(alice_secret, bob_secret, "{algorithm} on {curve}");
            assert_eq!(alice_secret.len(), 32);
        }
    }
}
