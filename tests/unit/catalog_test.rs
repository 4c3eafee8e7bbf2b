// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptolab::{
    AsymmetricAlgorithm, Catalog, CryptoError, HashAlgorithm, OperationKind, Provider, Registry,
};

const PROVIDERS: [Provider; 2] = [Provider::Ring, Provider::RustCrypto];

#[test]
fn test_registry_self_check() {
    Registry::new().self_check().unwrap();
}

#[test]
fn test_every_valid_algorithm_resolves() {
    let registry = Registry::new();
    for provider in PROVIDERS {
        for operation in OperationKind::ALL {
            for algorithm in registry.list_valid_algorithms(provider, operation) {
                let handler = registry
                    .resolve_asymmetric(provider, operation, algorithm)
                    .unwrap();
                assert_eq!(handler.provider(), provider);
                assert_eq!(handler.algorithm(), algorithm);
                assert_eq!(handler.operation_kind(), operation);
            }
        }
        for &algorithm in Catalog::hashes(provider) {
            registry.resolve_hash(provider, algorithm).unwrap();
        }
        for &algorithm in Catalog::symmetric(provider) {
            registry.resolve_symmetric(provider, algorithm).unwrap();
        }
    }
}

#[test]
fn test_rustcrypto_covers_reference_asymmetric_set() {
    let registry = Registry::new();
    let encryption =
        registry.list_valid_algorithms(Provider::RustCrypto, OperationKind::Encryption);
    assert_eq!(encryption, vec![AsymmetricAlgorithm::Rsa]);

    let signature = registry.list_valid_algorithms(Provider::RustCrypto, OperationKind::Signature);
    for expected in [
        AsymmetricAlgorithm::Rsa,
        AsymmetricAlgorithm::Dsa,
        AsymmetricAlgorithm::Ecdsa,
    ] {
        assert!(signature.contains(&expected), "missing {expected}");
    }

    let key_exchange =
        registry.list_valid_algorithms(Provider::RustCrypto, OperationKind::KeyExchange);
    assert!(key_exchange.contains(&AsymmetricAlgorithm::Ecdh));
}

#[test]
fn test_ring_has_no_encryption_or_key_exchange() {
    let registry = Registry::new();
    assert!(registry
        .list_valid_algorithms(Provider::Ring, OperationKind::Encryption)
        .is_empty());
    assert!(registry
        .list_valid_algorithms(Provider::Ring, OperationKind::KeyExchange)
        .is_empty());
    assert!(!registry
        .list_valid_algorithms(Provider::Ring, OperationKind::Signature)
        .is_empty());
}

#[test]
fn test_cross_provider_resolution_fails() {
    let registry = Registry::new();
    assert!(matches!(
        registry.resolve_hash(Provider::Ring, HashAlgorithm::Blake2b512),
        Err(CryptoError::UnknownAlgorithm(_))
    ));
    assert!(matches!(
        registry.resolve_hash(Provider::RustCrypto, HashAlgorithm::Sha512_256),
        Err(CryptoError::UnknownAlgorithm(_))
    ));
    assert!(matches!(
        registry.resolve_asymmetric(
            Provider::Ring,
            OperationKind::Signature,
            AsymmetricAlgorithm::Dsa,
        ),
        Err(CryptoError::UnknownAlgorithm(_))
    ));
}

#[test]
fn test_listing_is_deterministic() {
    let registry = Registry::new();
    for provider in PROVIDERS {
        for operation in OperationKind::ALL {
            assert_eq!(
                registry.list_valid_algorithms(provider, operation),
                registry.list_valid_algorithms(provider, operation)
            );
        }
    }
}
