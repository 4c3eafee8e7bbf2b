// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Dispatch registry: (provider, algorithm) to constructed handler.
//!
//! The registry is an explicit value owned by the caller; there is no
//! global instance. Construction eagerly builds every handler in the
//! catalogs, so resolution is a pure lookup. [`Registry::self_check`]
//! verifies totality and should run at application startup, where a
//! failure is a build configuration error rather than a user error.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{AsymmetricAlgorithm, Catalog, HashAlgorithm, SymmetricAlgorithm};
use crate::error::{CryptoError, Result};
use crate::provider::{AsymmetricHandler, Hasher, SymmetricCipher};
use crate::types::{OperationKind, Provider};
use crate::{cipher, encrypt, exchange, hash, signer};

const PROVIDERS: [Provider; 2] = [Provider::Ring, Provider::RustCrypto];

pub struct Registry {
    hashers: HashMap<(Provider, HashAlgorithm), Arc<dyn Hasher>>,
    symmetric: HashMap<(Provider, SymmetricAlgorithm), Arc<dyn SymmetricCipher>>,
    asymmetric: HashMap<(Provider, OperationKind, AsymmetricAlgorithm), Arc<dyn AsymmetricHandler>>,
}

fn construct_asymmetric(
    provider: Provider,
    operation: OperationKind,
    algorithm: AsymmetricAlgorithm,
) -> Option<Arc<dyn AsymmetricHandler>> {
    use AsymmetricAlgorithm as Alg;
    use OperationKind as Op;
    use Provider as Prov;

    match (provider, operation, algorithm) {
        (Prov::Ring, Op::Signature, Alg::Ecdsa) => Some(Arc::new(signer::RingEcdsa::new())),
        (Prov::Ring, Op::Signature, Alg::Ed25519) => Some(Arc::new(signer::RingEd25519::new())),
        (Prov::RustCrypto, Op::Encryption, Alg::Rsa) => Some(Arc::new(encrypt::RsaOaep::new())),
        (Prov::RustCrypto, Op::Signature, Alg::Rsa) => Some(Arc::new(signer::RsaSignature::new())),
        (Prov::RustCrypto, Op::Signature, Alg::Dsa) => Some(Arc::new(signer::DsaSignature::new())),
        (Prov::RustCrypto, Op::Signature, Alg::Ecdsa) => Some(Arc::new(signer::NistEcdsa::new())),
        (Prov::RustCrypto, Op::Signature, Alg::Ed25519) => {
            Some(Arc::new(signer::DalekEd25519::new()))
        }
        (Prov::RustCrypto, Op::KeyExchange, Alg::Ecdh) => {
            Some(Arc::new(exchange::EcdhAgreement::new()))
        }
        (Prov::RustCrypto, Op::KeyExchange, Alg::X25519) => {
            Some(Arc::new(exchange::X25519Agreement::new()))
        }
        _ => None,
    }
}

impl Registry {
    pub fn new() -> Self {
        let mut registry = Self {
            hashers: HashMap::new(),
            symmetric: HashMap::new(),
            asymmetric: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        for provider in PROVIDERS {
            for &algorithm in Catalog::hashes(provider) {
                if let Some(handler) = hash::construct(provider, algorithm) {
                    self.hashers.insert((provider, algorithm), handler);
                }
            }
            for &algorithm in Catalog::symmetric(provider) {
                if let Some(handler) = cipher::construct(provider, algorithm) {
                    self.symmetric.insert((provider, algorithm), handler);
                }
            }
            for operation in OperationKind::ALL {
                for &algorithm in Catalog::asymmetric(provider, operation) {
                    if let Some(handler) = construct_asymmetric(provider, operation, algorithm) {
                        self.asymmetric
                            .insert((provider, operation, algorithm), handler);
                    }
                }
            }
        }
    }

    pub fn resolve_hash(
        &self,
        provider: Provider,
        algorithm: HashAlgorithm,
    ) -> Result<Arc<dyn Hasher>> {
        debug!(%provider, %algorithm, "resolving hash handler");
        self.hashers
            .get(&(provider, algorithm))
            .cloned()
            .ok_or_else(|| {
                CryptoError::UnknownAlgorithm(format!(
                    "{algorithm} is not in the {provider} hash catalog"
                ))
            })
    }

    pub fn resolve_symmetric(
        &self,
        provider: Provider,
        algorithm: SymmetricAlgorithm,
    ) -> Result<Arc<dyn SymmetricCipher>> {
        debug!(%provider, %algorithm, "resolving symmetric handler");
        self.symmetric
            .get(&(provider, algorithm))
            .cloned()
            .ok_or_else(|| {
                CryptoError::UnknownAlgorithm(format!(
                    "{algorithm} is not in the {provider} symmetric catalog"
                ))
            })
    }

    pub fn resolve_asymmetric(
        &self,
        provider: Provider,
        operation: OperationKind,
        algorithm: AsymmetricAlgorithm,
    ) -> Result<Arc<dyn AsymmetricHandler>> {
        debug!(%provider, %operation, %algorithm, "resolving asymmetric handler");
        self.asymmetric
            .get(&(provider, operation, algorithm))
            .cloned()
            .ok_or_else(|| {
                CryptoError::UnknownAlgorithm(format!(
                    "{algorithm} is not in the {provider} {operation} catalog"
                ))
            })
    }

    /// Algorithms legal for (provider, operation) that also resolve. The
    /// catalog and the constructor table agree whenever `self_check`
    /// passes, so this normally equals the raw catalog listing.
    pub fn list_valid_algorithms(
        &self,
        provider: Provider,
        operation: OperationKind,
    ) -> Vec<AsymmetricAlgorithm> {
        Catalog::asymmetric(provider, operation)
            .iter()
            .copied()
            .filter(|&algorithm| {
                self.asymmetric
                    .contains_key(&(provider, operation, algorithm))
            })
            .collect()
    }

    /// Verifies that every catalog entry resolves to a handler whose tags
    /// match its catalog slot. A failure here is a configuration error
    /// that should abort startup.
    pub fn self_check(&self) -> Result<()> {
        for provider in PROVIDERS {
            for &algorithm in Catalog::hashes(provider) {
                let handler = self.resolve_hash(provider, algorithm)?;
                if handler.algorithm() != algorithm {
                    return Err(CryptoError::UnknownAlgorithm(format!(
                        "hash handler for {provider}/{algorithm} reports {}",
                        handler.algorithm()
                    )));
                }
            }
            for &algorithm in Catalog::symmetric(provider) {
                let handler = self.resolve_symmetric(provider, algorithm)?;
                if handler.algorithm() != algorithm {
                    return Err(CryptoError::UnknownAlgorithm(format!(
                        "symmetric handler for {provider}/{algorithm} reports {}",
                        handler.algorithm()
                    )));
                }
            }
            for operation in OperationKind::ALL {
                for &algorithm in Catalog::asymmetric(provider, operation) {
                    let handler = self.resolve_asymmetric(provider, operation, algorithm)?;
                    if handler.provider() != provider
                        || handler.algorithm() != algorithm
                        || handler.operation_kind() != operation
                    {
                        return Err(CryptoError::UnknownAlgorithm(format!(
                            "asymmetric handler for {provider}/{operation}/{algorithm} is mis-tagged"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
