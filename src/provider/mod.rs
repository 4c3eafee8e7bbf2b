// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Capability traits implemented by concrete algorithm handlers.
//!
//! An asymmetric handler implements exactly one key-generation capability
//! (`SizeKeyGenerator` or `CurveKeyGenerator`) and exactly one operation
//! capability (`AsymmetricEncryptor`, `SignatureScheme` or `KeyExchange`),
//! surfaced through the tagged views on [`AsymmetricHandler`]. Symmetric
//! ciphers and hashes stand alone.

pub mod registry;

use crate::catalog::{AsymmetricAlgorithm, HashAlgorithm, SymmetricAlgorithm};
use crate::error::{CryptoError, Result};
use crate::types::{KeyPair, OperationKind, Provider};

pub trait Hasher: Send + Sync {
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest length in bytes.
    fn output_size(&self) -> usize {
        self.algorithm().output_size()
    }

    /// Deterministic, pure digest of `data`.
    fn compute(&self, data: &[u8]) -> Vec<u8>;
}

pub trait SymmetricCipher: Send + Sync {
    fn algorithm(&self) -> SymmetricAlgorithm;

    /// Legal key lengths in bits.
    fn key_sizes(&self) -> &'static [usize] {
        self.algorithm().key_sizes()
    }

    /// Required IV/nonce length in bytes.
    fn iv_size(&self) -> usize {
        self.algorithm().iv_size()
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;
    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}

pub trait AsymmetricEncryptor: Send + Sync {
    /// Encrypts with the key pair's public half.
    fn encrypt(&self, key_pair: &KeyPair, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts with the key pair's private half.
    fn decrypt(&self, key_pair: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

pub trait SignatureScheme: Send + Sync {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>>;

    /// Verifies against the key pair's public half. A signature that does
    /// not match is `Ok(false)`, never an error; only malformed keys are
    /// errors.
    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool>;
}

pub trait KeyExchange: Send + Sync {
    /// Derives the shared secret between the key pair's private half and
    /// the other party's public key. With `size_hint` set, the raw
    /// agreement is expanded through HKDF-SHA256 to that many bytes.
    fn derive_shared_secret(
        &self,
        key_pair: &KeyPair,
        size_hint: Option<usize>,
        peer_public_key: &[u8],
    ) -> Result<Vec<u8>>;
}

pub trait SizeKeyGenerator: Send + Sync {
    /// Supported key lengths in bits.
    fn key_sizes(&self) -> &'static [usize];

    fn generate_keypair(&self, bits: usize) -> Result<KeyPair>;
}

pub trait CurveKeyGenerator: Send + Sync {
    /// Supported curves, by canonical name.
    fn curves(&self) -> &'static [&'static str];

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair>;
}

/// The handler's key-generation path. Statically one of the two; never a
/// runtime flag on a shared interface.
pub enum KeyGenerator<'a> {
    Size(&'a dyn SizeKeyGenerator),
    Curve(&'a dyn CurveKeyGenerator),
}

/// The handler's operation capability.
pub enum OperationImpl<'a> {
    Encryption(&'a dyn AsymmetricEncryptor),
    Signature(&'a dyn SignatureScheme),
    KeyExchange(&'a dyn KeyExchange),
}

/// A constructed handler bound to one algorithm and provider.
///
/// Handlers are stateless with respect to data: keys live in [`KeyPair`],
/// so a handler is safe to reuse across operations and threads.
pub trait AsymmetricHandler: Send + Sync {
    fn provider(&self) -> Provider;
    fn algorithm(&self) -> AsymmetricAlgorithm;
    fn operation_kind(&self) -> OperationKind;
    fn generator(&self) -> KeyGenerator<'_>;
    fn operation(&self) -> OperationImpl<'_>;
}

/// Rejects key material that was generated by a different handler.
pub(crate) fn ensure_key_matches(
    key_pair: &KeyPair,
    provider: Provider,
    algorithm: AsymmetricAlgorithm,
) -> Result<()> {
    if key_pair.provider() != provider || key_pair.algorithm() != algorithm {
        return Err(CryptoError::KeyError(format!(
            "key pair generated for {}/{} cannot be used with {}/{}",
            key_pair.provider(),
            key_pair.algorithm(),
            provider,
            algorithm,
        )));
    }
    Ok(())
}

/// Canonicalizes a requested curve name against a handler's curve list.
pub(crate) fn lookup_curve(
    curves: &'static [&'static str],
    requested: &str,
) -> Result<&'static str> {
    curves
        .iter()
        .find(|&&name| name == requested)
        .copied()
        .ok_or_else(|| CryptoError::UnknownCurve {
            requested: requested.to_string(),
            supported: curves,
        })
}

/// Rejects key lengths outside a size-based generator's list.
pub(crate) fn check_generation_size(supported: &'static [usize], bits: usize) -> Result<()> {
    if !supported.contains(&bits) {
        return Err(CryptoError::UnsupportedKeySize {
            requested: bits,
            supported,
        });
    }
    Ok(())
}
