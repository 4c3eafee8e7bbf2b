// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Key-pair session: binds a handler, generates and owns key material, and
//! routes operations through the bound handler.
//!
//! The session is a two-state machine: uninitialized until a generation
//! call succeeds, then keys-generated until `bind` replaces the handler or
//! a re-generation replaces the pair. Every key-dependent call fails with
//! `KeysNotGenerated` in the first state. Mutating a session from several
//! threads is not supported; serialize access externally.

use std::sync::Arc;

use tracing::info;

use crate::error::{CryptoError, Result};
use crate::provider::{AsymmetricHandler, KeyGenerator, OperationImpl};
use crate::types::{KeyPair, KeySpec};

pub struct KeyPairSession {
    handler: Arc<dyn AsymmetricHandler>,
    keys: Option<KeyPair>,
}

impl KeyPairSession {
    pub fn new(handler: Arc<dyn AsymmetricHandler>) -> Self {
        Self {
            handler,
            keys: None,
        }
    }

    /// Replaces the active handler and discards any generated keys.
    pub fn bind(&mut self, handler: Arc<dyn AsymmetricHandler>) {
        self.handler = handler;
        self.keys = None;
    }

    pub fn handler(&self) -> &dyn AsymmetricHandler {
        self.handler.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.keys.is_some()
    }

    fn keys(&self) -> Result<&KeyPair> {
        self.keys.as_ref().ok_or(CryptoError::KeysNotGenerated)
    }

    /// Generates a key pair through the handler's size-based capability.
    /// Any previously held pair is dropped first.
    pub fn generate_by_size(&mut self, bits: usize) -> Result<()> {
        let pair = match self.handler.generator() {
            KeyGenerator::Size(generator) => generator.generate_keypair(bits)?,
            KeyGenerator::Curve(_) => {
                return Err(CryptoError::CapabilityMismatch(
                    "size-based key generation",
                ))
            }
        };
        self.install(pair);
        Ok(())
    }

    /// Generates a key pair through the handler's curve-based capability.
    pub fn generate_by_curve(&mut self, curve: &str) -> Result<()> {
        let pair = match self.handler.generator() {
            KeyGenerator::Curve(generator) => generator.generate_keypair(curve)?,
            KeyGenerator::Size(_) => {
                return Err(CryptoError::CapabilityMismatch(
                    "curve-based key generation",
                ))
            }
        };
        self.install(pair);
        Ok(())
    }

    /// Convenience wrapper dispatching on the spec variant.
    pub fn generate(&mut self, spec: KeySpec) -> Result<()> {
        match spec {
            KeySpec::Bits(bits) => self.generate_by_size(bits),
            KeySpec::Curve(curve) => self.generate_by_curve(curve),
        }
    }

    fn install(&mut self, pair: KeyPair) {
        info!(
            provider = %pair.provider(),
            algorithm = %pair.algorithm(),
            spec = %pair.spec(),
            "generated key pair"
        );
        self.keys = Some(pair);
    }

    pub fn key_pair(&self) -> Result<&KeyPair> {
        self.keys()
    }

    pub fn private_key(&self) -> Result<&[u8]> {
        Ok(self.keys()?.private_key())
    }

    pub fn public_key(&self) -> Result<&[u8]> {
        Ok(self.keys()?.public_key())
    }

    /// Encrypts with the session's public key.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let keys = self.keys()?;
        match self.handler.operation() {
            OperationImpl::Encryption(op) => op.encrypt(keys, plaintext),
            _ => Err(CryptoError::CapabilityMismatch("asymmetric encryption")),
        }
    }

    /// Decrypts with the session's private key.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let keys = self.keys()?;
        match self.handler.operation() {
            OperationImpl::Encryption(op) => op.decrypt(keys, ciphertext),
            _ => Err(CryptoError::CapabilityMismatch("asymmetric encryption")),
        }
    }

    /// Signs with the session's private key.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let keys = self.keys()?;
        match self.handler.operation() {
            OperationImpl::Signature(op) => op.sign(keys, data),
            _ => Err(CryptoError::CapabilityMismatch("signatures")),
        }
    }

    /// Verifies against the session's public key. A mismatch is
    /// `Ok(false)`, not an error.
    pub fn verify(&self, signature: &[u8], data: &[u8]) -> Result<bool> {
        let keys = self.keys()?;
        match self.handler.operation() {
            OperationImpl::Signature(op) => op.verify(signature, keys, data),
            _ => Err(CryptoError::CapabilityMismatch("signatures")),
        }
    }

    /// Derives the shared secret with the other party's public key.
    pub fn derive_shared_secret(
        &self,
        peer_public_key: &[u8],
        size_hint: Option<usize>,
    ) -> Result<Vec<u8>> {
        let keys = self.keys()?;
        match self.handler.operation() {
            OperationImpl::KeyExchange(op) => {
                op.derive_shared_secret(keys, size_hint, peer_public_key)
            }
            _ => Err(CryptoError::CapabilityMismatch("key exchange")),
        }
    }
}
