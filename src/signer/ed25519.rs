// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Ed25519 signature handlers for both backends.

use ed25519_dalek::{Signer, Verifier};
use rand::rngs::OsRng;

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::provider::{
    ensure_key_matches, lookup_curve, AsymmetricHandler, CurveKeyGenerator, KeyGenerator,
    OperationImpl, SignatureScheme,
};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

const CURVES: &[&str] = &["Ed25519"];

/// Ed25519 over `ring::signature`. Private keys are ring PKCS#8 documents.
pub struct RingEd25519;

impl RingEd25519 {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RingEd25519 {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveKeyGenerator for RingEd25519 {
    fn curves(&self) -> &'static [&'static str] {
        CURVES
    }

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair> {
        let canonical = lookup_curve(self.curves(), curve)?;
        let rng = ring::rand::SystemRandom::new();
        let pkcs8 = ring::signature::Ed25519KeyPair::generate_pkcs8(&rng)
            .map_err(|_| CryptoError::RandomFailed)?;
        let key_pair = ring::signature::Ed25519KeyPair::from_pkcs8(pkcs8.as_ref())
            .map_err(|e| CryptoError::KeyError(format!("generated Ed25519 key rejected: {e}")))?;

        use ring::signature::KeyPair as _;
        Ok(KeyPair::new(
            Provider::Ring,
            AsymmetricAlgorithm::Ed25519,
            KeySpec::Curve(canonical),
            pkcs8.as_ref().to_vec(),
            key_pair.public_key().as_ref().to_vec(),
        ))
    }
}

impl SignatureScheme for RingEd25519 {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::Ring, AsymmetricAlgorithm::Ed25519)?;
        let signer = ring::signature::Ed25519KeyPair::from_pkcs8(key_pair.private_key())
            .map_err(|e| CryptoError::KeyError(format!("invalid Ed25519 PKCS#8 key: {e}")))?;
        Ok(signer.sign(data).as_ref().to_vec())
    }

    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool> {
        ensure_key_matches(key_pair, Provider::Ring, AsymmetricAlgorithm::Ed25519)?;
        let public_key = ring::signature::UnparsedPublicKey::new(
            &ring::signature::ED25519,
            key_pair.public_key(),
        );
        Ok(public_key.verify(data, signature).is_ok())
    }
}

impl AsymmetricHandler for RingEd25519 {
    fn provider(&self) -> Provider {
        Provider::Ring
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Ed25519
    }

    fn operation_kind(&self) -> OperationKind {
        OperationKind::Signature
    }

    fn generator(&self) -> KeyGenerator<'_> {
        KeyGenerator::Curve(self)
    }

    fn operation(&self) -> OperationImpl<'_> {
        OperationImpl::Signature(self)
    }
}

/// Ed25519 over `ed25519-dalek`. Private keys are 32-byte seeds.
pub struct DalekEd25519;

impl DalekEd25519 {
    pub fn new() -> Self {
        Self
    }

    fn signing_key(&self, key_pair: &KeyPair) -> Result<ed25519_dalek::SigningKey> {
        let seed: [u8; 32] = key_pair
            .private_key()
            .try_into()
            .map_err(|_| CryptoError::KeyError("Ed25519 private keys are 32 bytes".into()))?;
        Ok(ed25519_dalek::SigningKey::from_bytes(&seed))
    }
}

impl Default for DalekEd25519 {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveKeyGenerator for DalekEd25519 {
    fn curves(&self) -> &'static [&'static str] {
        CURVES
    }

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair> {
        let canonical = lookup_curve(self.curves(), curve)?;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut OsRng);
        Ok(KeyPair::new(
            Provider::RustCrypto,
            AsymmetricAlgorithm::Ed25519,
            KeySpec::Curve(canonical),
            signing_key.to_bytes().to_vec(),
            signing_key.verifying_key().to_bytes().to_vec(),
        ))
    }
}

impl SignatureScheme for DalekEd25519 {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Ed25519)?;
        let signing_key = self.signing_key(key_pair)?;
        Ok(signing_key.sign(data).to_bytes().to_vec())
    }

    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Ed25519)?;
        let public: [u8; 32] = key_pair
            .public_key()
            .try_into()
            .map_err(|_| CryptoError::KeyError("Ed25519 public keys are 32 bytes".into()))?;
        let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(&public)
            .map_err(|e| CryptoError::KeyError(format!("invalid Ed25519 public key: {e}")))?;
        let signature = ed25519_dalek::Signature::from_slice(signature).map_err(|_| {
            CryptoError::InvalidParameter("malformed Ed25519 signature".into())
        })?;
        Ok(verifying_key.verify(data, &signature).is_ok())
    }
}

impl AsymmetricHandler for DalekEd25519 {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Ed25519
    }

    fn operation_kind(&self) -> OperationKind {
        OperationKind::Signature
    }

    fn generator(&self) -> KeyGenerator<'_> {
        KeyGenerator::Curve(self)
    }

    fn operation(&self) -> OperationImpl<'_> {
        OperationImpl::Signature(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_both_backends() {
        let handlers: [&dyn CurveKeyGenerator; 2] = [&RingEd25519, &DalekEd25519];
        let schemes: [&dyn SignatureScheme; 2] = [&RingEd25519, &DalekEd25519];
        for (generator, scheme) in handlers.iter().zip(schemes.iter()) {
            let key_pair = generator.generate_keypair("Ed25519").unwrap();
            let signature = scheme.sign(&key_pair, b"message").unwrap();
            assert!(scheme.verify(&signature, &key_pair, b"message").unwrap());
            assert!(!scheme.verify(&signature, &key_pair, b"other").unwrap());
        }
    }

    #[test]
    fn test_backends_cross_verify() {
        // Ed25519 signatures are raw 64-byte values, so a dalek signature
        // over a dalek public key must verify through ring's verifier too.
        let dalek = DalekEd25519::new();
        let key_pair = dalek.generate_keypair("Ed25519").unwrap();
        let signature = dalek.sign(&key_pair, b"shared format").unwrap();

        let public_key = ring::signature::UnparsedPublicKey::new(
            &ring::signature::ED25519,
            key_pair.public_key(),
        );
        assert!(public_key.verify(b"shared format", &signature).is_ok());
    }

    #[test]
    fn test_malformed_signature_is_error_not_false() {
        let dalek = DalekEd25519::new();
        let key_pair = dalek.generate_keypair("Ed25519").unwrap();
        let result = dalek.verify(b"way too short", &key_pair, b"message");
        assert!(matches!(result, Err(CryptoError::InvalidParameter(_))));
    }

    #[test]
    fn test_unknown_curve_rejected() {
        let result = DalekEd25519::new().generate_keypair("Curve448");
        assert!(matches!(result, Err(CryptoError::UnknownCurve { .. })));
    }
}
