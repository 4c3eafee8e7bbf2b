// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! ECDSA signature handlers for both backends.
//!
//! Signatures are ASN.1 DER encoded. Private keys are PKCS#8 documents on
//! the ring side and raw scalars on the RustCrypto side; public keys are
//! uncompressed SEC1 points on both.

use rand::rngs::OsRng;
use signature::{Signer, Verifier};

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::provider::{
    ensure_key_matches, lookup_curve, AsymmetricHandler, CurveKeyGenerator, KeyGenerator,
    OperationImpl, SignatureScheme,
};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

const RING_CURVES: &[&str] = &["P-256", "P-384"];
const RUSTCRYPTO_CURVES: &[&str] = &["P-256", "P-384", "secp256k1"];

fn ring_algorithms(
    curve: &str,
) -> Option<(
    &'static ring::signature::EcdsaSigningAlgorithm,
    &'static ring::signature::EcdsaVerificationAlgorithm,
)> {
    match curve {
        "P-256" => Some((
            &ring::signature::ECDSA_P256_SHA256_ASN1_SIGNING,
            &ring::signature::ECDSA_P256_SHA256_ASN1,
        )),
        "P-384" => Some((
            &ring::signature::ECDSA_P384_SHA384_ASN1_SIGNING,
            &ring::signature::ECDSA_P384_SHA384_ASN1,
        )),
        _ => None,
    }
}

/// ECDSA over `ring::signature`.
pub struct RingEcdsa;

impl RingEcdsa {
    pub fn new() -> Self {
        Self
    }

    fn curve_of(&self, key_pair: &KeyPair) -> Result<&'static str> {
        match key_pair.spec() {
            KeySpec::Curve(curve) => Ok(curve),
            KeySpec::Bits(_) => Err(CryptoError::KeyError(
                "ECDSA key pairs are curve-based".into(),
            )),
        }
    }
}

impl Default for RingEcdsa {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveKeyGenerator for RingEcdsa {
    fn curves(&self) -> &'static [&'static str] {
        RING_CURVES
    }

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair> {
        let canonical = lookup_curve(self.curves(), curve)?;
        let (signing_alg, _) = ring_algorithms(canonical)
            .ok_or_else(|| CryptoError::KeyError(format!("no ring ECDSA for {canonical}")))?;

        let rng = ring::rand::SystemRandom::new();
        let pkcs8 = ring::signature::EcdsaKeyPair::generate_pkcs8(signing_alg, &rng)
            .map_err(|_| CryptoError::RandomFailed)?;
        let key_pair = ring::signature::EcdsaKeyPair::from_pkcs8(signing_alg, pkcs8.as_ref(), &rng)
            .map_err(|e| CryptoError::KeyError(format!("generated ECDSA key rejected: {e}")))?;

        use ring::signature::KeyPair as _;
        Ok(KeyPair::new(
            Provider::Ring,
            AsymmetricAlgorithm::Ecdsa,
            KeySpec::Curve(canonical),
            pkcs8.as_ref().to_vec(),
            key_pair.public_key().as_ref().to_vec(),
        ))
    }
}

impl SignatureScheme for RingEcdsa {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::Ring, AsymmetricAlgorithm::Ecdsa)?;
        let curve = self.curve_of(key_pair)?;
        let (signing_alg, _) = ring_algorithms(curve)
            .ok_or_else(|| CryptoError::KeyError(format!("no ring ECDSA for {curve}")))?;

        let rng = ring::rand::SystemRandom::new();
        let signer =
            ring::signature::EcdsaKeyPair::from_pkcs8(signing_alg, key_pair.private_key(), &rng)
                .map_err(|e| CryptoError::KeyError(format!("invalid ECDSA PKCS#8 key: {e}")))?;
        let signature = signer
            .sign(&rng, data)
            .map_err(|_| CryptoError::SigningFailed("ECDSA signing failed".into()))?;
        Ok(signature.as_ref().to_vec())
    }

    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool> {
        ensure_key_matches(key_pair, Provider::Ring, AsymmetricAlgorithm::Ecdsa)?;
        let curve = self.curve_of(key_pair)?;
        let (_, verification_alg) = ring_algorithms(curve)
            .ok_or_else(|| CryptoError::KeyError(format!("no ring ECDSA for {curve}")))?;

        let public_key =
            ring::signature::UnparsedPublicKey::new(verification_alg, key_pair.public_key());
        Ok(public_key.verify(data, signature).is_ok())
    }
}

impl AsymmetricHandler for RingEcdsa {
    fn provider(&self) -> Provider {
        Provider::Ring
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Ecdsa
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

/// ECDSA over the RustCrypto curve crates (P-256, P-384, secp256k1).
pub struct NistEcdsa;

impl NistEcdsa {
    pub fn new() -> Self {
        Self
    }

    fn curve_of(&self, key_pair: &KeyPair) -> Result<&'static str> {
        match key_pair.spec() {
            KeySpec::Curve(curve) => Ok(curve),
            KeySpec::Bits(_) => Err(CryptoError::KeyError(
                "ECDSA key pairs are curve-based".into(),
            )),
        }
    }
}

impl Default for NistEcdsa {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveKeyGenerator for NistEcdsa {
    fn curves(&self) -> &'static [&'static str] {
        RUSTCRYPTO_CURVES
    }

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair> {
        let canonical = lookup_curve(self.curves(), curve)?;
        let (private_key, public_key) = match canonical {
            "P-256" => {
                let signing_key = p256::ecdsa::SigningKey::random(&mut OsRng);
                let verifying_key = p256::ecdsa::VerifyingKey::from(&signing_key);
                (
                    signing_key.to_bytes().to_vec(),
                    verifying_key.to_encoded_point(false).as_bytes().to_vec(),
                )
            }
            "P-384" => {
                let signing_key = p384::ecdsa::SigningKey::random(&mut OsRng);
                let verifying_key = p384::ecdsa::VerifyingKey::from(&signing_key);
                (
                    signing_key.to_bytes().to_vec(),
                    verifying_key.to_encoded_point(false).as_bytes().to_vec(),
                )
            }
            _ => {
                let signing_key = k256::ecdsa::SigningKey::random(&mut OsRng);
                let verifying_key = k256::ecdsa::VerifyingKey::from(&signing_key);
                (
                    signing_key.to_bytes().to_vec(),
                    verifying_key.to_encoded_point(false).as_bytes().to_vec(),
                )
            }
        };
        Ok(KeyPair::new(
            Provider::RustCrypto,
            AsymmetricAlgorithm::Ecdsa,
            KeySpec::Curve(canonical),
            private_key,
            public_key,
        ))
    }
}

impl SignatureScheme for NistEcdsa {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Ecdsa)?;
        let signature = match self.curve_of(key_pair)? {
            "P-256" => {
                let signing_key = p256::ecdsa::SigningKey::from_slice(key_pair.private_key())
                    .map_err(|e| CryptoError::KeyError(format!("invalid P-256 key: {e}")))?;
                let signature: p256::ecdsa::Signature = signing_key.sign(data);
                signature.to_der().as_bytes().to_vec()
            }
            "P-384" => {
                let signing_key = p384::ecdsa::SigningKey::from_slice(key_pair.private_key())
                    .map_err(|e| CryptoError::KeyError(format!("invalid P-384 key: {e}")))?;
                let signature: p384::ecdsa::Signature = signing_key.sign(data);
                signature.to_der().as_bytes().to_vec()
            }
            "secp256k1" => {
                let signing_key = k256::ecdsa::SigningKey::from_slice(key_pair.private_key())
                    .map_err(|e| CryptoError::KeyError(format!("invalid secp256k1 key: {e}")))?;
                let signature: k256::ecdsa::Signature = signing_key.sign(data);
                signature.to_der().as_bytes().to_vec()
            }
            other => {
                return Err(CryptoError::KeyError(format!(
                    "no RustCrypto ECDSA for {other}"
                )))
            }
        };
        Ok(signature)
    }

    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Ecdsa)?;
        let verified = match self.curve_of(key_pair)? {
            "P-256" => {
                let verifying_key =
                    p256::ecdsa::VerifyingKey::from_sec1_bytes(key_pair.public_key())
                        .map_err(|e| CryptoError::KeyError(format!("invalid P-256 key: {e}")))?;
                match p256::ecdsa::Signature::from_der(signature) {
                    Ok(signature) => verifying_key.verify(data, &signature).is_ok(),
                    Err(_) => return Err(CryptoError::InvalidParameter(
                        "malformed ECDSA signature".into(),
                    )),
                }
            }
            "P-384" => {
                let verifying_key =
                    p384::ecdsa::VerifyingKey::from_sec1_bytes(key_pair.public_key())
                        .map_err(|e| CryptoError::KeyError(format!("invalid P-384 key: {e}")))?;
                match p384::ecdsa::Signature::from_der(signature) {
                    Ok(signature) => verifying_key.verify(data, &signature).is_ok(),
                    Err(_) => return Err(CryptoError::InvalidParameter(
                        "malformed ECDSA signature".into(),
                    )),
                }
            }
            "secp256k1" => {
                let verifying_key =
                    k256::ecdsa::VerifyingKey::from_sec1_bytes(key_pair.public_key())
                        .map_err(|e| CryptoError::KeyError(format!("invalid secp256k1 key: {e}")))?;
                match k256::ecdsa::Signature::from_der(signature) {
                    Ok(signature) => verifying_key.verify(data, &signature).is_ok(),
                    Err(_) => return Err(CryptoError::InvalidParameter(
                        "malformed ECDSA signature".into(),
                    )),
                }
            }
            other => {
                return Err(CryptoError::KeyError(format!(
                    "no RustCrypto ECDSA for {other}"
                )))
            }
        };
        Ok(verified)
    }
}

impl AsymmetricHandler for NistEcdsa {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Ecdsa
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
