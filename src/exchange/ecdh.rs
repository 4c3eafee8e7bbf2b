// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! ECDH key agreement over the RustCrypto curve crates.
//!
//! Private keys are raw scalars, public keys uncompressed SEC1 points. A
//! peer key that does not parse on the key pair's curve is a parameter
//! mismatch, reported as `KeyExchangeFailed`.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::exchange::expand_secret;
use crate::provider::{
    ensure_key_matches, lookup_curve, AsymmetricHandler, CurveKeyGenerator, KeyExchange,
    KeyGenerator, OperationImpl,
};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

const CURVES: &[&str] = &["P-256", "P-384", "secp256k1"];

pub struct EcdhAgreement;

impl EcdhAgreement {
    pub fn new() -> Self {
        Self
    }

    fn curve_of(&self, key_pair: &KeyPair) -> Result<&'static str> {
        match key_pair.spec() {
            KeySpec::Curve(curve) => Ok(curve),
            KeySpec::Bits(_) => Err(CryptoError::KeyError(
                "ECDH key pairs are curve-based".into(),
            )),
        }
    }
}

impl Default for EcdhAgreement {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveKeyGenerator for EcdhAgreement {
    fn curves(&self) -> &'static [&'static str] {
        CURVES
    }

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair> {
        let canonical = lookup_curve(self.curves(), curve)?;
        let (private_key, public_key) = match canonical {
            "P-256" => {
                let secret = p256::SecretKey::random(&mut OsRng);
                let public = secret.public_key();
                (
                    secret.to_bytes().to_vec(),
                    public.to_encoded_point(false).as_bytes().to_vec(),
                )
            }
            "P-384" => {
                let secret = p384::SecretKey::random(&mut OsRng);
                let public = secret.public_key();
                (
                    secret.to_bytes().to_vec(),
                    public.to_encoded_point(false).as_bytes().to_vec(),
                )
            }
            _ => {
                let secret = k256::SecretKey::random(&mut OsRng);
                let public = secret.public_key();
                (
                    secret.to_bytes().to_vec(),
                    public.to_encoded_point(false).as_bytes().to_vec(),
                )
            }
        };
        Ok(KeyPair::new(
            Provider::RustCrypto,
            AsymmetricAlgorithm::Ecdh,
            KeySpec::Curve(canonical),
            private_key,
            public_key,
        ))
    }
}

impl KeyExchange for EcdhAgreement {
    fn derive_shared_secret(
        &self,
        key_pair: &KeyPair,
        size_hint: Option<usize>,
        peer_public_key: &[u8],
    ) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Ecdh)?;
        let curve = self.curve_of(key_pair)?;
        let raw = match curve {
            "P-256" => {
                let secret = p256::SecretKey::from_slice(key_pair.private_key())
                    .map_err(|e| CryptoError::KeyError(format!("invalid P-256 key: {e}")))?;
                let peer = p256::PublicKey::from_sec1_bytes(peer_public_key).map_err(|_| {
                    CryptoError::KeyExchangeFailed("peer public key is not on P-256".into())
                })?;
                p256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine())
                    .raw_secret_bytes()
                    .to_vec()
            }
            "P-384" => {
                let secret = p384::SecretKey::from_slice(key_pair.private_key())
                    .map_err(|e| CryptoError::KeyError(format!("invalid P-384 key: {e}")))?;
                let peer = p384::PublicKey::from_sec1_bytes(peer_public_key).map_err(|_| {
                    CryptoError::KeyExchangeFailed("peer public key is not on P-384".into())
                })?;
                p384::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine())
                    .raw_secret_bytes()
                    .to_vec()
            }
            "secp256k1" => {
                let secret = k256::SecretKey::from_slice(key_pair.private_key())
                    .map_err(|e| CryptoError::KeyError(format!("invalid secp256k1 key: {e}")))?;
                let peer = k256::PublicKey::from_sec1_bytes(peer_public_key).map_err(|_| {
                    CryptoError::KeyExchangeFailed("peer public key is not on secp256k1".into())
                })?;
                k256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine())
                    .raw_secret_bytes()
                    .to_vec()
            }
            other => {
                return Err(CryptoError::KeyError(format!(
                    "no RustCrypto ECDH for {other}"
                )))
            }
        };
        expand_secret(&raw, size_hint)
    }
}

impl AsymmetricHandler for EcdhAgreement {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Ecdh
    }

    fn operation_kind(&self) -> OperationKind {
        OperationKind::KeyExchange
    }

    fn generator(&self) -> KeyGenerator<'_> {
        KeyGenerator::Curve(self)
    }

    fn operation(&self) -> OperationImpl<'_> {
        OperationImpl::KeyExchange(self)
    }
}
