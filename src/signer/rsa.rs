// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! RSA key generation and PKCS#1 v1.5 signatures over the `rsa` crate.
//!
//! Keys are PKCS#8 DER (private) and SPKI DER (public); the encryption
//! handler in `crate::encrypt` reuses the same generation path.

use pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;
use rsa::pkcs1v15;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use signature::{SignatureEncoding, Signer, Verifier};

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::provider::{
    check_generation_size, ensure_key_matches, AsymmetricHandler, KeyGenerator, OperationImpl,
    SignatureScheme, SizeKeyGenerator,
};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

pub(crate) const RSA_KEY_SIZES: &[usize] = &[2048, 3072, 4096];

/// Generates an RSA key pair tagged for the given algorithm slot. Blocking
/// by design; large moduli take a while.
pub(crate) fn generate_rsa_keypair(bits: usize) -> Result<(Vec<u8>, Vec<u8>)> {
    check_generation_size(RSA_KEY_SIZES, bits)?;
    let mut rng = OsRng;
    let private = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| CryptoError::KeyError(format!("RSA key generation failed: {e}")))?;
    let public = RsaPublicKey::from(&private);

    let private_der = private
        .to_pkcs8_der()
        .map_err(|e| CryptoError::KeyError(format!("cannot encode RSA private key: {e}")))?;
    let public_der = public
        .to_public_key_der()
        .map_err(|e| CryptoError::KeyError(format!("cannot encode RSA public key: {e}")))?;
    Ok((
        private_der.as_bytes().to_vec(),
        public_der.as_bytes().to_vec(),
    ))
}

pub(crate) fn decode_private(key_pair: &KeyPair) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(key_pair.private_key())
        .map_err(|e| CryptoError::KeyError(format!("invalid RSA private key: {e}")))
}

pub(crate) fn decode_public(key_pair: &KeyPair) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(key_pair.public_key())
        .map_err(|e| CryptoError::KeyError(format!("invalid RSA public key: {e}")))
}

/// RSA PKCS#1 v1.5 signatures with SHA-256.
pub struct RsaSignature;

impl RsaSignature {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RsaSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeKeyGenerator for RsaSignature {
    fn key_sizes(&self) -> &'static [usize] {
        RSA_KEY_SIZES
    }

    fn generate_keypair(&self, bits: usize) -> Result<KeyPair> {
        let (private_key, public_key) = generate_rsa_keypair(bits)?;
        Ok(KeyPair::new(
            Provider::RustCrypto,
            AsymmetricAlgorithm::Rsa,
            KeySpec::Bits(bits),
            private_key,
            public_key,
        ))
    }
}

impl SignatureScheme for RsaSignature {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Rsa)?;
        let signing_key = pkcs1v15::SigningKey::<Sha256>::new(decode_private(key_pair)?);
        let signature = signing_key
            .try_sign(data)
            .map_err(|e| CryptoError::SigningFailed(format!("RSA signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Rsa)?;
        let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(decode_public(key_pair)?);
        let signature = pkcs1v15::Signature::try_from(signature).map_err(|_| {
            CryptoError::InvalidParameter("malformed RSA signature".into())
        })?;
        Ok(verifying_key.verify(data, &signature).is_ok())
    }
}

impl AsymmetricHandler for RsaSignature {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Rsa
    }

    fn operation_kind(&self) -> OperationKind {
        OperationKind::Signature
    }

    fn generator(&self) -> KeyGenerator<'_> {
        KeyGenerator::Size(self)
    }

    fn operation(&self) -> OperationImpl<'_> {
        OperationImpl::Signature(self)
    }
}
