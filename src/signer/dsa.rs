// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! DSA signatures over the `dsa` crate, with SHA-256.

use dsa::{Components, KeySize};
use pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use signature::{DigestVerifier, RandomizedDigestSigner, SignatureEncoding};

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::provider::{
    ensure_key_matches, AsymmetricHandler, KeyGenerator, OperationImpl, SignatureScheme,
    SizeKeyGenerator,
};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

const DSA_KEY_SIZES: &[usize] = &[1024, 2048, 3072];

fn key_size_for(bits: usize) -> Result<KeySize> {
    match bits {
        1024 => Ok(KeySize::DSA_1024_160),
        2048 => Ok(KeySize::DSA_2048_256),
        3072 => Ok(KeySize::DSA_3072_256),
        _ => Err(CryptoError::UnsupportedKeySize {
            requested: bits,
            supported: DSA_KEY_SIZES,
        }),
    }
}

pub struct DsaSignature;

impl DsaSignature {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DsaSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeKeyGenerator for DsaSignature {
    fn key_sizes(&self) -> &'static [usize] {
        DSA_KEY_SIZES
    }

    fn generate_keypair(&self, bits: usize) -> Result<KeyPair> {
        let key_size = key_size_for(bits)?;
        let mut rng = OsRng;
        let components = Components::generate(&mut rng, key_size);
        let signing_key = dsa::SigningKey::generate(&mut rng, components);
        let verifying_key = signing_key.verifying_key();

        let private_der = signing_key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::KeyError(format!("cannot encode DSA private key: {e}")))?;
        let public_der = verifying_key
            .to_public_key_der()
            .map_err(|e| CryptoError::KeyError(format!("cannot encode DSA public key: {e}")))?;

        Ok(KeyPair::new(
            Provider::RustCrypto,
            AsymmetricAlgorithm::Dsa,
            KeySpec::Bits(bits),
            private_der.as_bytes().to_vec(),
            public_der.as_bytes().to_vec(),
        ))
    }
}

impl SignatureScheme for DsaSignature {
    fn sign(&self, key_pair: &KeyPair, data: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Dsa)?;
        let signing_key = dsa::SigningKey::from_pkcs8_der(key_pair.private_key())
            .map_err(|e| CryptoError::KeyError(format!("invalid DSA private key: {e}")))?;
        let signature = signing_key
            .try_sign_digest_with_rng(&mut OsRng, Sha256::new_with_prefix(data))
            .map_err(|e| CryptoError::SigningFailed(format!("DSA signing failed: {e}")))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, signature: &[u8], key_pair: &KeyPair, data: &[u8]) -> Result<bool> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Dsa)?;
        let verifying_key = dsa::VerifyingKey::from_public_key_der(key_pair.public_key())
            .map_err(|e| CryptoError::KeyError(format!("invalid DSA public key: {e}")))?;
        let signature = dsa::Signature::try_from(signature).map_err(|_| {
            CryptoError::InvalidParameter("malformed DSA signature".into())
        })?;
        Ok(verifying_key
            .verify_digest(Sha256::new_with_prefix(data), &signature)
            .is_ok())
    }
}

impl AsymmetricHandler for DsaSignature {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Dsa
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
