// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! RSA-OAEP encryption over the `rsa` crate, sharing the key generation
//! path with the signature handler.

use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::provider::{
    ensure_key_matches, AsymmetricEncryptor, AsymmetricHandler, KeyGenerator, OperationImpl,
    SizeKeyGenerator,
};
use crate::signer::rsa::{decode_private, decode_public, generate_rsa_keypair, RSA_KEY_SIZES};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

/// RSA-OAEP with SHA-256. Plaintext is limited to the modulus size minus
/// the OAEP overhead (190 bytes at 2048 bits); the caller sees
/// `EncryptionFailed` beyond that.
pub struct RsaOaep;

impl RsaOaep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RsaOaep {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeKeyGenerator for RsaOaep {
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

impl AsymmetricEncryptor for RsaOaep {
    fn encrypt(&self, key_pair: &KeyPair, plaintext: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Rsa)?;
        let public = decode_public(key_pair)?;
        public
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| CryptoError::EncryptionFailed(format!("RSA-OAEP encryption failed: {e}")))
    }

    fn decrypt(&self, key_pair: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::Rsa)?;
        let private = decode_private(key_pair)?;
        private
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed("RSA-OAEP decryption failed".into()))
    }
}

impl AsymmetricHandler for RsaOaep {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::Rsa
    }

    fn operation_kind(&self) -> OperationKind {
        OperationKind::Encryption
    }

    fn generator(&self) -> KeyGenerator<'_> {
        KeyGenerator::Size(self)
    }

    fn operation(&self) -> OperationImpl<'_> {
        OperationImpl::Encryption(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let handler = RsaOaep::new();
        let key_pair = handler.generate_keypair(2048).unwrap();
        let ciphertext = handler.encrypt(&key_pair, b"secret message").unwrap();
        assert_ne!(ciphertext.as_slice(), b"secret message");
        assert_eq!(
            handler.decrypt(&key_pair, &ciphertext).unwrap(),
            b"secret message"
        );
    }

    #[test]
    fn test_wrong_private_key_fails() {
        let handler = RsaOaep::new();
        let alice = handler.generate_keypair(2048).unwrap();
        let mallory = handler.generate_keypair(2048).unwrap();
        let ciphertext = handler.encrypt(&alice, b"for alice only").unwrap();
        let result = handler.decrypt(&mallory, &ciphertext);
        assert!(matches!(result, Err(CryptoError::DecryptionFailed(_))));
    }

    #[test]
    fn test_oversized_plaintext_rejected() {
        let handler = RsaOaep::new();
        let key_pair = handler.generate_keypair(2048).unwrap();
        let result = handler.encrypt(&key_pair, &[0u8; 256]);
        assert!(matches!(result, Err(CryptoError::EncryptionFailed(_))));
    }
}
