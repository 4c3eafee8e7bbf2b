// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! AEAD handlers: `ring` and the RustCrypto `aead` family.
//!
//! The caller supplies the nonce as the IV, so encryption is deterministic
//! for a given (key, IV) pair; ciphertext is payload followed by the
//! 16-byte authentication tag.

use aes_gcm::aead::{Aead, KeyInit, Nonce};

use crate::catalog::SymmetricAlgorithm;
use crate::cipher::{check_iv_len, check_key_len};
use crate::error::{CryptoError, Result};
use crate::provider::SymmetricCipher;

const TAG_LEN: usize = 16;

/// AEAD via `ring::aead`.
pub struct RingAead {
    algorithm: SymmetricAlgorithm,
    aead: &'static ring::aead::Algorithm,
}

impl RingAead {
    pub fn new(algorithm: SymmetricAlgorithm) -> Option<Self> {
        let aead = match algorithm {
            SymmetricAlgorithm::Aes128Gcm => &ring::aead::AES_128_GCM,
            SymmetricAlgorithm::Aes256Gcm => &ring::aead::AES_256_GCM,
            SymmetricAlgorithm::ChaCha20Poly1305 => &ring::aead::CHACHA20_POLY1305,
            _ => return None,
        };
        Some(Self { algorithm, aead })
    }

    fn sealing_key(&self, key: &[u8]) -> Result<ring::aead::LessSafeKey> {
        let unbound = ring::aead::UnboundKey::new(self.aead, key)
            .map_err(|_| CryptoError::KeyError("invalid AEAD key".into()))?;
        Ok(ring::aead::LessSafeKey::new(unbound))
    }
}

impl SymmetricCipher for RingAead {
    fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_key_len(self.algorithm, key)?;
        check_iv_len(self.algorithm, iv)?;

        let sealing = self.sealing_key(key)?;
        let nonce = ring::aead::Nonce::try_assume_unique_for_key(iv)
            .map_err(|_| CryptoError::InvalidParameter("invalid nonce".into()))?;

        let mut in_out = plaintext.to_vec();
        sealing
            .seal_in_place_append_tag(nonce, ring::aead::Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::EncryptionFailed("seal failed".into()))?;
        Ok(in_out)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_key_len(self.algorithm, key)?;
        check_iv_len(self.algorithm, iv)?;

        if ciphertext.len() < TAG_LEN {
            return Err(CryptoError::DecryptionFailed("ciphertext too short".into()));
        }

        let opening = self.sealing_key(key)?;
        let nonce = ring::aead::Nonce::try_assume_unique_for_key(iv)
            .map_err(|_| CryptoError::InvalidParameter("invalid nonce".into()))?;

        let mut in_out = ciphertext.to_vec();
        let plaintext = opening
            .open_in_place(nonce, ring::aead::Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::DecryptionFailed("authentication failed".into()))?;
        Ok(plaintext.to_vec())
    }
}

type AeadFn = fn(&[u8], &[u8], &[u8]) -> Result<Vec<u8>>;

fn seal_with<A: Aead + KeyInit>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = A::new_from_slice(key)
        .map_err(|_| CryptoError::KeyError("invalid AEAD key".into()))?;
    cipher
        .encrypt(Nonce::<A>::from_slice(iv), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed("seal failed".into()))
}

fn open_with<A: Aead + KeyInit>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = A::new_from_slice(key)
        .map_err(|_| CryptoError::KeyError("invalid AEAD key".into()))?;
    cipher
        .decrypt(Nonce::<A>::from_slice(iv), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed("authentication failed".into()))
}

/// AEAD via the RustCrypto `aes-gcm` / `chacha20poly1305` crates. The
/// concrete cipher is fixed at construction.
pub struct RustCryptoAead {
    algorithm: SymmetricAlgorithm,
    seal: AeadFn,
    open: AeadFn,
}

impl RustCryptoAead {
    pub fn new(algorithm: SymmetricAlgorithm) -> Option<Self> {
        let (seal, open): (AeadFn, AeadFn) = match algorithm {
            SymmetricAlgorithm::Aes128Gcm => (
                seal_with::<aes_gcm::Aes128Gcm>,
                open_with::<aes_gcm::Aes128Gcm>,
            ),
            SymmetricAlgorithm::Aes256Gcm => (
                seal_with::<aes_gcm::Aes256Gcm>,
                open_with::<aes_gcm::Aes256Gcm>,
            ),
            SymmetricAlgorithm::ChaCha20Poly1305 => (
                seal_with::<chacha20poly1305::ChaCha20Poly1305>,
                open_with::<chacha20poly1305::ChaCha20Poly1305>,
            ),
            _ => return None,
        };
        Some(Self {
            algorithm,
            seal,
            open,
        })
    }
}

impl SymmetricCipher for RustCryptoAead {
    fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_key_len(self.algorithm, key)?;
        check_iv_len(self.algorithm, iv)?;
        (self.seal)(key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_key_len(self.algorithm, key)?;
        check_iv_len(self.algorithm, iv)?;
        if ciphertext.len() < TAG_LEN {
            return Err(CryptoError::DecryptionFailed("ciphertext too short".into()));
        }
        (self.open)(key, iv, ciphertext)
    }
}
