// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! CBC block cipher handlers with PKCS#7 padding, over the RustCrypto
//! block cipher crates.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

use crate::catalog::SymmetricAlgorithm;
use crate::cipher::{check_iv_len, check_key_len};
use crate::error::{CryptoError, Result};
use crate::provider::SymmetricCipher;

type CbcFn = fn(&[u8], &[u8], &[u8]) -> Result<Vec<u8>>;

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CryptoError::KeyError("invalid key or IV length".into()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CryptoError::KeyError("invalid key or IV length".into()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed("invalid padding".into()))
}

/// CBC/PKCS#7 handler. The block cipher is fixed at construction; the
/// variable-key ciphers (Blowfish, CAST5, RC2) accept every length their
/// catalog entry lists.
pub struct BlockCipherCbc {
    algorithm: SymmetricAlgorithm,
    encrypt_fn: CbcFn,
    decrypt_fn: CbcFn,
}

impl BlockCipherCbc {
    pub fn new(algorithm: SymmetricAlgorithm) -> Option<Self> {
        let (encrypt_fn, decrypt_fn): (CbcFn, CbcFn) = match algorithm {
            SymmetricAlgorithm::Aes128Cbc => {
                (cbc_encrypt::<aes::Aes128>, cbc_decrypt::<aes::Aes128>)
            }
            SymmetricAlgorithm::Aes192Cbc => {
                (cbc_encrypt::<aes::Aes192>, cbc_decrypt::<aes::Aes192>)
            }
            SymmetricAlgorithm::Aes256Cbc => {
                (cbc_encrypt::<aes::Aes256>, cbc_decrypt::<aes::Aes256>)
            }
            SymmetricAlgorithm::DesCbc => (cbc_encrypt::<des::Des>, cbc_decrypt::<des::Des>),
            SymmetricAlgorithm::TripleDesCbc => {
                (cbc_encrypt::<des::TdesEde3>, cbc_decrypt::<des::TdesEde3>)
            }
            SymmetricAlgorithm::BlowfishCbc => (
                cbc_encrypt::<blowfish::Blowfish>,
                cbc_decrypt::<blowfish::Blowfish>,
            ),
            SymmetricAlgorithm::TwofishCbc => (
                cbc_encrypt::<twofish::Twofish>,
                cbc_decrypt::<twofish::Twofish>,
            ),
            SymmetricAlgorithm::Camellia128Cbc => (
                cbc_encrypt::<camellia::Camellia128>,
                cbc_decrypt::<camellia::Camellia128>,
            ),
            SymmetricAlgorithm::Camellia192Cbc => (
                cbc_encrypt::<camellia::Camellia192>,
                cbc_decrypt::<camellia::Camellia192>,
            ),
            SymmetricAlgorithm::Camellia256Cbc => (
                cbc_encrypt::<camellia::Camellia256>,
                cbc_decrypt::<camellia::Camellia256>,
            ),
            SymmetricAlgorithm::Cast5Cbc => {
                (cbc_encrypt::<cast5::Cast5>, cbc_decrypt::<cast5::Cast5>)
            }
            SymmetricAlgorithm::Rc2Cbc => (cbc_encrypt::<rc2::Rc2>, cbc_decrypt::<rc2::Rc2>),
            SymmetricAlgorithm::SerpentCbc => (
                cbc_encrypt::<serpent::Serpent>,
                cbc_decrypt::<serpent::Serpent>,
            ),
            SymmetricAlgorithm::IdeaCbc => (cbc_encrypt::<idea::Idea>, cbc_decrypt::<idea::Idea>),
            SymmetricAlgorithm::Sm4Cbc => (cbc_encrypt::<sm4::Sm4>, cbc_decrypt::<sm4::Sm4>),
            SymmetricAlgorithm::Aes128Gcm
            | SymmetricAlgorithm::Aes256Gcm
            | SymmetricAlgorithm::ChaCha20Poly1305 => return None,
        };
        Some(Self {
            algorithm,
            encrypt_fn,
            decrypt_fn,
        })
    }
}

impl SymmetricCipher for BlockCipherCbc {
    fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_key_len(self.algorithm, key)?;
        check_iv_len(self.algorithm, iv)?;
        (self.encrypt_fn)(key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_key_len(self.algorithm, key)?;
        check_iv_len(self.algorithm, iv)?;
        if ciphertext.is_empty() || ciphertext.len() % self.algorithm.iv_size() != 0 {
            return Err(CryptoError::DecryptionFailed(
                "ciphertext length is not a multiple of the block size".into(),
            ));
        }
        (self.decrypt_fn)(key, iv, ciphertext)
    }
}
