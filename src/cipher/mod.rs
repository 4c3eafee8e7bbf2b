// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Symmetric cipher handlers.
//!
//! Keys and IVs are caller-supplied bytes (already through the input format
//! layer); handlers validate lengths against the catalog metadata before
//! touching the backend.

pub mod aead;
pub mod block;

use std::sync::Arc;

use crate::catalog::SymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::provider::SymmetricCipher;
use crate::types::Provider;

pub use self::aead::{RingAead, RustCryptoAead};
pub use self::block::BlockCipherCbc;

/// Constructs the symmetric handler for a catalog entry.
pub(crate) fn construct(
    provider: Provider,
    algorithm: SymmetricAlgorithm,
) -> Option<Arc<dyn SymmetricCipher>> {
    match provider {
        Provider::Ring => RingAead::new(algorithm).map(|c| Arc::new(c) as Arc<dyn SymmetricCipher>),
        Provider::RustCrypto => {
            if algorithm.is_aead() {
                RustCryptoAead::new(algorithm).map(|c| Arc::new(c) as Arc<dyn SymmetricCipher>)
            } else {
                BlockCipherCbc::new(algorithm).map(|c| Arc::new(c) as Arc<dyn SymmetricCipher>)
            }
        }
    }
}

pub(crate) fn check_key_len(algorithm: SymmetricAlgorithm, key: &[u8]) -> Result<()> {
    let sizes = algorithm.key_sizes();
    if !sizes.contains(&(key.len() * 8)) {
        return Err(CryptoError::InvalidKeySize {
            expected: sizes,
            actual: key.len() * 8,
        });
    }
    Ok(())
}

pub(crate) fn check_iv_len(algorithm: SymmetricAlgorithm, iv: &[u8]) -> Result<()> {
    if iv.len() != algorithm.iv_size() {
        return Err(CryptoError::InvalidParameter(format!(
            "{algorithm} requires a {}-byte IV, got {}",
            algorithm.iv_size(),
            iv.len()
        )));
    }
    Ok(())
}
