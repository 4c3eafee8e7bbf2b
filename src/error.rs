// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The algorithm is not part of the provider's catalog. This is a
    /// configuration-level failure, not a user input error.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Invalid key size: expected one of {expected:?} bits, got {actual}")]
    InvalidKeySize {
        expected: &'static [usize],
        actual: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Handler does not support {0}")]
    CapabilityMismatch(&'static str),

    #[error("Unsupported key size: {requested} bits (supported: {supported:?})")]
    UnsupportedKeySize {
        requested: usize,
        supported: &'static [usize],
    },

    #[error("Unknown curve: {requested} (supported: {supported:?})")]
    UnknownCurve {
        requested: String,
        supported: &'static [&'static str],
    },

    #[error("Keys have not been generated")]
    KeysNotGenerated,

    #[error("Key exchange failed: {0}")]
    KeyExchangeFailed(String),

    #[error("Random generator failure")]
    RandomFailed,
}

pub type Result<T> = std::result::Result<T, CryptoError>;
