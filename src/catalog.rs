// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Per-provider algorithm catalogs.
//!
//! Catalogs are closed, versioned with the release and enumerated in
//! declaration order. Availability is never inferred at runtime: adding an
//! algorithm means extending an enum and the matching catalog entry here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{OperationKind, Provider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
    Sha512_256,
    Sha3_256,
    Sha3_512,
    Sm3,
    Blake2b512,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    pub const fn output_size(&self) -> usize {
        match self {
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 | Self::Sm3 => 32,
            Self::Sha384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha512_256 => "SHA-512/256",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_512 => "SHA3-512",
            Self::Sm3 => "SM3",
            Self::Blake2b512 => "BLAKE2b-512",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymmetricAlgorithm {
    // AEAD modes
    Aes128Gcm,
    Aes256Gcm,
    ChaCha20Poly1305,

    // CBC modes with PKCS#7 padding
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    DesCbc,
    TripleDesCbc,
    BlowfishCbc,
    TwofishCbc,
    Camellia128Cbc,
    Camellia192Cbc,
    Camellia256Cbc,
    Cast5Cbc,
    Rc2Cbc,
    SerpentCbc,
    IdeaCbc,
    Sm4Cbc,
}

impl SymmetricAlgorithm {
    /// Legal key lengths in bits, in ascending order.
    pub const fn key_sizes(&self) -> &'static [usize] {
        match self {
            Self::Aes128Gcm | Self::Aes128Cbc => &[128],
            Self::Aes192Cbc => &[192],
            Self::Aes256Gcm | Self::Aes256Cbc | Self::ChaCha20Poly1305 => &[256],
            Self::DesCbc => &[64],
            Self::TripleDesCbc => &[192],
            Self::BlowfishCbc => &[128, 192, 256, 448],
            Self::TwofishCbc | Self::SerpentCbc => &[128, 192, 256],
            Self::Camellia128Cbc => &[128],
            Self::Camellia192Cbc => &[192],
            Self::Camellia256Cbc => &[256],
            Self::Cast5Cbc => &[40, 80, 128],
            Self::Rc2Cbc => &[40, 64, 128],
            Self::IdeaCbc | Self::Sm4Cbc => &[128],
        }
    }

    /// Required IV/nonce length in bytes: the block size for CBC modes, a
    /// 96-bit nonce for the AEAD modes.
    pub const fn iv_size(&self) -> usize {
        match self {
            Self::Aes128Gcm | Self::Aes256Gcm | Self::ChaCha20Poly1305 => 12,
            Self::Aes128Cbc
            | Self::Aes192Cbc
            | Self::Aes256Cbc
            | Self::TwofishCbc
            | Self::Camellia128Cbc
            | Self::Camellia192Cbc
            | Self::Camellia256Cbc
            | Self::SerpentCbc
            | Self::Sm4Cbc => 16,
            Self::DesCbc
            | Self::TripleDesCbc
            | Self::BlowfishCbc
            | Self::Cast5Cbc
            | Self::Rc2Cbc
            | Self::IdeaCbc => 8,
        }
    }

    pub const fn is_aead(&self) -> bool {
        matches!(
            self,
            Self::Aes128Gcm | Self::Aes256Gcm | Self::ChaCha20Poly1305
        )
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aes128Gcm => "AES-128-GCM",
            Self::Aes256Gcm => "AES-256-GCM",
            Self::ChaCha20Poly1305 => "ChaCha20-Poly1305",
            Self::Aes128Cbc => "AES-128-CBC",
            Self::Aes192Cbc => "AES-192-CBC",
            Self::Aes256Cbc => "AES-256-CBC",
            Self::DesCbc => "DES-CBC",
            Self::TripleDesCbc => "3DES-CBC",
            Self::BlowfishCbc => "Blowfish-CBC",
            Self::TwofishCbc => "Twofish-CBC",
            Self::Camellia128Cbc => "Camellia-128-CBC",
            Self::Camellia192Cbc => "Camellia-192-CBC",
            Self::Camellia256Cbc => "Camellia-256-CBC",
            Self::Cast5Cbc => "CAST5-CBC",
            Self::Rc2Cbc => "RC2-CBC",
            Self::SerpentCbc => "Serpent-CBC",
            Self::IdeaCbc => "IDEA-CBC",
            Self::Sm4Cbc => "SM4-CBC",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsymmetricAlgorithm {
    Rsa,
    Dsa,
    Ecdsa,
    Ed25519,
    Ecdh,
    X25519,
}

impl fmt::Display for AsymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rsa => "RSA",
            Self::Dsa => "DSA",
            Self::Ecdsa => "ECDSA",
            Self::Ed25519 => "Ed25519",
            Self::Ecdh => "ECDH",
            Self::X25519 => "X25519",
        };
        write!(f, "{name}")
    }
}

/// The per-provider catalog tables.
pub struct Catalog;

impl Catalog {
    pub const fn hashes(provider: Provider) -> &'static [HashAlgorithm] {
        match provider {
            Provider::Ring => &[
                HashAlgorithm::Sha256,
                HashAlgorithm::Sha384,
                HashAlgorithm::Sha512,
                HashAlgorithm::Sha512_256,
            ],
            Provider::RustCrypto => &[
                HashAlgorithm::Sha256,
                HashAlgorithm::Sha384,
                HashAlgorithm::Sha512,
                HashAlgorithm::Sha3_256,
                HashAlgorithm::Sha3_512,
                HashAlgorithm::Sm3,
                HashAlgorithm::Blake2b512,
            ],
        }
    }

    pub const fn symmetric(provider: Provider) -> &'static [SymmetricAlgorithm] {
        match provider {
            Provider::Ring => &[
                SymmetricAlgorithm::Aes128Gcm,
                SymmetricAlgorithm::Aes256Gcm,
                SymmetricAlgorithm::ChaCha20Poly1305,
            ],
            Provider::RustCrypto => &[
                SymmetricAlgorithm::Aes128Gcm,
                SymmetricAlgorithm::Aes256Gcm,
                SymmetricAlgorithm::ChaCha20Poly1305,
                SymmetricAlgorithm::Aes128Cbc,
                SymmetricAlgorithm::Aes192Cbc,
                SymmetricAlgorithm::Aes256Cbc,
                SymmetricAlgorithm::DesCbc,
                SymmetricAlgorithm::TripleDesCbc,
                SymmetricAlgorithm::BlowfishCbc,
                SymmetricAlgorithm::TwofishCbc,
                SymmetricAlgorithm::Camellia128Cbc,
                SymmetricAlgorithm::Camellia192Cbc,
                SymmetricAlgorithm::Camellia256Cbc,
                SymmetricAlgorithm::Cast5Cbc,
                SymmetricAlgorithm::Rc2Cbc,
                SymmetricAlgorithm::SerpentCbc,
                SymmetricAlgorithm::IdeaCbc,
                SymmetricAlgorithm::Sm4Cbc,
            ],
        }
    }

    /// Asymmetric algorithms legal for an operation kind.
    ///
    /// `ring` exposes no RSA key generation, no RSA encryption, no DSA and
    /// no storable ECDH private keys, so its encryption and key-exchange
    /// catalogs are empty rather than borrowing another backend's
    /// implementation behind the provider's name.
    pub const fn asymmetric(
        provider: Provider,
        operation: OperationKind,
    ) -> &'static [AsymmetricAlgorithm] {
        match (provider, operation) {
            (Provider::Ring, OperationKind::Encryption) => &[],
            (Provider::Ring, OperationKind::Signature) => {
                &[AsymmetricAlgorithm::Ecdsa, AsymmetricAlgorithm::Ed25519]
            }
            (Provider::Ring, OperationKind::KeyExchange) => &[],
            (Provider::RustCrypto, OperationKind::Encryption) => &[AsymmetricAlgorithm::Rsa],
            (Provider::RustCrypto, OperationKind::Signature) => &[
                AsymmetricAlgorithm::Rsa,
                AsymmetricAlgorithm::Dsa,
                AsymmetricAlgorithm::Ecdsa,
                AsymmetricAlgorithm::Ed25519,
            ],
            (Provider::RustCrypto, OperationKind::KeyExchange) => {
                &[AsymmetricAlgorithm::Ecdh, AsymmetricAlgorithm::X25519]
            }
        }
    }
}
