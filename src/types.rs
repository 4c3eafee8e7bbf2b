// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::catalog::AsymmetricAlgorithm;

/// Cryptography backend selectable per algorithm family.
///
/// The two backends offer overlapping but not identical catalogs: `Ring` is
/// the lean, audited set, `RustCrypto` the broad pure-Rust set. An algorithm
/// only ever resolves within the catalog of the provider it was listed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Ring,
    RustCrypto,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ring => "ring",
            Self::RustCrypto => "RustCrypto",
        };
        write!(f, "{name}")
    }
}

/// Asymmetric operation families. Closed set; there is no "unknown
/// operation" failure path anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Encryption,
    Signature,
    KeyExchange,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Encryption,
        OperationKind::Signature,
        OperationKind::KeyExchange,
    ];
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Encryption => "encryption",
            Self::Signature => "signature",
            Self::KeyExchange => "key exchange",
        };
        write!(f, "{name}")
    }
}

/// How a raw user-supplied string is interpreted as bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataFormat {
    PlainText,
    HexString,
    File,
}

/// Key generation parameter. Exactly one variant is meaningful per
/// algorithm; which one is fixed by the handler's generation capability,
/// not by a runtime flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySpec {
    /// Modulus/parameter length in bits (RSA, DSA).
    Bits(usize),
    /// Canonical curve name drawn from the handler's curve list.
    Curve(&'static str),
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits(bits) => write!(f, "{bits} bits"),
            Self::Curve(curve) => write!(f, "{curve}"),
        }
    }
}

/// Generated key material, tagged with the provider, algorithm and key spec
/// that produced it.
///
/// A `KeyPair` is only constructed by a handler's key-generation capability
/// and is only accepted back by handlers whose tags match; feeding it to a
/// different algorithm or provider is rejected with `KeyError`. The private
/// half is zeroized on drop.
pub struct KeyPair {
    provider: Provider,
    algorithm: AsymmetricAlgorithm,
    spec: KeySpec,
    private_key: Zeroizing<Vec<u8>>,
    public_key: Vec<u8>,
}

impl KeyPair {
    pub(crate) fn new(
        provider: Provider,
        algorithm: AsymmetricAlgorithm,
        spec: KeySpec,
        private_key: Vec<u8>,
        public_key: Vec<u8>,
    ) -> Self {
        Self {
            provider,
            algorithm,
            spec,
            private_key: Zeroizing::new(private_key),
            public_key,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn algorithm(&self) -> AsymmetricAlgorithm {
        self.algorithm
    }

    pub fn spec(&self) -> KeySpec {
        self.spec
    }

    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    // Never print private key material.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("provider", &self.provider)
            .field("algorithm", &self.algorithm)
            .field("spec", &self.spec)
            .field("private_key_len", &self.private_key.len())
            .field("public_key_len", &self.public_key.len())
            .finish()
    }
}
