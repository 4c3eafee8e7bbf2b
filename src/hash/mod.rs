// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Hash handlers for both backends.

use std::sync::Arc;

use sha2::Digest;

use crate::catalog::HashAlgorithm;
use crate::provider::Hasher;
use crate::types::Provider;

/// Constructs the hash handler for a catalog entry. `None` means the
/// backend has no implementation for the algorithm; the registry
/// self-check treats that as a configuration error.
pub(crate) fn construct(provider: Provider, algorithm: HashAlgorithm) -> Option<Arc<dyn Hasher>> {
    match provider {
        Provider::Ring => RingHasher::new(algorithm).map(|h| Arc::new(h) as Arc<dyn Hasher>),
        Provider::RustCrypto => {
            RustCryptoHasher::new(algorithm).map(|h| Arc::new(h) as Arc<dyn Hasher>)
        }
    }
}

/// Digests via `ring::digest`.
pub struct RingHasher {
    algorithm: HashAlgorithm,
    digest: &'static ring::digest::Algorithm,
}

impl RingHasher {
    pub fn new(algorithm: HashAlgorithm) -> Option<Self> {
        let digest = match algorithm {
            HashAlgorithm::Sha256 => &ring::digest::SHA256,
            HashAlgorithm::Sha384 => &ring::digest::SHA384,
            HashAlgorithm::Sha512 => &ring::digest::SHA512,
            HashAlgorithm::Sha512_256 => &ring::digest::SHA512_256,
            _ => return None,
        };
        Some(Self { algorithm, digest })
    }
}

impl Hasher for RingHasher {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn compute(&self, data: &[u8]) -> Vec<u8> {
        ring::digest::digest(self.digest, data).as_ref().to_vec()
    }
}

/// Digests via the RustCrypto `Digest` implementations. The concrete
/// digest is fixed at construction, so there is no unreachable dispatch
/// arm at call time.
pub struct RustCryptoHasher {
    algorithm: HashAlgorithm,
    digest_fn: fn(&[u8]) -> Vec<u8>,
}

impl RustCryptoHasher {
    pub fn new(algorithm: HashAlgorithm) -> Option<Self> {
        let digest_fn: fn(&[u8]) -> Vec<u8> = match algorithm {
            HashAlgorithm::Sha256 => |data| sha2::Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => |data| sha2::Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => |data| sha2::Sha512::digest(data).to_vec(),
            HashAlgorithm::Sha3_256 => |data| sha3::Sha3_256::digest(data).to_vec(),
            HashAlgorithm::Sha3_512 => |data| sha3::Sha3_512::digest(data).to_vec(),
            HashAlgorithm::Sm3 => |data| sm3::Sm3::digest(data).to_vec(),
            HashAlgorithm::Blake2b512 => |data| blake2::Blake2b512::digest(data).to_vec(),
            HashAlgorithm::Sha512_256 => return None,
        };
        Some(Self {
            algorithm,
            digest_fn,
        })
    }
}

impl Hasher for RustCryptoHasher {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn compute(&self, data: &[u8]) -> Vec<u8> {
        (self.digest_fn)(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_answer() {
        let hasher = RustCryptoHasher::new(HashAlgorithm::Sha256).unwrap();
        let result = hasher.compute(b"hello world");
        assert_eq!(
            hex::encode(&result),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_backends_agree_on_sha2() {
        for algorithm in [
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ] {
            let ring = RingHasher::new(algorithm).unwrap();
            let rustcrypto = RustCryptoHasher::new(algorithm).unwrap();
            assert_eq!(
                ring.compute(b"cross-backend check"),
                rustcrypto.compute(b"cross-backend check"),
                "{algorithm} digests diverge between backends"
            );
        }
    }

    #[test]
    fn test_output_sizes_match_metadata() {
        for algorithm in [
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha3_512,
            HashAlgorithm::Sm3,
            HashAlgorithm::Blake2b512,
        ] {
            let hasher = RustCryptoHasher::new(algorithm).unwrap();
            assert_eq!(hasher.compute(b"x").len(), algorithm.output_size());
        }
        let ring = RingHasher::new(HashAlgorithm::Sha512_256).unwrap();
        assert_eq!(ring.compute(b"x").len(), 32);
    }

    #[test]
    fn test_hashing_is_deterministic() {
        let hasher = RingHasher::new(HashAlgorithm::Sha256).unwrap();
        assert_eq!(hasher.compute(b"same input"), hasher.compute(b"same input"));
    }

    #[test]
    fn test_unsupported_combinations_do_not_construct() {
        assert!(RingHasher::new(HashAlgorithm::Sm3).is_none());
        assert!(RustCryptoHasher::new(HashAlgorithm::Sha512_256).is_none());
    }
}
