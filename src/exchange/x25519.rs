// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! X25519 key agreement over `x25519-dalek`.

use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::catalog::AsymmetricAlgorithm;
use crate::error::{CryptoError, Result};
use crate::exchange::expand_secret;
use crate::provider::{
    ensure_key_matches, lookup_curve, AsymmetricHandler, CurveKeyGenerator, KeyExchange,
    KeyGenerator, OperationImpl,
};
use crate::types::{KeyPair, KeySpec, OperationKind, Provider};

const CURVES: &[&str] = &["X25519"];

pub struct X25519Agreement;

impl X25519Agreement {
    pub fn new() -> Self {
        Self
    }
}

impl Default for X25519Agreement {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveKeyGenerator for X25519Agreement {
    fn curves(&self) -> &'static [&'static str] {
        CURVES
    }

    fn generate_keypair(&self, curve: &str) -> Result<KeyPair> {
        let canonical = lookup_curve(self.curves(), curve)?;
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        Ok(KeyPair::new(
            Provider::RustCrypto,
            AsymmetricAlgorithm::X25519,
            KeySpec::Curve(canonical),
            secret.to_bytes().to_vec(),
            public.as_bytes().to_vec(),
        ))
    }
}

impl KeyExchange for X25519Agreement {
    fn derive_shared_secret(
        &self,
        key_pair: &KeyPair,
        size_hint: Option<usize>,
        peer_public_key: &[u8],
    ) -> Result<Vec<u8>> {
        ensure_key_matches(key_pair, Provider::RustCrypto, AsymmetricAlgorithm::X25519)?;

        let secret_bytes: [u8; 32] = key_pair
            .private_key()
            .try_into()
            .map_err(|_| CryptoError::KeyError("X25519 private keys are 32 bytes".into()))?;
        let peer_bytes: [u8; 32] = peer_public_key.try_into().map_err(|_| {
            CryptoError::KeyExchangeFailed("X25519 public keys are 32 bytes".into())
        })?;

        let shared = StaticSecret::from(secret_bytes).diffie_hellman(&PublicKey::from(peer_bytes));
        if !shared.was_contributory() {
            return Err(CryptoError::KeyExchangeFailed(
                "peer public key is a low-order point".into(),
            ));
        }
        expand_secret(shared.as_bytes(), size_hint)
    }
}

impl AsymmetricHandler for X25519Agreement {
    fn provider(&self) -> Provider {
        Provider::RustCrypto
    }

    fn algorithm(&self) -> AsymmetricAlgorithm {
        AsymmetricAlgorithm::X25519
    }

    fn operation_kind(&self) -> OperationKind {
        OperationKind::KeyExchange
    }

    fn generator(&self) -> KeyGenerator<'_> {
        KeyGenerator::Curve(self)
    }

    fn operation(&self) -> OperationImpl<'_> {
        OperationImpl::KeyExchange(self)
    }
}
