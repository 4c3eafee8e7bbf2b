// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Key exchange handlers.

pub mod ecdh;
pub mod x25519;

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::{CryptoError, Result};

pub use self::ecdh::EcdhAgreement;
pub use self::x25519::X25519Agreement;

/// Sizes a raw agreement to the caller's hint. Without a hint the raw
/// secret is returned as-is; with one, it is expanded through HKDF-SHA256
/// so both parties still derive identical bytes.
pub(crate) fn expand_secret(raw: &[u8], size_hint: Option<usize>) -> Result<Vec<u8>> {
    match size_hint {
        None => Ok(raw.to_vec()),
        Some(0) => Err(CryptoError::InvalidParameter(
            "requested shared secret length is zero".into(),
        )),
        Some(len) => {
            let hkdf = Hkdf::<Sha256>::new(None, raw);
            let mut okm = vec![0u8; len];
            hkdf.expand(b"cryptolab shared secret", &mut okm)
                .map_err(|_| {
                    CryptoError::KeyExchangeFailed(format!(
                        "cannot expand shared secret to {len} bytes"
                    ))
                })?;
            Ok(okm)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_secret_respects_hint() {
        let raw = [0xabu8; 32];
        assert_eq!(expand_secret(&raw, None).unwrap(), raw);
        assert_eq!(expand_secret(&raw, Some(16)).unwrap().len(), 16);
        assert_eq!(expand_secret(&raw, Some(64)).unwrap().len(), 64);
        assert!(expand_secret(&raw, Some(0)).is_err());
        // HKDF output caps at 255 blocks of the hash length.
        assert!(expand_secret(&raw, Some(255 * 32 + 1)).is_err());
    }

    #[test]
    fn test_expand_secret_is_deterministic() {
        let raw = [0x01u8; 32];
        assert_eq!(
            expand_secret(&raw, Some(48)).unwrap(),
            expand_secret(&raw, Some(48)).unwrap()
        );
    }
}
