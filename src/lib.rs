// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! CryptoLab core library
//!
//! Algorithm selection and operation dispatch for the CryptoLab desktop
//! application: per-provider algorithm catalogs, input format validation,
//! the capability traits concrete handlers implement, the dispatch
//! registry, and the key-pair session that owns generated key material.
//!
//! The UI shell drives this crate as follows: pick a provider and
//! operation, list the legal algorithms, resolve one into a handler, bind
//! it to a session, generate keys, then run operations with
//! format-validated input.
//!
//! ```
//! use cryptolab::{
//!     AsymmetricAlgorithm, KeyPairSession, OperationKind, Provider, Registry,
//! };
//!
//! let registry = Registry::new();
//! registry.self_check().expect("catalog and constructors agree");
//!
//! let algorithms = registry.list_valid_algorithms(Provider::RustCrypto, OperationKind::Signature);
//! assert!(algorithms.contains(&AsymmetricAlgorithm::Ed25519));
//!
//! let handler = registry
//!     .resolve_asymmetric(
//!         Provider::RustCrypto,
//!         OperationKind::Signature,
//!         AsymmetricAlgorithm::Ed25519,
//!     )
//!     .unwrap();
//! let mut session = KeyPairSession::new(handler);
//! session.generate_by_curve("Ed25519").unwrap();
//!
//! let signature = session.sign(b"hello").unwrap();
//! assert!(session.verify(&signature, b"hello").unwrap());
//! ```

pub mod catalog;
pub mod cipher;
pub mod encrypt;
pub mod error;
pub mod exchange;
pub mod format;
pub mod hash;
pub mod provider;
pub mod session;
pub mod signer;
pub mod types;

pub use catalog::{AsymmetricAlgorithm, Catalog, HashAlgorithm, SymmetricAlgorithm};
pub use error::{CryptoError, Result};
pub use format::InputFormat;
pub use provider::registry::Registry;
pub use provider::{
    AsymmetricEncryptor, AsymmetricHandler, CurveKeyGenerator, Hasher, KeyExchange, KeyGenerator,
    OperationImpl, SignatureScheme, SizeKeyGenerator, SymmetricCipher,
};
pub use session::KeyPairSession;
pub use types::{DataFormat, KeyPair, KeySpec, OperationKind, Provider};
