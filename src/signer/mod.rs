// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Signature handlers.

pub mod dsa;
pub mod ecdsa;
pub mod ed25519;
pub mod rsa;

pub use self::dsa::DsaSignature;
pub use self::ecdsa::{NistEcdsa, RingEcdsa};
pub use self::ed25519::{DalekEd25519, RingEd25519};
pub use self::rsa::RsaSignature;
