// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Input format validation and conversion.
//!
//! Every byte string handed to a cryptographic operation passes through
//! here first. Validation is idempotent and side-effect-free apart from the
//! file existence/readability probe; it never creates or locks files.

use std::fs;

use crate::error::{CryptoError, Result};
use crate::types::DataFormat;

pub struct InputFormat;

impl InputFormat {
    /// Checks whether `raw` is acceptable under `format` without converting
    /// it.
    pub fn validate(format: DataFormat, raw: &str) -> bool {
        match format {
            DataFormat::PlainText => !raw.is_empty(),
            DataFormat::HexString => {
                raw.len() % 2 == 0 && raw.chars().all(|c| c.is_ascii_hexdigit())
            }
            DataFormat::File => match fs::metadata(raw) {
                Ok(metadata) => metadata.is_file() && fs::File::open(raw).is_ok(),
                Err(_) => false,
            },
        }
    }

    /// Converts `raw` to bytes under `format`.
    ///
    /// Plain text converts via UTF-8; hex strings are decoded
    /// case-insensitively; files are read whole into memory. Callers that
    /// need streaming semantics for large files must layer it on top.
    pub fn to_bytes(format: DataFormat, raw: &str) -> Result<Vec<u8>> {
        match format {
            DataFormat::PlainText => {
                if raw.is_empty() {
                    return Err(CryptoError::InvalidFormat(
                        "plain text input is empty".into(),
                    ));
                }
                Ok(raw.as_bytes().to_vec())
            }
            DataFormat::HexString => {
                if raw.len() % 2 != 0 {
                    return Err(CryptoError::InvalidFormat(
                        "hex string has odd length".into(),
                    ));
                }
                hex::decode(raw)
                    .map_err(|e| CryptoError::InvalidFormat(format!("invalid hex string: {e}")))
            }
            DataFormat::File => fs::read(raw)
                .map_err(|e| CryptoError::InvalidFormat(format!("cannot read file {raw}: {e}"))),
        }
    }
}
