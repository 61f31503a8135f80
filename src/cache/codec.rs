// ABOUTME: Reversible obfuscation transform for cached payloads
// ABOUTME: Salt marker + percent-encoding + base64; tamper or decode failure yields None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Obfuscation codec for cached values.
//!
//! Deters casual inspection of persisted data; explicitly not cryptographic
//! (there is no key). Percent-encoding runs before base64 so arbitrary
//! Unicode round-trips through the binary-safe step losslessly.

use crate::constants::cache::OBFUSCATION_SALT;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode a plaintext payload: salt marker, percent-encode, base64
pub(crate) fn obfuscate(plaintext: &str) -> String {
    let salted = format!("{OBFUSCATION_SALT}{plaintext}");
    STANDARD.encode(urlencoding::encode(&salted).as_bytes())
}

/// Decode an obfuscated payload, verifying the salt marker.
///
/// Returns `None` for any malformed input: bad base64, invalid UTF-8, bad
/// percent-encoding, or a missing marker (tampered or foreign data).
pub(crate) fn deobfuscate(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded.trim().as_bytes()).ok()?;
    let percent = String::from_utf8(bytes).ok()?;
    let salted = urlencoding::decode(&percent).ok()?;
    salted.strip_prefix(OBFUSCATION_SALT).map(str::to_owned)
}
