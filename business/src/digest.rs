//! Password digests.

use sha2::{Digest as _, Sha512};

/// Lowercase hex SHA-512 of the UTF-8 bytes of `input` (128 characters).
pub fn sha512_hex(input: &str) -> String {
    hex::encode(Sha512::digest(input.as_bytes()))
}
