//! Cryptographic primitives for legacy object-store request signing.
//!
//! The AWS v2-style signature scheme needs exactly three operations:
//! SHA-1, HMAC-SHA1, and base64 encoding. They are implemented here from
//! the published algorithms with no external dependencies, because the
//! signature must match the wire protocol bit-for-bit — a wrong digest
//! does not error, it silently fails authentication.
//!
//! SHA-1 is used for message authentication only, never for content
//! integrity or collision resistance.

pub mod base64;
pub mod hmac;
pub mod sha1;

pub use base64::base64_encode;
pub use hmac::hmac_sha1;
pub use sha1::sha1;
