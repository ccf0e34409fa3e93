//! HMAC-SHA1 keyed message authentication (RFC 2104).

use crate::sha1::sha1;

const BLOCK_LEN: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Compute `HMAC-SHA1(key, message)`.
///
/// Keys longer than the 64-byte block are first reduced to their SHA-1
/// digest; shorter keys are zero-padded on the right.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    let mut padded = [0u8; BLOCK_LEN];
    if key.len() > BLOCK_LEN {
        padded[..20].copy_from_slice(&sha1(key));
    } else {
        padded[..key.len()].copy_from_slice(key);
    }

    let mut inner = Vec::with_capacity(BLOCK_LEN + message.len());
    inner.extend(padded.iter().map(|b| b ^ IPAD));
    inner.extend_from_slice(message);
    let inner_digest = sha1(&inner);

    let mut outer = Vec::with_capacity(BLOCK_LEN + inner_digest.len());
    outer.extend(padded.iter().map(|b| b ^ OPAD));
    outer.extend_from_slice(&inner_digest);
    sha1(&outer)
}
