//! Base64 encoding with the standard alphabet and `=` padding.

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encode `data` as base64.
///
/// Each 3-byte group maps to 4 output characters; a trailing 1- or 2-byte
/// group is zero-extended before encoding and the unused characters are
/// replaced with `=` so the output length is always a multiple of 4.
pub fn base64_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    let mut groups = data.chunks_exact(3);
    for group in &mut groups {
        let n = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);
        out.push(ALPHABET[(n >> 18 & 0x3F) as usize] as char);
        out.push(ALPHABET[(n >> 12 & 0x3F) as usize] as char);
        out.push(ALPHABET[(n >> 6 & 0x3F) as usize] as char);
        out.push(ALPHABET[(n & 0x3F) as usize] as char);
    }

    let tail = groups.remainder();
    if !tail.is_empty() {
        let mut n = u32::from(tail[0]) << 16;
        if tail.len() == 2 {
            n |= u32::from(tail[1]) << 8;
        }
        out.push(ALPHABET[(n >> 18 & 0x3F) as usize] as char);
        out.push(ALPHABET[(n >> 12 & 0x3F) as usize] as char);
        if tail.len() == 2 {
            out.push(ALPHABET[(n >> 6 & 0x3F) as usize] as char);
        }
        while out.len() % 4 != 0 {
            out.push('=');
        }
    }

    out
}
