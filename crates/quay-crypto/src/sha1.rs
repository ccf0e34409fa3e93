//! SHA-1 message digest (FIPS 180-1).

/// Initial hash state.
const H: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Per-round additive constants, one per group of twenty rounds.
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

const BLOCK_LEN: usize = 64;

/// Compute the 20-byte SHA-1 digest of `data`.
///
/// Processes complete 64-byte blocks, then appends the standard
/// `0x80` / zero padding and the big-endian bit length. Output words
/// are serialized big-endian.
pub fn sha1(data: &[u8]) -> [u8; 20] {
    let mut state = H;
    let bit_len = (data.len() as u64).wrapping_mul(8);

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        compress(&mut state, block.try_into().expect("exact chunk"));
    }

    let tail = blocks.remainder();
    let mut last = [0u8; BLOCK_LEN];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = 0x80;

    // The length field needs eight bytes; spill into an extra block if the
    // tail plus terminator doesn't leave room.
    if tail.len() + 1 > BLOCK_LEN - 8 {
        compress(&mut state, &last);
        last = [0u8; BLOCK_LEN];
    }
    last[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
    compress(&mut state, &last);

    let mut digest = [0u8; 20];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 80];
    for (i, word) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes(word.try_into().expect("exact chunk"));
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &m) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | (!b & d), K[0]),
            20..=39 => (b ^ c ^ d, K[1]),
            40..=59 => ((b & c) | (b & d) | (c & d), K[2]),
            _ => (b ^ c ^ d, K[3]),
        };
        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(m);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
