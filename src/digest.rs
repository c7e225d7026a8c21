// src/digest.rs
//! SHA-256 digest engine, written from scratch
//!
//! `init` → `absorb`* → `finalize` → `hex_of`. The state is an owned value:
//! `finalize` takes it by move, so a finished state cannot be fed again.

use std::io;

/// Size of one compression block in bytes
pub const BLOCK_LEN: usize = 64;

/// Size of the finished digest in bytes
pub const DIGEST_LEN: usize = 32;

// Offset in the final block where the big-endian bit count starts
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

const INITIAL_STATE: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Fold one 64-byte block into the running state
fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 64];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ROUND_CONSTANTS[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, add) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(add);
    }
}

/// Single-use SHA-256 accumulator
#[derive(Debug)]
pub struct DigestState {
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    bit_len: u64,
    words: [u32; 8],
}

impl DigestState {
    pub fn new() -> Self {
        Self {
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            bit_len: 0,
            words: INITIAL_STATE,
        }
    }

    /// Feed bytes into the state. Never fails, for any length.
    pub fn absorb(&mut self, mut data: &[u8]) {
        self.bit_len = self.bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));

        while !data.is_empty() {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered == BLOCK_LEN {
                compress(&mut self.words, &self.buffer);
                self.buffered = 0;
            }
        }
    }

    /// Pad, run the last compression(s) and emit the digest
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let used = self.buffered;
        self.buffer[used] = 0x80;
        self.buffer[used + 1..].fill(0);

        // No room left for the bit count: flush and pad a fresh block
        if used >= LENGTH_OFFSET {
            compress(&mut self.words, &self.buffer);
            self.buffer = [0u8; BLOCK_LEN];
        }

        self.buffer[LENGTH_OFFSET..].copy_from_slice(&self.bit_len.to_be_bytes());
        compress(&mut self.words, &self.buffer);

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for DigestState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets any `Read` be streamed in with `io::copy`
impl io::Write for DigestState {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fresh state holding the SHA-256 initial constants
#[inline]
pub fn init() -> DigestState {
    DigestState::new()
}

#[inline]
pub fn absorb(state: &mut DigestState, data: &[u8]) {
    state.absorb(data);
}

#[inline]
pub fn finalize(state: DigestState) -> [u8; DIGEST_LEN] {
    state.finalize()
}

/// Lowercase hex, two digits per byte
pub fn hex_of(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// SHA-256 of `data` as 64 lowercase hex characters
pub fn digest_hex(data: &[u8]) -> String {
    let mut state = init();
    absorb(&mut state, data);
    hex_of(&finalize(state))
}
