//! Byte-stream ↔ bit-stream conversion.
//!
//! Bits are MSB-first within each byte. Conversion back to bytes zero-pads
//! on the right up to a byte boundary; the padding is indistinguishable from
//! payload zeros, so callers either know the exact payload length or accept
//! up to seven trailing zero bits.

/// Expands each byte into exactly 8 bits, most significant first.
pub fn bytes_to_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &byte in data {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1);
        }
    }
    bits
}

/// Groups a bit sequence into bytes MSB-first, zero-padding the tail.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; (bits.len() + 7) / 8];
    for (i, &bit) in bits.iter().enumerate() {
        out[i / 8] |= bit << (7 - (i % 8));
    }
    out
}
