//! Fixed-size Bitcoin-alphabet conversion for 32- and 64-byte payloads.
//!
//! Instead of the O(n^2) schoolbook loop, the value is carried through an
//! intermediate base-58^5 representation:
//!
//!   bytes <-> base-2^32 limbs <-> base-58^5 groups <-> base-58 digits
//!
//! The limb-to-group step (and its inverse) is a matrix multiply against
//! the compile-time tables in `radix58_core`, followed by a single carry
//! sweep. Decode never reports an error: any input it cannot handle, from
//! an invalid character to a value that needs more bytes than the fixed
//! size, yields `None` and the caller retries generically.

use alloc::string::String;
use alloc::vec::Vec;

use radix58_core::{
    BINARY_SZ_32, BINARY_SZ_64, BITCOIN, DEC_TABLE_32, DEC_TABLE_64, ENC_TABLE_32, ENC_TABLE_64,
    INTERMEDIATE_SZ_32, INTERMEDIATE_SZ_64, INVALID_DIGIT, N_32, N_64, R1, RAW58_SZ_32,
    RAW58_SZ_64,
};

use crate::leading;
use crate::unlikely::unlikely;

/// Big-endian bytes to base-2^32 limbs, most significant limb first.
#[inline(always)]
fn make_binary<const N: usize, const BINARY_SZ: usize>(bytes: &[u8; N]) -> [u32; BINARY_SZ] {
    let mut binary = [0u32; BINARY_SZ];
    for (limb, chunk) in binary.iter_mut().zip(bytes.chunks_exact(4)) {
        *limb = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    binary
}

/* X = sum_i intermediate[i] * 58^(5*(INTERMEDIATE_SZ-1-i)). During
accumulation the entries may exceed 58^5; the carry sweep at the end
restores that bound. */

#[inline(always)]
fn make_intermediate_32(binary: &[u32; BINARY_SZ_32]) -> [u64; INTERMEDIATE_SZ_32] {
    /* With 8 limbs each below 2^32 and table entries below 58^5, every
    accumulated entry stays below 8 * 2^32 * 58^5 < 2^63, so a single
    pass needs no interior reduction. */
    let mut intermediate = [0u64; INTERMEDIATE_SZ_32];
    for i in 0..BINARY_SZ_32 {
        for j in 0..INTERMEDIATE_SZ_32 - 1 {
            intermediate[j + 1] += binary[i] as u64 * ENC_TABLE_32[i][j] as u64;
        }
    }
    carry_sweep(&mut intermediate);
    intermediate
}

#[inline(always)]
fn make_intermediate_64(binary: &[u32; BINARY_SZ_64]) -> [u64; INTERMEDIATE_SZ_64] {
    /* With 16 limbs the last entry can overflow a u64 if all rows are
    accumulated in one go, so the tail entry is reduced once after the
    first 8 rows. After that mini-reduction it is below 58^5 again and
    the remaining 8 rows cannot push it past 2^63.1. */
    let mut intermediate = [0u64; INTERMEDIATE_SZ_64];
    for i in 0..8 {
        for j in 0..INTERMEDIATE_SZ_64 - 1 {
            intermediate[j + 1] += binary[i] as u64 * ENC_TABLE_64[i][j] as u64;
        }
    }
    intermediate[15] += intermediate[16] / R1;
    intermediate[16] %= R1;
    for i in 8..BINARY_SZ_64 {
        for j in 0..INTERMEDIATE_SZ_64 - 1 {
            intermediate[j + 1] += binary[i] as u64 * ENC_TABLE_64[i][j] as u64;
        }
    }
    carry_sweep(&mut intermediate);
    intermediate
}

/// Propagate carries so every entry ends up below 58^5.
#[inline(always)]
fn carry_sweep<const L: usize>(intermediate: &mut [u64; L]) {
    for i in (1..L).rev() {
        intermediate[i - 1] += intermediate[i] / R1;
        intermediate[i] %= R1;
    }
}

/// Expand each base-58^5 group into five base-58 digits, most
/// significant first.
#[inline(always)]
fn intermediate_to_raw<const INTERMEDIATE_SZ: usize, const RAW58_SZ: usize>(
    intermediate: &[u64; INTERMEDIATE_SZ],
) -> [u8; RAW58_SZ] {
    let mut raw = [0u8; RAW58_SZ];
    for i in 0..INTERMEDIATE_SZ {
        // entries are below 58^5 < 2^32 after the carry sweep
        let v = intermediate[i] as u32;
        raw[5 * i] = (v / 11316496) as u8;
        raw[5 * i + 1] = ((v / 195112) % 58) as u8;
        raw[5 * i + 2] = ((v / 3364) % 58) as u8;
        raw[5 * i + 3] = ((v / 58) % 58) as u8;
        raw[5 * i + 4] = (v % 58) as u8;
    }
    raw
}

/* The raw digit buffer starts with at least as many zero digits as the
input had zero bytes: in base b, X has floor(log_b X)+1 digits, and
log_256 X - log_58 X shrinks as X grows, so the digit surplus never
drops below the byte surplus for either supported size. The output is
the input's zero-byte run as '1' characters, then the significant
digits. */
#[inline(always)]
fn emit<const RAW58_SZ: usize>(raw: &[u8; RAW58_SZ], in_leading_zeros: usize) -> String {
    let mut raw_leading_zeros = 0;
    while raw_leading_zeros < RAW58_SZ && raw[raw_leading_zeros] == 0 {
        raw_leading_zeros += 1;
    }
    let skip = raw_leading_zeros - in_leading_zeros;
    let mut out = Vec::with_capacity(RAW58_SZ - skip);
    out.resize(in_leading_zeros, b'1');
    for &digit in &raw[raw_leading_zeros..] {
        out.push(BITCOIN.char(digit));
    }
    // SAFETY: '1' and every alphabet character are ASCII
    unsafe { String::from_utf8_unchecked(out) }
}

fn all_ones(count: usize) -> String {
    let mut out = String::with_capacity(count);
    for _ in 0..count {
        out.push('1');
    }
    out
}

pub(crate) fn encode_32(bytes: &[u8; N_32]) -> String {
    let in_leading_zeros = leading::leading_zeros(bytes);
    if unlikely(in_leading_zeros == N_32) {
        return all_ones(N_32);
    }
    let binary = make_binary::<N_32, BINARY_SZ_32>(bytes);
    let intermediate = make_intermediate_32(&binary);
    let raw = intermediate_to_raw::<INTERMEDIATE_SZ_32, RAW58_SZ_32>(&intermediate);
    emit(&raw, in_leading_zeros)
}

pub(crate) fn encode_64(bytes: &[u8; N_64]) -> String {
    let in_leading_zeros = leading::leading_zeros(bytes);
    if unlikely(in_leading_zeros == N_64) {
        return all_ones(N_64);
    }
    let binary = make_binary::<N_64, BINARY_SZ_64>(bytes);
    let intermediate = make_intermediate_64(&binary);
    let raw = intermediate_to_raw::<INTERMEDIATE_SZ_64, RAW58_SZ_64>(&intermediate);
    emit(&raw, in_leading_zeros)
}

/* Decode runs the encode pipeline in reverse. The caller guarantees
`encoded.len() <= RAW58_SZ`; shorter input is treated as zero-padded on
the left. `None` means "let the generic path handle this", covering
invalid characters, values too large for N bytes, and inputs whose
zero-character run does not line up with the output's zero-byte run. */
fn decode_fixed<
    const RAW58_SZ: usize,
    const INTERMEDIATE_SZ: usize,
    const BINARY_SZ: usize,
    const N: usize,
>(
    encoded: &[u8],
    dec_table: &[[u32; BINARY_SZ]; INTERMEDIATE_SZ],
) -> Option<[u8; N]> {
    let prepend = RAW58_SZ - encoded.len();
    let mut raw = [0u8; RAW58_SZ];
    for (slot, &c) in raw[prepend..].iter_mut().zip(encoded.iter()) {
        let digit = BITCOIN.digit(c);
        if unlikely(digit == INVALID_DIGIT) {
            return None;
        }
        *slot = digit;
    }

    // collapse each five-digit group into one base-58^5 value
    let mut intermediate = [0u64; INTERMEDIATE_SZ];
    for i in 0..INTERMEDIATE_SZ {
        intermediate[i] = raw[5 * i] as u64 * 11316496
            + raw[5 * i + 1] as u64 * 195112
            + raw[5 * i + 2] as u64 * 3364
            + raw[5 * i + 3] as u64 * 58
            + raw[5 * i + 4] as u64;
    }

    /* Matrix multiply into overcomplete base-2^32 limbs. Each group is
    below 58^5 < 2^30 and each coefficient below 2^32; the table's
    trailing zero structure keeps every column sum below 2^64. */
    let mut binary = [0u64; BINARY_SZ];
    for (j, limb) in binary.iter_mut().enumerate() {
        let mut acc = 0u64;
        for i in 0..INTERMEDIATE_SZ {
            acc = acc.wrapping_add(intermediate[i] * dec_table[i][j] as u64);
        }
        *limb = acc;
    }
    for i in (1..BINARY_SZ).rev() {
        binary[i - 1] += binary[i] >> 32;
        binary[i] &= 0xFFFF_FFFF;
    }
    // a surviving high carry means the value needs more than N bytes
    if unlikely(binary[0] > 0xFFFF_FFFF) {
        return None;
    }

    let mut out = [0u8; N];
    for i in 0..BINARY_SZ {
        out[4 * i..4 * i + 4].copy_from_slice(&(binary[i] as u32).to_be_bytes());
    }

    // the zero-byte run must correspond to the zero-character run, or
    // the text belongs to a payload of a different length
    let out_leading_zeros = leading::leading_zeros(&out);
    let in_leading_ones = leading::leading_chars(encoded, b'1');
    if out_leading_zeros != in_leading_ones {
        return None;
    }
    Some(out)
}

pub(crate) fn decode_32(encoded: &[u8]) -> Option<[u8; N_32]> {
    decode_fixed::<RAW58_SZ_32, INTERMEDIATE_SZ_32, BINARY_SZ_32, N_32>(encoded, &DEC_TABLE_32)
}

pub(crate) fn decode_64(encoded: &[u8]) -> Option<[u8; N_64]> {
    decode_fixed::<RAW58_SZ_64, INTERMEDIATE_SZ_64, BINARY_SZ_64, N_64>(encoded, &DEC_TABLE_64)
}

#[cfg(feature = "dev-utils")]
pub fn encode_32_pub(bytes: &[u8; N_32]) -> String {
    encode_32(bytes)
}

#[cfg(feature = "dev-utils")]
pub fn encode_64_pub(bytes: &[u8; N_64]) -> String {
    encode_64(bytes)
}

#[cfg(feature = "dev-utils")]
pub fn decode_32_pub(encoded: &[u8]) -> Option<[u8; N_32]> {
    decode_32(encoded)
}

#[cfg(feature = "dev-utils")]
pub fn decode_64_pub(encoded: &[u8]) -> Option<[u8; N_64]> {
    decode_64(encoded)
}
