//! Leading-run counters: how many zero bytes start a byte slice, and how
//! many copies of a given character start an encoded string.
//!
//! Both counters have a word-at-a-time scalar path and, when compiled
//! with AVX2, a 32-bytes-at-a-time vector front end. The vector front end
//! reports how many bytes it examined along with its count; the caller
//! finishes with the scalar path only when the run covered everything the
//! vectors looked at.

#[cfg(target_feature = "avx2")]
use crate::avx::{eq_splat_mask, eq_zero_mask, load_unaligned};

/// Splat a byte across every lane of a u64.
#[inline(always)]
const fn splat(target: u8) -> u64 {
    target as u64 * 0x0101_0101_0101_0101
}

/// Count leading zero bytes, one u64 word at a time. After an unaligned
/// little-endian load, the first nonzero byte of the word is
/// `trailing_zeros() / 8`.
fn leading_zeros_scalar(data: &[u8]) -> usize {
    let mut count = 0;
    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        // chunks_exact guarantees 8 readable bytes
        let word = unsafe { core::ptr::read_unaligned(chunk.as_ptr() as *const u64) }.to_le();
        if word != 0 {
            return count + (word.trailing_zeros() / 8) as usize;
        }
        count += 8;
    }
    for &byte in chunks.remainder() {
        if byte != 0 {
            break;
        }
        count += 1;
    }
    count
}

/// Count leading copies of `target`, one u64 word at a time. XORing with
/// the splatted target turns matching bytes into zero bytes, reducing to
/// the zero-run problem.
fn leading_chars_scalar(data: &[u8], target: u8) -> usize {
    let pattern = splat(target);
    let mut count = 0;
    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let word =
            unsafe { core::ptr::read_unaligned(chunk.as_ptr() as *const u64) }.to_le() ^ pattern;
        if word != 0 {
            return count + (word.trailing_zeros() / 8) as usize;
        }
        count += 8;
    }
    for &byte in chunks.remainder() {
        if byte != target {
            break;
        }
        count += 1;
    }
    count
}

/// Below this length the vector front end is skipped entirely.
#[cfg(target_feature = "avx2")]
const VECTOR_MIN: usize = 32;

/// Vector front end for the zero-run count. Returns `(count, processed)`:
/// the run length found within the first `processed` bytes. The count is
/// final iff it is shorter than `processed`; otherwise the run may
/// continue and the caller must keep counting from `processed`.
#[cfg(target_feature = "avx2")]
fn leading_zeros_vector(data: &[u8]) -> (usize, usize) {
    let mut count = 0;
    let mut chunks = data.chunks_exact(32);
    for chunk in &mut chunks {
        let mask = unsafe { eq_zero_mask(load_unaligned(chunk.as_ptr())) };
        // mask bit i set = byte i is zero; first non-match ends the run
        if mask != u32::MAX {
            return (count + (!mask).trailing_zeros() as usize, data.len());
        }
        count += 32;
    }
    (count, count)
}

#[cfg(target_feature = "avx2")]
fn leading_chars_vector(data: &[u8], target: u8) -> (usize, usize) {
    let mut count = 0;
    let mut chunks = data.chunks_exact(32);
    for chunk in &mut chunks {
        let mask = unsafe { eq_splat_mask(load_unaligned(chunk.as_ptr()), target) };
        if mask != u32::MAX {
            return (count + (!mask).trailing_zeros() as usize, data.len());
        }
        count += 32;
    }
    (count, count)
}

/// Length of the run of zero bytes at the start of `data`.
#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn leading_zeros(data: &[u8]) -> usize {
    if data.len() < VECTOR_MIN {
        return leading_zeros_scalar(data);
    }
    let (count, processed) = leading_zeros_vector(data);
    if count < processed {
        count
    } else {
        count + leading_zeros_scalar(&data[processed..])
    }
}

#[cfg(not(target_feature = "avx2"))]
#[inline]
pub(crate) fn leading_zeros(data: &[u8]) -> usize {
    leading_zeros_scalar(data)
}

/// Length of the run of `target` bytes at the start of `data`.
#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn leading_chars(data: &[u8], target: u8) -> usize {
    if data.len() < VECTOR_MIN {
        return leading_chars_scalar(data, target);
    }
    let (count, processed) = leading_chars_vector(data, target);
    if count < processed {
        count
    } else {
        count + leading_chars_scalar(&data[processed..], target)
    }
}

#[cfg(not(target_feature = "avx2"))]
#[inline]
pub(crate) fn leading_chars(data: &[u8], target: u8) -> usize {
    leading_chars_scalar(data, target)
}

#[cfg(feature = "dev-utils")]
pub fn leading_zeros_pub(data: &[u8]) -> usize {
    leading_zeros(data)
}

#[cfg(feature = "dev-utils")]
pub fn leading_chars_pub(data: &[u8], target: u8) -> usize {
    leading_chars(data, target)
}
