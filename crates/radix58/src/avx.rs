//! Thin wrappers over the AVX2 intrinsics the run counters use.

use core::arch::x86_64::{
    __m256i, _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_movemask_epi8, _mm256_set1_epi8,
    _mm256_setzero_si256,
};

/// Load 32 bytes from `p` without an alignment requirement.
///
/// # Safety
/// `p` must point to at least 32 readable bytes.
#[inline(always)]
pub(crate) unsafe fn load_unaligned(p: *const u8) -> __m256i {
    _mm256_loadu_si256(p as *const __m256i)
}

/// Bitmask with bit i set iff byte i of `bytes` is zero.
#[inline(always)]
pub(crate) unsafe fn eq_zero_mask(bytes: __m256i) -> u32 {
    _mm256_movemask_epi8(_mm256_cmpeq_epi8(bytes, _mm256_setzero_si256())) as u32
}

/// Bitmask with bit i set iff byte i of `bytes` equals `target`.
#[inline(always)]
pub(crate) unsafe fn eq_splat_mask(bytes: __m256i, target: u8) -> u32 {
    _mm256_movemask_epi8(_mm256_cmpeq_epi8(bytes, _mm256_set1_epi8(target as i8))) as u32
}
