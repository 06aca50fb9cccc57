//! Sizing constants and the precomputed change-of-base tables used by the
//! fixed-size 32/64-byte conversion paths.
//!
//! The tables express the linear map between base-2^32 limbs and base-58^5
//! digit groups. They are generated at compile time from the defining
//! relationship rather than transcribed, so a wrong constant is a test
//! failure instead of a silent corruption.

pub const N_32: usize = 32;
pub const N_64: usize = 64;
pub const BINARY_SZ_32: usize = N_32 / 4;
pub const BINARY_SZ_64: usize = N_64 / 4;
pub const INTERMEDIATE_SZ_32: usize = 9; /* Computed by ceil(log_(58^5) (256^32-1)) */
pub const INTERMEDIATE_SZ_64: usize = 18; /* Computed by ceil(log_(58^5) (256^64-1)) */
pub const RAW58_SZ_32: usize = INTERMEDIATE_SZ_32 * 5;
pub const RAW58_SZ_64: usize = INTERMEDIATE_SZ_64 * 5;
pub const BASE58_ENCODED_32_MAX_LEN: usize = 44; /* Computed as ceil(log_58(256^32 - 1)) */
pub const BASE58_ENCODED_64_MAX_LEN: usize = 88; /* Computed as ceil(log_58(256^64 - 1)) */

/// 58^5, the radix of one five-digit group.
pub const R1: u64 = 656356768;

/* ENC_TABLE[i] holds the base-58^5 digits of 2^(32*(BINARY_SZ-1-i)),
aligned so that the encode accumulation is

  intermediate[j+1] += binary[i] * ENC_TABLE[i][j]

with intermediate[k] weighted 58^(5*(INTERMEDIATE_SZ-1-k)). Row i can
have at most ceil(log_(58^5) 2^(32*(BINARY_SZ-1))) nonzero digits,
which is INTERMEDIATE_SZ-1 for both supported sizes. */

pub const ENC_TABLE_32: [[u32; INTERMEDIATE_SZ_32 - 1]; BINARY_SZ_32] = enc_table_32();
pub const ENC_TABLE_64: [[u32; INTERMEDIATE_SZ_64 - 1]; BINARY_SZ_64] = enc_table_64();

/* DEC_TABLE[i] holds the base-2^32 limbs of 58^(5*(INTERMEDIATE_SZ-1-i)),
aligned so that the decode accumulation is

  binary[j] += intermediate[i] * DEC_TABLE[i][j]

with binary[k] weighted 2^(32*(BINARY_SZ-1-k)). */

pub const DEC_TABLE_32: [[u32; BINARY_SZ_32]; INTERMEDIATE_SZ_32] = dec_table_32();
pub const DEC_TABLE_64: [[u32; BINARY_SZ_64]; INTERMEDIATE_SZ_64] = dec_table_64();

/* The generators walk the powers from least significant row upward,
multiplying a little-endian digit accumulator by 2^32 (encode tables) or
58^5 (decode tables) per row. Digits stay below their radix (< 2^32), so
the per-digit product is below 2^62 and the running carry never
overflows a u64. */

const fn enc_table_32() -> [[u32; INTERMEDIATE_SZ_32 - 1]; BINARY_SZ_32] {
    let mut table = [[0u32; INTERMEDIATE_SZ_32 - 1]; BINARY_SZ_32];
    let mut power = [0u64; INTERMEDIATE_SZ_32 - 1];
    power[0] = 1;
    let mut i = BINARY_SZ_32;
    while i > 0 {
        i -= 1;
        let mut k = 0;
        while k < INTERMEDIATE_SZ_32 - 1 {
            table[i][INTERMEDIATE_SZ_32 - 2 - k] = power[k] as u32;
            k += 1;
        }
        if i > 0 {
            let mut carry = 0u64;
            let mut k = 0;
            while k < INTERMEDIATE_SZ_32 - 1 {
                let v = (power[k] << 32) + carry;
                power[k] = v % R1;
                carry = v / R1;
                k += 1;
            }
        }
    }
    table
}

const fn enc_table_64() -> [[u32; INTERMEDIATE_SZ_64 - 1]; BINARY_SZ_64] {
    let mut table = [[0u32; INTERMEDIATE_SZ_64 - 1]; BINARY_SZ_64];
    let mut power = [0u64; INTERMEDIATE_SZ_64 - 1];
    power[0] = 1;
    let mut i = BINARY_SZ_64;
    while i > 0 {
        i -= 1;
        let mut k = 0;
        while k < INTERMEDIATE_SZ_64 - 1 {
            table[i][INTERMEDIATE_SZ_64 - 2 - k] = power[k] as u32;
            k += 1;
        }
        if i > 0 {
            let mut carry = 0u64;
            let mut k = 0;
            while k < INTERMEDIATE_SZ_64 - 1 {
                let v = (power[k] << 32) + carry;
                power[k] = v % R1;
                carry = v / R1;
                k += 1;
            }
        }
    }
    table
}

const fn dec_table_32() -> [[u32; BINARY_SZ_32]; INTERMEDIATE_SZ_32] {
    let mut table = [[0u32; BINARY_SZ_32]; INTERMEDIATE_SZ_32];
    let mut power = [0u64; BINARY_SZ_32];
    power[0] = 1;
    let mut i = INTERMEDIATE_SZ_32;
    while i > 0 {
        i -= 1;
        let mut k = 0;
        while k < BINARY_SZ_32 {
            table[i][BINARY_SZ_32 - 1 - k] = power[k] as u32;
            k += 1;
        }
        if i > 0 {
            let mut carry = 0u64;
            let mut k = 0;
            while k < BINARY_SZ_32 {
                let v = power[k] * R1 + carry;
                power[k] = v & 0xFFFF_FFFF;
                carry = v >> 32;
                k += 1;
            }
        }
    }
    table
}

const fn dec_table_64() -> [[u32; BINARY_SZ_64]; INTERMEDIATE_SZ_64] {
    let mut table = [[0u32; BINARY_SZ_64]; INTERMEDIATE_SZ_64];
    let mut power = [0u64; BINARY_SZ_64];
    power[0] = 1;
    let mut i = INTERMEDIATE_SZ_64;
    while i > 0 {
        i -= 1;
        let mut k = 0;
        while k < BINARY_SZ_64 {
            table[i][BINARY_SZ_64 - 1 - k] = power[k] as u32;
            k += 1;
        }
        if i > 0 {
            let mut carry = 0u64;
            let mut k = 0;
            while k < BINARY_SZ_64 {
                let v = power[k] * R1 + carry;
                power[k] = v & 0xFFFF_FFFF;
                carry = v >> 32;
                k += 1;
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r1_is_58_pow_5() {
        assert_eq!(R1, 58u64.pow(5));
    }

    /* Spot values below are the independently published Firedancer
    constants for the same tables. */

    #[test]
    fn test_enc_table_32_known_rows() {
        assert_eq!(
            ENC_TABLE_32[0],
            [
                513735, 77223048, 437087610, 300156666, 605448490, 214625350, 141436834, 379377856,
            ]
        );
        assert_eq!(
            ENC_TABLE_32[3],
            [0, 0, 0, 1833, 324463681, 385795061, 551597588, 21339008]
        );
        assert_eq!(ENC_TABLE_32[6], [0, 0, 0, 0, 0, 0, 6, 356826688]);
        assert_eq!(ENC_TABLE_32[7], [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_enc_table_64_known_rows() {
        assert_eq!(ENC_TABLE_64[0][0], 2631);
        assert_eq!(ENC_TABLE_64[0][16], 454901440);
        assert_eq!(ENC_TABLE_64[1][1], 402);
        // the low eight rows repeat the 32-byte table, shifted
        assert_eq!(ENC_TABLE_64[8][9..], ENC_TABLE_32[0][..]);
        assert_eq!(
            ENC_TABLE_64[14],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6, 356826688]
        );
        assert_eq!(
            ENC_TABLE_64[15],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_dec_table_32_known_rows() {
        assert_eq!(
            DEC_TABLE_32[0],
            [
                1277, 2650397687, 3801011509, 2074386530, 3248244966, 687255411, 2959155456, 0,
            ]
        );
        assert_eq!(DEC_TABLE_32[7], [0, 0, 0, 0, 0, 0, 0, 656356768]);
        assert_eq!(DEC_TABLE_32[8], [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_dec_table_64_known_rows() {
        assert_eq!(DEC_TABLE_64[0][0], 249448);
        assert_eq!(DEC_TABLE_64[0][1], 3719864065);
        assert_eq!(DEC_TABLE_64[17][15], 1);
    }

    /* Reconstruct the row values and check them against the defining
    relationship directly. */

    #[test]
    fn test_enc_table_32_row_is_power_of_2_32() {
        // row 6 encodes 2^32: 6 * 58^5 + 356826688 == 2^32
        let mut value = 0u64;
        for &digit in ENC_TABLE_32[6].iter() {
            value = value * R1 + digit as u64;
        }
        assert_eq!(value, 1u64 << 32);
    }

    #[test]
    fn test_dec_table_32_row_is_power_of_58_5() {
        // row 7 encodes 58^5 in base 2^32
        let mut value = 0u128;
        for &limb in DEC_TABLE_32[7].iter() {
            value = (value << 32) + limb as u128;
        }
        assert_eq!(value, R1 as u128);
        // row 6 encodes 58^10
        let mut value = 0u128;
        for &limb in DEC_TABLE_32[6].iter() {
            value = (value << 32) + limb as u128;
        }
        assert_eq!(value, (R1 as u128) * (R1 as u128));
    }
}
