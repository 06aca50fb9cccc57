//! Schoolbook base conversion for arbitrary lengths and alphabets.
//!
//! Encode and decode are mirror-image Horner loops over a little-endian
//! digit buffer, O(n*m) in input and output length. Scratch lives on the
//! stack up to a fixed size and spills to the heap beyond it.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use radix58_core::{Alphabet, DecodeError, INVALID_DIGIT};

use crate::leading;
use crate::unlikely::unlikely;

/// Largest scratch buffer taken from the stack; bigger ones are heap
/// allocated. Covers every input up to roughly 370 bytes on encode and
/// 690 characters on decode.
const MAX_STACK_SCRATCH: usize = 512;

fn with_scratch<R>(len: usize, f: impl FnOnce(&mut [u8]) -> R) -> R {
    if len <= MAX_STACK_SCRATCH {
        let mut buf = [0u8; MAX_STACK_SCRATCH];
        f(&mut buf[..len])
    } else {
        let mut buf = vec![0u8; len];
        f(&mut buf)
    }
}

pub(crate) fn encode(alphabet: &Alphabet, data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }
    let leading_zeros = leading::leading_zeros(data);
    if leading_zeros == data.len() {
        // all-zero input needs no arithmetic, just the run itself
        let out = vec![alphabet.zero(); leading_zeros];
        // SAFETY: alphabet characters are validated ASCII at construction
        return unsafe { String::from_utf8_unchecked(out) };
    }
    let magnitude = &data[leading_zeros..];

    /* Digit count is bounded by ceil(len * log(256)/log(58)), and
    137/100 > log(256)/log(58) ~ 1.365. */
    let scratch_len = magnitude.len() * 137 / 100 + 1;

    with_scratch(scratch_len, |digits| {
        let mut digit_count = 1;
        digits[0] = 0;
        for &byte in magnitude {
            let mut carry = byte as u32;
            for digit in digits[..digit_count].iter_mut() {
                carry += (*digit as u32) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                digits[digit_count] = (carry % 58) as u8;
                digit_count += 1;
                carry /= 58;
            }
        }
        let mut out = Vec::with_capacity(leading_zeros + digit_count);
        out.resize(leading_zeros, alphabet.zero());
        for &digit in digits[..digit_count].iter().rev() {
            out.push(alphabet.char(digit));
        }
        // SAFETY: same ASCII invariant as above
        unsafe { String::from_utf8_unchecked(out) }
    })
}

pub(crate) fn decode(alphabet: &Alphabet, text: &str) -> Result<Vec<u8>, DecodeError> {
    let encoded = text.as_bytes();
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    let leading_ones = leading::leading_chars(encoded, alphabet.zero());

    /* Byte count is bounded by ceil(len * log(58)/log(256)), and
    733/1000 > log(58)/log(256) ~ 0.7325. */
    let scratch_len = encoded.len() * 733 / 1000 + 1;

    with_scratch(scratch_len, |decoded| {
        let mut decoded_len = 1;
        decoded[0] = 0;
        for &c in &encoded[leading_ones..] {
            let digit = alphabet.digit(c);
            if unlikely(digit == INVALID_DIGIT) {
                return Err(DecodeError::InvalidChar(c));
            }
            let mut carry = digit as u32;
            for byte in decoded[..decoded_len].iter_mut() {
                carry += (*byte as u32) * 58;
                *byte = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                decoded[decoded_len] = (carry & 0xFF) as u8;
                decoded_len += 1;
                carry >>= 8;
            }
        }
        // Input that is nothing but the zero-character run decodes to the
        // run alone; any other input keeps the seeded first byte even
        // when its value would fit in fewer.
        let magnitude_len = if leading_ones == encoded.len() {
            0
        } else {
            decoded_len
        };
        let mut out = vec![0u8; leading_ones + magnitude_len];
        for (slot, &byte) in out[leading_ones..]
            .iter_mut()
            .zip(decoded[..decoded_len].iter().rev())
        {
            *slot = byte;
        }
        Ok(out)
    })
}

#[cfg(feature = "dev-utils")]
pub fn encode_generic_pub(alphabet: &Alphabet, data: &[u8]) -> String {
    encode(alphabet, data)
}

#[cfg(feature = "dev-utils")]
pub fn decode_generic_pub(alphabet: &Alphabet, text: &str) -> Result<Vec<u8>, DecodeError> {
    decode(alphabet, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix58_core::{BITCOIN, FLICKR, RIPPLE};

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(&BITCOIN, &[]), "");
        assert_eq!(encode(&BITCOIN, &[0x00]), "1");
        assert_eq!(encode(&BITCOIN, &[0x00, 0x01]), "12");
        assert_eq!(encode(&BITCOIN, &[0xFF]), "5Q");
        assert_eq!(encode(&BITCOIN, &[0x39]), "z");
        assert_eq!(encode(&BITCOIN, &[0x3A]), "21");
        assert_eq!(encode(&BITCOIN, b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(encode(&RIPPLE, &[0x00, 0x01]), "rp");
        assert_eq!(encode(&FLICKR, &[0x00, 0x01]), "12");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode(&BITCOIN, "").unwrap(), Vec::<u8>::new());
        assert_eq!(decode(&BITCOIN, "1").unwrap(), vec![0x00]);
        assert_eq!(decode(&BITCOIN, "12").unwrap(), vec![0x00, 0x01]);
        assert_eq!(decode(&BITCOIN, "5Q").unwrap(), vec![0xFF]);
        assert_eq!(
            decode(&BITCOIN, "StV1DL6CwTryKyV").unwrap(),
            b"hello world"
        );
        assert_eq!(decode(&RIPPLE, "rp").unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_decode_rejects_invalid_chars() {
        for bad in ["0", "O", "I", "l", "hello world"] {
            assert!(matches!(
                decode(&BITCOIN, bad),
                Err(DecodeError::InvalidChar(_))
            ));
        }
        assert_eq!(
            decode(&BITCOIN, "11x0"),
            Err(DecodeError::InvalidChar(b'0'))
        );
        // multibyte char: the first offending byte is reported
        assert_eq!(
            decode(&BITCOIN, "11é"),
            Err(DecodeError::InvalidChar(0xC3))
        );
    }

    #[test]
    fn test_zero_run_only_input_has_no_extra_byte() {
        // nothing but the zero character: exactly that many zero bytes
        assert_eq!(decode(&BITCOIN, "1").unwrap(), vec![0x00]);
        assert_eq!(decode(&BITCOIN, "1111").unwrap(), vec![0u8; 4]);
        assert_eq!(decode(&RIPPLE, "rrr").unwrap(), vec![0u8; 3]);
    }

    #[test]
    fn test_leading_zero_correspondence() {
        for zeros in 0..20 {
            let mut data = vec![0u8; zeros + 3];
            data[zeros] = 0x7F;
            data[zeros + 1] = 0x01;
            data[zeros + 2] = 0xFE;
            let encoded = encode(&BITCOIN, &data);
            assert_eq!(leading::leading_chars(encoded.as_bytes(), b'1'), zeros);
            assert_eq!(decode(&BITCOIN, &encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_round_trip_lengths_through_heap_scratch() {
        // 400 bytes encodes through a heap digit buffer, 300 on the stack
        for len in [1usize, 31, 32, 33, 64, 300, 400] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 1) as u8).collect();
            for alphabet in [&BITCOIN, &RIPPLE, &FLICKR] {
                let encoded = encode(alphabet, &data);
                assert_eq!(decode(alphabet, &encoded).unwrap(), data, "len={}", len);
            }
        }
    }

    #[test]
    fn test_matches_bs58() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert_eq!(
            encode(&BITCOIN, &data),
            bs58::encode(&data).into_string()
        );
        assert_eq!(
            encode(&RIPPLE, &data),
            bs58::encode(&data)
                .with_alphabet(bs58::Alphabet::RIPPLE)
                .into_string()
        );
    }
}
