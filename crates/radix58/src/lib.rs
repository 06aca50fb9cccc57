//! Base58 encoding and decoding with pluggable alphabets.
//!
//! The byte-for-byte round trip is exact: every leading zero byte encodes
//! to one leading zero character and back. Three alphabets ship built in
//! ([`BITCOIN`], [`RIPPLE`], [`FLICKR`]); custom ones can be made with
//! [`Alphabet::new`].
//!
//! Under the Bitcoin alphabet, 32- and 64-byte inputs (and encoded text
//! whose length can only belong to such inputs) take an O(n) fixed-size
//! path built on precomputed change-of-base tables instead of the O(n^2)
//! schoolbook conversion. Both paths produce identical output.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_feature = "avx2")]
mod avx;

mod fast;
mod generic;
mod leading;
mod unlikely;

use alloc::string::String;
use alloc::vec::Vec;

pub use radix58_core::{
    Alphabet, AlphabetError, DecodeError, BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN,
    BITCOIN, FLICKR, RIPPLE,
};

#[cfg(feature = "dev-utils")]
pub use {
    fast::{decode_32_pub, decode_64_pub, encode_32_pub, encode_64_pub},
    generic::{decode_generic_pub, encode_generic_pub},
    leading::{leading_chars_pub, leading_zeros_pub},
};

/// Encode bytes as base58 text under the given alphabet.
///
/// Exactly 32- and 64-byte inputs under the Bitcoin alphabet are routed
/// through the fixed-size fast path; everything else goes through the
/// generic converter. The output is identical either way.
///
/// # Examples
/// ```
/// use radix58::{encode, BITCOIN, RIPPLE};
/// assert_eq!(encode(&BITCOIN, &[]), "");
/// assert_eq!(encode(&BITCOIN, &[0x00, 0x01]), "12");
/// assert_eq!(encode(&BITCOIN, &[0xFF]), "5Q");
/// assert_eq!(encode(&RIPPLE, &[0x00, 0x01]), "rp");
/// ```
pub fn encode(alphabet: &Alphabet, data: &[u8]) -> String {
    if *alphabet == BITCOIN {
        if let Ok(block) = <&[u8; radix58_core::N_32]>::try_from(data) {
            return fast::encode_32(block);
        }
        if let Ok(block) = <&[u8; radix58_core::N_64]>::try_from(data) {
            return fast::encode_64(block);
        }
    }
    generic::encode(alphabet, data)
}

/// Decode base58 text to bytes under the given alphabet.
///
/// Fails with [`DecodeError::InvalidChar`] if any character is outside
/// the alphabet or has a code point at or above 128.
///
/// Bitcoin-alphabet text whose length sits in the bands that can only
/// correspond to a 32-byte (43-44 chars) or 64-byte (87-88 chars) payload
/// is tried on the fixed-size fast path first; if that path declines the
/// input for any structural reason, the full operation is re-run through
/// the generic converter.
///
/// # Examples
/// ```
/// use radix58::{decode, BITCOIN};
/// assert_eq!(decode(&BITCOIN, "12").unwrap(), &[0x00, 0x01]);
/// assert_eq!(decode(&BITCOIN, "").unwrap(), &[]);
/// assert!(decode(&BITCOIN, "10").is_err());
/// ```
pub fn decode(alphabet: &Alphabet, text: &str) -> Result<Vec<u8>, DecodeError> {
    if *alphabet == BITCOIN {
        match text.len() {
            43..=44 => {
                if let Some(out) = fast::decode_32(text.as_bytes()) {
                    return Ok(out.to_vec());
                }
            }
            87..=88 => {
                if let Some(out) = fast::decode_64(text.as_bytes()) {
                    return Ok(out.to_vec());
                }
            }
            _ => {}
        }
    }
    generic::decode(alphabet, text)
}
