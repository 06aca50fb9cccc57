//! Alphabets, errors, sizing constants and change-of-base tables shared by
//! the radix58 crates.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod alphabet;
mod error;
mod tables;

pub use alphabet::{Alphabet, BITCOIN, FLICKR, INVALID_DIGIT, RIPPLE};
pub use error::{AlphabetError, DecodeError};
pub use tables::{
    BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN, BINARY_SZ_32, BINARY_SZ_64, DEC_TABLE_32,
    DEC_TABLE_64, ENC_TABLE_32, ENC_TABLE_64, INTERMEDIATE_SZ_32, INTERMEDIATE_SZ_64, N_32, N_64,
    R1, RAW58_SZ_32, RAW58_SZ_64,
};
