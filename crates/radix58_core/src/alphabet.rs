use crate::error::AlphabetError;

/// Sentinel stored in the reverse table for bytes outside the alphabet.
pub const INVALID_DIGIT: u8 = 255;

/// An immutable base58 alphabet: a digit-to-character table, its reverse,
/// and the character that stands for a leading zero byte.
///
/// The reverse table covers code points 0..128; everything at or above 128
/// decodes as invalid. The zero character is the alphabet's first character,
/// which is what all three built-in alphabets designate.
#[derive(Clone)]
pub struct Alphabet {
    chars: [u8; 58],
    decode: [u8; 128],
    zero: u8,
}

/// The Bitcoin alphabet, also used by IPFS, Solana and most of the
/// ecosystem. This is the alphabet the fixed-size fast paths apply to.
pub static BITCOIN: Alphabet =
    Alphabet::from_chars(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

/// The Ripple alphabet, a permutation of the Bitcoin one. Its zero
/// character is 'r'.
pub static RIPPLE: Alphabet =
    Alphabet::from_chars(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

/// The Flickr alphabet: lowercase before uppercase.
pub static FLICKR: Alphabet =
    Alphabet::from_chars(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ");

impl Alphabet {
    /// Build an alphabet from 58 characters, panicking on a duplicate or a
    /// non-ASCII byte. Intended for `static` definitions, where a bad
    /// alphabet fails compilation instead of every decode call.
    pub const fn from_chars(chars: &[u8; 58]) -> Alphabet {
        let mut decode = [INVALID_DIGIT; 128];
        let mut d = 0;
        while d < 58 {
            let c = chars[d];
            if c >= 128 {
                panic!("base58 alphabet must be ASCII");
            }
            if decode[c as usize] != INVALID_DIGIT {
                panic!("base58 alphabet contains a duplicate character");
            }
            decode[c as usize] = d as u8;
            d += 1;
        }
        Alphabet {
            chars: *chars,
            decode,
            zero: chars[0],
        }
    }

    /// Build an alphabet at runtime, validating length, ASCII-ness and
    /// uniqueness.
    ///
    /// # Examples
    /// ```
    /// use radix58_core::{Alphabet, AlphabetError};
    /// let custom = Alphabet::new("987654321ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz").unwrap();
    /// assert_eq!(custom.zero(), b'9');
    /// assert_eq!(Alphabet::new("abc"), Err(AlphabetError::Length(3)));
    /// ```
    pub fn new(alphabet: &str) -> Result<Alphabet, AlphabetError> {
        let bytes = alphabet.as_bytes();
        let chars: &[u8; 58] = bytes
            .try_into()
            .map_err(|_| AlphabetError::Length(bytes.len()))?;
        let mut decode = [INVALID_DIGIT; 128];
        for (d, &c) in chars.iter().enumerate() {
            if c >= 128 {
                return Err(AlphabetError::NonAscii(c));
            }
            if decode[c as usize] != INVALID_DIGIT {
                return Err(AlphabetError::Duplicate(c));
            }
            decode[c as usize] = d as u8;
        }
        Ok(Alphabet {
            chars: *chars,
            decode,
            zero: chars[0],
        })
    }

    /// The character for a digit value in 0..58.
    #[inline]
    pub fn char(&self, digit: u8) -> u8 {
        self.chars[digit as usize]
    }

    /// The digit value of a character, or [`INVALID_DIGIT`].
    #[inline]
    pub fn digit(&self, c: u8) -> u8 {
        if c < 128 {
            self.decode[c as usize]
        } else {
            INVALID_DIGIT
        }
    }

    /// The character that encodes a leading zero byte.
    #[inline]
    pub fn zero(&self) -> u8 {
        self.zero
    }
}

/// The reverse table is derived from `chars`, so comparing the forward
/// table alone is enough.
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for Alphabet {}

impl core::fmt::Debug for Alphabet {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter
            .debug_struct("Alphabet")
            .field(
                "chars",
                &core::str::from_utf8(&self.chars).unwrap_or("<invalid>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_tables(alphabet: &Alphabet) {
        for d in 0..58u8 {
            assert_eq!(alphabet.digit(alphabet.char(d)), d);
        }
        let mut valid = 0;
        for c in 0..=255u8 {
            if alphabet.digit(c) != INVALID_DIGIT {
                valid += 1;
                assert!(c < 128);
            }
        }
        assert_eq!(valid, 58);
    }

    #[test]
    fn test_builtin_tables_invert() {
        check_tables(&BITCOIN);
        check_tables(&RIPPLE);
        check_tables(&FLICKR);
    }

    #[test]
    fn test_zero_chars() {
        assert_eq!(BITCOIN.zero(), b'1');
        assert_eq!(RIPPLE.zero(), b'r');
        assert_eq!(FLICKR.zero(), b'1');
    }

    #[test]
    fn test_bitcoin_excludes_lookalikes() {
        for c in [b'0', b'O', b'I', b'l'] {
            assert_eq!(BITCOIN.digit(c), INVALID_DIGIT);
        }
        assert_eq!(BITCOIN.digit(200), INVALID_DIGIT);
    }

    #[test]
    fn test_new_rejects_bad_alphabets() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Length(0)));
        assert_eq!(
            Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyzX"),
            Err(AlphabetError::Length(59))
        );
        assert_eq!(
            Alphabet::new("113456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
            Err(AlphabetError::Duplicate(b'1'))
        );
        // 'é' is two bytes, so this string is 58 bytes long with a
        // non-ASCII byte in it
        let non_ascii = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwx\xC3\xA9";
        let s = core::str::from_utf8(non_ascii).unwrap();
        assert_eq!(s.len(), 58);
        assert_eq!(Alphabet::new(s), Err(AlphabetError::NonAscii(0xC3)));
    }

    #[test]
    fn test_new_matches_const() {
        let runtime =
            Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz").unwrap();
        assert_eq!(runtime, BITCOIN);
        assert_ne!(runtime, RIPPLE);
    }
}
