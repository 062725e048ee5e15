use derive_more::Display;
use num::Integer;
use std::{num::IntErrorKind, str::FromStr};

use crate::alphabet::Alphabet;

/// Emitted in place of any input symbol that is not in the [`Alphabet`].
pub const PLACEHOLDER: char = 'x';

/// Common errors for ciphers
#[derive(Debug, Display, PartialEq, Eq)]
pub enum CipherError {
    #[display(fmt = "{}", _0)]
    InvalidKey(String),
}

impl std::error::Error for CipherError {}

/// Direction of the substitution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CipherMode {
    #[default]
    Encrypt,
    Decrypt,
}

pub trait Cipher {
    fn apply_cipher(&self, text: &str, mode: CipherMode) -> String;
}

/// Caesar cipher
/// https://en.wikipedia.org/wiki/Caesar_cipher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaesarCipher {
    /// shift, always in `[0, Alphabet::SIZE)`
    key: usize,
}

impl CaesarCipher {
    pub fn new(key: usize) -> Self {
        Self {
            key: key % Alphabet::SIZE,
        }
    }

    pub fn key(&self) -> usize {
        self.key
    }

    fn shift(&self, position: usize, mode: CipherMode) -> usize {
        let key = self.key as i64;
        let offset = match mode {
            CipherMode::Encrypt => key,
            CipherMode::Decrypt => -key,
        };
        (position as i64 + offset).mod_floor(&(Alphabet::SIZE as i64)) as usize
    }
}

impl FromStr for CaesarCipher {
    type Err = CipherError;

    /// An empty key yields the identity cipher.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        if key.is_empty() {
            return Ok(Self::new(0));
        }
        // caught before parsing so the message can name the sign
        if key.starts_with('-') {
            return Err(CipherError::InvalidKey(format!(
                "Caesar cipher key must be a non-negative integer, the supplied key ({key}) is negative"
            )));
        }
        let value = key.parse::<u64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => CipherError::InvalidKey(format!(
                "Caesar cipher key must be an unsigned integer, the supplied key ({key}) is too big and could not be converted"
            )),
            _ => CipherError::InvalidKey(format!(
                "Caesar cipher key must be an unsigned integer, the supplied key ({key}) could not be converted"
            )),
        })?;
        let cipher = Self::new((value % Alphabet::SIZE as u64) as usize);
        tracing::debug!(raw = key, key = cipher.key(), "normalized Caesar key");
        Ok(cipher)
    }
}

impl Cipher for CaesarCipher {
    fn apply_cipher(&self, text: &str, mode: CipherMode) -> String {
        text.chars()
            .map(|ch| match Alphabet::position(ch) {
                Some(i) => Alphabet::letter(self.shift(i, mode)),
                None => PLACEHOLDER,
            })
            .collect()
    }
}

#[cfg(test)]
mod caesar_cipher_test {
    use super::{CaesarCipher, Cipher, CipherError, CipherMode, PLACEHOLDER};
    use crate::alphabet::Alphabet;
    use proptest::prelude::*;

    const MESSAGE: &str = "HELLOWORLD";

    fn invalid_key_message(key: &str) -> String {
        match key.parse::<CaesarCipher>() {
            Err(CipherError::InvalidKey(msg)) => msg,
            Ok(cipher) => panic!("key {key:?} parsed as {cipher:?}"),
        }
    }

    #[test]
    fn test_known_shift() {
        let cipher = CaesarCipher::new(3);
        assert_eq!(cipher.apply_cipher("ABCXYZ", CipherMode::Encrypt), "DEFABC");
        assert_eq!(cipher.apply_cipher("DEFABC", CipherMode::Decrypt), "ABCXYZ");
    }

    #[test]
    fn test_symmetric() {
        let cipher: CaesarCipher = "17".parse().unwrap();
        let cipher_text = cipher.apply_cipher(MESSAGE, CipherMode::Encrypt);
        assert_ne!(cipher_text, MESSAGE);
        assert_eq!(cipher.apply_cipher(&cipher_text, CipherMode::Decrypt), MESSAGE);
    }

    #[test]
    fn test_key_is_normalized() {
        assert_eq!(CaesarCipher::new(29).key(), 3);
        assert_eq!(CaesarCipher::new(Alphabet::SIZE).key(), 0);
        assert_eq!("55".parse::<CaesarCipher>().unwrap().key(), 3);
        assert_eq!(
            "18446744073709551615".parse::<CaesarCipher>().unwrap().key(),
            (u64::MAX % Alphabet::SIZE as u64) as usize
        );
    }

    #[test]
    fn test_zero_key_is_identity() {
        for cipher in [CaesarCipher::new(0), "".parse().unwrap(), "0".parse().unwrap()] {
            for mode in [CipherMode::Encrypt, CipherMode::Decrypt] {
                assert_eq!(cipher.apply_cipher(MESSAGE, mode), MESSAGE);
            }
        }
    }

    #[test]
    fn test_empty_text() {
        let cipher = CaesarCipher::new(5);
        assert_eq!(cipher.apply_cipher("", CipherMode::Encrypt), "");
        assert_eq!(cipher.apply_cipher("", CipherMode::Decrypt), "");
    }

    #[test]
    fn test_unknown_symbols_become_placeholder() {
        let cipher = CaesarCipher::new(1);
        assert_eq!(PLACEHOLDER, 'x');
        assert_eq!(cipher.apply_cipher("Aa BZ", CipherMode::Encrypt), "BxxCA");
        assert_eq!(cipher.apply_cipher("a!B", CipherMode::Decrypt), "xxA");
    }

    #[test]
    fn test_negative_key() {
        assert!(invalid_key_message("-5").contains("negative"));
    }

    #[test]
    fn test_non_numeric_key() {
        let msg = invalid_key_message("abc");
        assert!(msg.contains("could not be converted"));
        assert!(!msg.contains("too big"));
        invalid_key_message("12abc");
        invalid_key_message(" 7");
    }

    #[test]
    fn test_oversized_key() {
        assert!(invalid_key_message("99999999999999999999999999").contains("too big"));
    }

    proptest! {
        #[test]
        fn round_trip(key in any::<u64>(), text in "[A-Z]{0,64}") {
            let cipher: CaesarCipher = key.to_string().parse().unwrap();
            let cipher_text = cipher.apply_cipher(&text, CipherMode::Encrypt);
            prop_assert_eq!(cipher.apply_cipher(&cipher_text, CipherMode::Decrypt), text);
        }

        #[test]
        fn congruent_keys_agree(key in 0usize..1000, turns in 1usize..50, text in "[A-Z ]{0,64}") {
            let a = CaesarCipher::new(key);
            let b = CaesarCipher::new(key + turns * Alphabet::SIZE);
            for mode in [CipherMode::Encrypt, CipherMode::Decrypt] {
                prop_assert_eq!(a.apply_cipher(&text, mode), b.apply_cipher(&text, mode));
            }
        }

        #[test]
        fn length_is_preserved(key in any::<usize>(), text in ".{0,64}") {
            let cipher = CaesarCipher::new(key);
            prop_assert_eq!(
                cipher.apply_cipher(&text, CipherMode::Encrypt).chars().count(),
                text.chars().count()
            );
        }
    }
}
