//! Three-letter synthetic ticker symbols.
//!
//! Every request carries a `Symbol` made of three ASCII uppercase letters, each
//! drawn independently, so repeats such as `AAA` are valid. The stub server
//! parses the same type back out of incoming request lines.
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::QuoteError;

/// Alphabet symbols are drawn from.
pub const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Number of letters in a symbol.
pub const SYMBOL_LEN: usize = 3;

/// A ticker symbol of exactly three ASCII uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol([u8; SYMBOL_LEN]);

impl Symbol {
    /// Draw a random symbol; every position is rolled independently and uniformly over `A-Z`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = [0u8; SYMBOL_LEN];
        for letter in letters.iter_mut() {
            *letter = LETTERS[rng.random_range(0..LETTERS.len())];
        }
        Symbol(letters)
    }

    /// The symbol as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ever built from `LETTERS` or validated input.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != SYMBOL_LEN || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(QuoteError::InvalidSymbol(s.to_string()));
        }
        let mut letters = [0u8; SYMBOL_LEN];
        letters.copy_from_slice(bytes);
        Ok(Symbol(letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_symbols_are_three_uppercase_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let symbol = Symbol::random(&mut rng);
            let text = symbol.to_string();
            assert_eq!(text.len(), SYMBOL_LEN);
            assert!(text.bytes().all(|b| b.is_ascii_uppercase()), "{text}");
        }
    }

    #[test]
    fn random_symbols_cover_the_alphabet_and_allow_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 26];
        let mut repeated = false;
        for _ in 0..2_000 {
            let symbol = Symbol::random(&mut rng);
            let b = symbol.as_str().as_bytes();
            for &c in b {
                seen[(c - b'A') as usize] = true;
            }
            repeated |= b[0] == b[1] || b[1] == b[2] || b[0] == b[2];
        }
        assert!(seen.iter().all(|&s| s));
        assert!(repeated);
    }

    #[test]
    fn parses_valid_symbols() {
        assert_eq!("AAA".parse::<Symbol>().unwrap().as_str(), "AAA");
        assert_eq!("XYZ".parse::<Symbol>().unwrap().to_string(), "XYZ");
    }

    #[test]
    fn rejects_invalid_symbols() {
        for bad in ["", "AB", "ABCD", "abc", "A1C", "ÄBC"] {
            let err = bad.parse::<Symbol>().unwrap_err();
            assert!(matches!(err, QuoteError::InvalidSymbol(_)), "{bad}");
        }
    }
}
