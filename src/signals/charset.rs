//! Charset signal - detects which character classes are present.

use crate::types::Charset;

const LOWERCASE_SIZE: usize = 26;
const UPPERCASE_SIZE: usize = 26;
const DIGITS_SIZE: usize = 10;
const SYMBOLS_SIZE: usize = 32;

/// Detects the character classes present in the candidate and the
/// theoretical alphabet size they imply.
///
/// Classes are ASCII-based; any character that is not an ASCII letter
/// or digit counts as a symbol, including whitespace and non-ASCII
/// characters.
pub fn charset_profile(password: &str) -> Charset {
    let lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let numbers = password.chars().any(|c| c.is_ascii_digit());
    let symbols = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut size = 0;
    if lowercase {
        size += LOWERCASE_SIZE;
    }
    if uppercase {
        size += UPPERCASE_SIZE;
    }
    if numbers {
        size += DIGITS_SIZE;
    }
    if symbols {
        size += SYMBOLS_SIZE;
    }

    Charset {
        lowercase,
        uppercase,
        numbers,
        symbols,
        size,
    }
}
