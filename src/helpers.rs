//! Character filters, check digits and the character-type classifier shared
//! by validators and encoders.

use crate::buffer::SymbolKind;
use crate::symbology::{Family, Symbology};

/// Replaces every non-ASCII character with a single space.
pub fn only_ascii(s: &str) -> String {
    s.chars().map(|c| if c.is_ascii() { c } else { ' ' }).collect()
}

/// Keeps the ASCII digits of `s`. With a `length`, the result keeps the first
/// `length` digits or is left-padded with `0` up to it.
pub fn only_numeric(s: &str, length: Option<usize>) -> String {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    match length {
        Some(len) if digits.len() > len => digits[..len].to_owned(),
        Some(len) => format!("{digits:0>len$}"),
        None => digits,
    }
}

/// Numeric filter that guarantees an even number of digits.
pub fn even_numeric(s: &str) -> String {
    let digits = only_numeric(s, None);
    if digits.len() % 2 == 0 { digits } else { format!("0{digits}") }
}

/// Numeric filter that guarantees an odd number of digits.
pub fn odd_numeric(s: &str) -> String {
    let digits = only_numeric(s, None);
    if digits.len() % 2 == 1 { digits } else { format!("0{digits}") }
}

/// Uppercases `s` and blanks out anything Code 39 cannot represent without
/// full ASCII.
pub fn code39_restricted(s: &str) -> String {
    s.chars()
        .map(|c| c.to_ascii_uppercase())
        .map(|c| match c {
            '0'..='9' | 'A'..='Z' | '-' | '.' | '$' | '/' | '+' | '%' | ' ' => c,
            _ => ' ',
        })
        .collect()
}

/// Mod 10 check digit with alternating 3/1 weights, the rightmost digit
/// weighted 3. Used by UPC, EAN and Interleaved 2 of 5.
pub fn upc_check_digit(digits: &str) -> u8 {
    let parity = digits.len() % 2;
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            debug_assert!(b.is_ascii_digit(), "check digits are computed over digits only");
            let weight = if i % 2 == parity { 1 } else { 3 };
            (b - b'0') as u32 * weight
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Classifies the character at `position` of the value being encoded.
pub fn char_kind(symbology: Symbology, position: usize, c: u8) -> SymbolKind {
    match symbology.family() {
        Family::Code128 if c < 32 || c == 127 => SymbolKind::Hidden,
        Family::EanUpc if symbology == Symbology::UpcA && (position == 0 || position == 11) => SymbolKind::Hidden,
        _ => SymbolKind::Data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_ascii() {
        assert_eq!(only_ascii(""), "");
        assert_eq!(only_ascii("abc\x01"), "abc\x01");
        assert_eq!(only_ascii("café №5"), "caf   5");
    }

    #[test]
    fn test_only_numeric() {
        assert_eq!(only_numeric("a1b2-3", None), "123");
        assert_eq!(only_numeric("123", Some(5)), "00123");
        assert_eq!(only_numeric("1234567", Some(5)), "12345");
        assert_eq!(only_numeric("", Some(3)), "000");
        assert_eq!(only_numeric("x", None), "");
    }

    #[test]
    fn test_parity_filters() {
        assert_eq!(even_numeric("1234"), "1234");
        assert_eq!(even_numeric("123"), "0123");
        assert_eq!(even_numeric(""), "");
        assert_eq!(odd_numeric("123"), "123");
        assert_eq!(odd_numeric("12"), "012");
        assert_eq!(odd_numeric(""), "0");
    }

    #[test]
    fn test_code39_restricted() {
        assert_eq!(code39_restricted("abc-12*x_"), "ABC-12 X ");
        assert_eq!(code39_restricted("$/+% ."), "$/+% .");
    }

    #[test]
    fn test_filters_idempotent() {
        let inputs = ["", "12a3", "héllo wörld", "ab*c-1", "0000", "9"];
        for s in inputs {
            let n = only_numeric(s, None);
            assert_eq!(only_numeric(&n, None), n);
            let n = only_numeric(s, Some(7));
            assert_eq!(only_numeric(&n, Some(7)), n);
            let e = even_numeric(s);
            assert_eq!(even_numeric(&e), e);
            let o = odd_numeric(s);
            assert_eq!(odd_numeric(&o), o);
            let a = only_ascii(s);
            assert_eq!(only_ascii(&a), a);
            let r = code39_restricted(s);
            assert_eq!(code39_restricted(&r), r);
        }
    }

    #[test]
    fn test_upc_check_digit() {
        assert_eq!(upc_check_digit("03600029145"), 2);
        assert_eq!(upc_check_digit("400638133393"), 1);
        assert_eq!(upc_check_digit("9638507"), 4);
        assert_eq!(upc_check_digit(""), 0);
    }

    #[test]
    fn test_char_kind() {
        assert_eq!(char_kind(Symbology::Code128Bac, 0, b'A'), SymbolKind::Data);
        assert_eq!(char_kind(Symbology::Code128Abc, 3, 0x09), SymbolKind::Hidden);
        assert_eq!(char_kind(Symbology::UpcA, 0, b'0'), SymbolKind::Hidden);
        assert_eq!(char_kind(Symbology::UpcA, 11, b'2'), SymbolKind::Hidden);
        assert_eq!(char_kind(Symbology::UpcA, 5, b'2'), SymbolKind::Data);
        assert_eq!(char_kind(Symbology::Ean13, 0, b'4'), SymbolKind::Data);
    }
}
