//! Code 39, optionally full ASCII and with a mod 43 check character.

use crate::buffer::{EncodingBuffer, SymbolKind};
use crate::dimensions::WideRatio;
use crate::encoder::{Encoder, Payload};
use crate::pattern::{ModuleKind, Pattern};
use crate::symbology::Symbology;
use crate::tables::{CODE39_ALPHABET, CODE39_GUARD, CODE39_PATTERNS};

const CHECK_MODULUS: u32 = 43;

/// Check value (and table index) of a restricted alphabet character.
pub fn check_value(c: u8) -> Option<u8> {
    CODE39_ALPHABET.iter().position(|&a| a == c).map(|p| p as u8)
}

/// Restricted alphabet characters standing for ASCII `c` in full ASCII mode.
pub const fn full_ascii(c: u8) -> (u8, Option<u8>) {
    match c {
        0 => (b'%', Some(b'U')),
        1..=26 => (b'$', Some(b'A' + c - 1)),
        27..=31 => (b'%', Some(b'A' + c - 27)),
        b'!'..=b',' => (b'/', Some(b'A' + c - b'!')),
        b'/' => (b'/', Some(b'O')),
        b':' => (b'/', Some(b'Z')),
        b';'..=b'?' => (b'%', Some(b'F' + c - b';')),
        b'@' => (b'%', Some(b'V')),
        b'['..=b'_' => (b'%', Some(b'K' + c - b'[')),
        b'`' => (b'%', Some(b'W')),
        b'a'..=b'z' => (b'+', Some(c - b'a' + b'A')),
        b'{'..=127 => (b'%', Some(b'P' + c - b'{')),
        _ => (c, None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code39 {
    symbology: Symbology,
    full_ascii: bool,
    check_digit: bool,
    ratio: WideRatio,
}

impl Code39 {
    /// # Panics
    ///
    /// Panics if `symbology` is not a Code 39 variant.
    pub fn new(symbology: Symbology, ratio: WideRatio) -> Self {
        let (full_ascii, check_digit) = match symbology {
            Symbology::Code39 => (false, false),
            Symbology::Code39C => (false, true),
            Symbology::Code39Full => (true, false),
            Symbology::Code39FullC => (true, true),
            _ => panic!("{symbology} is not a Code 39 symbology"),
        };
        Self { symbology, full_ascii, check_digit, ratio }
    }

    fn pattern(&self, letters: &str) -> Pattern {
        Pattern::from_letters(letters, self.ratio, ModuleKind::Bar)
    }

    /// Pushes one restricted character with its gap, returning its check
    /// value.
    fn push_char(&self, buffer: &mut EncodingBuffer, c: u8, kind: SymbolKind) -> u32 {
        let value = match check_value(c) {
            Some(v) => v,
            None => unreachable!("{:?} is not in the Code 39 alphabet", c as char),
        };
        let pattern = self.pattern(CODE39_PATTERNS[value as usize]).with_gap();
        buffer.push((c as char).to_string(), kind, pattern);
        value as u32
    }
}

impl Encoder for Code39 {
    fn symbology(&self) -> Symbology {
        self.symbology
    }

    fn encode(&self, value: &str, buffer: &mut EncodingBuffer) -> Payload {
        if value.is_empty() {
            return Payload::new("");
        }

        buffer.push("*", SymbolKind::Control, self.pattern(CODE39_GUARD).with_gap());

        let mut sum = 0;
        for c in value.bytes() {
            let mapped = if self.full_ascii { full_ascii(c) } else { (c, None) };
            match mapped {
                (single, None) => sum += self.push_char(buffer, single, SymbolKind::Data),
                (shift, Some(second)) => {
                    sum += self.push_char(buffer, shift, SymbolKind::Hidden);
                    sum += self.push_char(buffer, second, SymbolKind::Hidden);
                },
            }
        }

        let mut encoded = value.to_owned();
        if self.check_digit {
            let check = CODE39_ALPHABET[(sum % CHECK_MODULUS) as usize];
            self.push_char(buffer, check, SymbolKind::Control);
            encoded.push(check as char);
        }

        buffer.push("*", SymbolKind::Control, self.pattern(CODE39_GUARD));

        Payload::new(encoded)
    }
}
