//! EAN-13, UPC-A and EAN-8.
//!
//! All three share the same digit tables and guards. They differ in how many
//! digits they carry, where the middle guard goes and which parity each digit
//! position uses.

use crate::buffer::{EncodingBuffer, SymbolKind};
use crate::encoder::{Encoder, Payload};
use crate::helpers::{char_kind, upc_check_digit};
use crate::pattern::{ModuleKind, Pattern};
use crate::symbology::Symbology;
use crate::tables::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Digits including the check digit.
    pub digits: usize,
    /// Leading digits not drawn as bars (EAN-13 folds its first digit into
    /// the parity of the left half).
    pub skip: usize,
    /// Number of drawn digits left of the middle guard.
    pub middle: usize,
}

impl Layout {
    pub const EAN13: Layout = Layout { digits: 13, skip: 1, middle: 6 };
    pub const UPCA: Layout = Layout { digits: 12, skip: 0, middle: 6 };
    pub const EAN8: Layout = Layout { digits: 8, skip: 0, middle: 4 };
}

/// Parity letters (`L`, `G` or `R`) of every drawn digit.
fn group_pattern(symbology: Symbology, leading: u8) -> String {
    match symbology {
        Symbology::Ean13 => format!("{}RRRRRR", EAN13_PARITY[leading as usize]),
        Symbology::UpcA => String::from("LLLLLLRRRRRR"),
        Symbology::Ean8 => String::from("LLLLRRRR"),
        _ => unreachable!("{symbology} has no EAN/UPC group pattern"),
    }
}

pub fn digit_pattern(digit: u8, parity: u8) -> Pattern {
    let digit = digit as usize;
    match parity {
        b'L' => Pattern::from_digits(EAN_L[digit], ModuleKind::Space),
        b'G' => Pattern::from_digits(EAN_G[digit], ModuleKind::Space),
        b'R' => Pattern::from_digits(EAN_L[digit], ModuleKind::Bar),
        _ => unreachable!("unknown parity {:?}", parity as char),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EanUpc {
    symbology: Symbology,
    layout: Layout,
}

impl EanUpc {
    /// # Panics
    ///
    /// Panics if `symbology` is not EAN-13, UPC-A or EAN-8.
    pub fn new(symbology: Symbology) -> Self {
        let layout = match symbology {
            Symbology::Ean13 => Layout::EAN13,
            Symbology::UpcA => Layout::UPCA,
            Symbology::Ean8 => Layout::EAN8,
            _ => panic!("{symbology} is not an EAN/UPC symbology"),
        };
        Self { symbology, layout }
    }

    #[inline]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    fn labels(&self, digits: &str) -> (String, String) {
        let first = &digits[..1];
        match self.symbology {
            Symbology::Ean13 => (first.to_owned(), String::from(">")),
            Symbology::UpcA => (first.to_owned(), digits[digits.len() - 1..].to_owned()),
            _ => (String::from("<"), String::from(">")),
        }
    }
}

impl Encoder for EanUpc {
    fn symbology(&self) -> Symbology {
        self.symbology
    }

    fn encode(&self, value: &str, buffer: &mut EncodingBuffer) -> Payload {
        if value.is_empty() {
            return Payload::new("");
        }
        debug_assert_eq!(value.len(), self.layout.digits - 1, "EAN/UPC values are validated to a fixed length");

        let mut digits = value.to_owned();
        digits.push((b'0' + upc_check_digit(value)) as char);

        let bytes = digits.as_bytes();
        let group = group_pattern(self.symbology, bytes[0] - b'0');

        buffer.push("", SymbolKind::Hidden, Pattern::from_digits(EAN_START_GUARD, ModuleKind::Bar));
        for (k, (pos, &c)) in bytes.iter().enumerate().skip(self.layout.skip).enumerate() {
            if k == self.layout.middle {
                buffer.push("", SymbolKind::Hidden, Pattern::from_digits(EAN_MIDDLE_GUARD, ModuleKind::Space));
            }
            let pattern = digit_pattern(c - b'0', group.as_bytes()[k]);
            buffer.push(&digits[pos..pos + 1], char_kind(self.symbology, pos, c), pattern);
        }
        buffer.push("", SymbolKind::Hidden, Pattern::from_digits(EAN_END_GUARD, ModuleKind::Bar));

        let (prefix, suffix) = self.labels(&digits);
        Payload::new(digits).with_labels(prefix, suffix)
    }
}
