//! Interleaved 2 of 5. Digits are encoded in pairs: the first digit of a
//! pair drives the bars and the second one the spaces.

use crate::buffer::{EncodingBuffer, SymbolKind};
use crate::dimensions::WideRatio;
use crate::encoder::{Encoder, Payload};
use crate::helpers::upc_check_digit;
use crate::pattern::{ModuleKind, Pattern, MAX_MODULES};
use crate::symbology::Symbology;
use crate::tables::{I2OF5_DIGITS, I2OF5_START, I2OF5_STOP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interleaved2of5 {
    symbology: Symbology,
    check_digit: bool,
    ratio: WideRatio,
}

impl Interleaved2of5 {
    /// # Panics
    ///
    /// Panics if `symbology` is not an Interleaved 2 of 5 variant.
    pub fn new(symbology: Symbology, ratio: WideRatio) -> Self {
        let check_digit = match symbology {
            Symbology::I2of5 => false,
            Symbology::I2of5C => true,
            _ => panic!("{symbology} is not an Interleaved 2 of 5 symbology"),
        };
        Self { symbology, check_digit, ratio }
    }

    /// Pattern of the digit pair `(bars, spaces)`.
    pub fn pair_pattern(&self, bars: u8, spaces: u8) -> Pattern {
        let bars = I2OF5_DIGITS[bars as usize].as_bytes();
        let spaces = I2OF5_DIGITS[spaces as usize].as_bytes();

        let mut widths = [0u8; MAX_MODULES];
        for (i, (&b, &s)) in bars.iter().zip(spaces).enumerate() {
            widths[2 * i] = self.width(b);
            widths[2 * i + 1] = self.width(s);
        }
        Pattern::from_widths(&widths, ModuleKind::Bar)
    }

    fn width(&self, letter: u8) -> u8 {
        if letter == b'W' { self.ratio.wide() } else { 1 }
    }
}

impl Encoder for Interleaved2of5 {
    fn symbology(&self) -> Symbology {
        self.symbology
    }

    fn encode(&self, value: &str, buffer: &mut EncodingBuffer) -> Payload {
        if value.is_empty() {
            return Payload::new("");
        }

        let mut digits = value.to_owned();
        if self.check_digit {
            let check = upc_check_digit(&digits);
            digits.push((b'0' + check) as char);
        }
        if digits.len() % 2 == 1 {
            digits.insert(0, '0');
        }

        buffer.push("", SymbolKind::Control, Pattern::from_letters(I2OF5_START, self.ratio, ModuleKind::Bar));
        for (k, pair) in digits.as_bytes().chunks_exact(2).enumerate() {
            let pattern = self.pair_pattern(pair[0] - b'0', pair[1] - b'0');
            buffer.push(&digits[2 * k..2 * k + 2], SymbolKind::Data, pattern);
        }
        buffer.push("", SymbolKind::Control, Pattern::from_letters(I2OF5_STOP, self.ratio, ModuleKind::Bar));

        Payload::new(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use pretty_assertions::assert_eq;

    fn encode(symbology: Symbology, raw: &str) -> (EncodingBuffer, Payload) {
        let encoder = Interleaved2of5::new(symbology, WideRatio::Three);
        let mut buffer = EncodingBuffer::new();
        let payload = encoder.encode(&encoder.validate(raw), &mut buffer);
        (buffer, payload)
    }

    #[test]
    fn test_pair_pattern() {
        let encoder = Interleaved2of5::new(Symbology::I2of5, WideRatio::Three);
        // 1 = WNNNW on bars, 2 = NWNNW on spaces
        let p = encoder.pair_pattern(1, 2);
        assert_eq!(p.widths(), &[3, 1, 1, 3, 1, 1, 1, 1, 3, 3]);
        assert_eq!(p.width(), 4 * 3 + 6);
    }

    #[test]
    fn test_encode_pairs() {
        let (buffer, payload) = encode(Symbology::I2of5, "1234");
        assert_eq!(payload.value, "1234");
        let texts: Vec<&str> = buffer.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["", "12", "34", ""]);
        // start 4, two pairs of 18, stop 5
        assert_eq!(buffer.min_width(), 4 + 18 * 2 + 5);
    }

    #[test]
    fn test_check_digit_makes_length_even() {
        assert_eq!(validate(Symbology::I2of5C, "1234").len() % 2, 1);
        let (buffer, payload) = encode(Symbology::I2of5C, "123");
        // 1*3 + 2 + 3*3 = 14, check 6
        assert_eq!(payload.value, "1236");
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn test_odd_input_padded() {
        let (_, payload) = encode(Symbology::I2of5, "123");
        assert_eq!(payload.value, "0123");
    }
}
