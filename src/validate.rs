//! Input repair. Every symbology accepts any text: validators turn it into
//! something its encoder can represent instead of rejecting it.

use crate::helpers::{code39_restricted, even_numeric, odd_numeric, only_ascii, only_numeric};
use crate::symbology::Symbology;

/// Data digits (check digit excluded) of the fixed-length EAN/UPC variants.
pub const EAN13_DATA_LEN: usize = 12;
pub const UPCA_DATA_LEN: usize = 11;
pub const EAN8_DATA_LEN: usize = 7;

/// Normalizes `raw` for `symbology`. The result is always encodable and
/// validating it again changes nothing.
pub fn validate(symbology: Symbology, raw: &str) -> String {
    match symbology {
        Symbology::Code128Abc
        | Symbology::Code128Bac
        | Symbology::Code128Ab
        | Symbology::Code128Ba
        | Symbology::Gs1_128 => only_ascii(raw),
        Symbology::Code39 | Symbology::Code39C => code39_restricted(raw),
        Symbology::Code39Full | Symbology::Code39FullC => only_ascii(raw),
        Symbology::I2of5 => even_numeric(raw),
        // the check digit appended by the encoder evens the length out
        Symbology::I2of5C => odd_numeric(raw),
        Symbology::Ean13 => only_numeric(raw, Some(EAN13_DATA_LEN)),
        Symbology::UpcA => only_numeric(raw, Some(UPCA_DATA_LEN)),
        Symbology::Ean8 => only_numeric(raw, Some(EAN8_DATA_LEN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_interleaved_parity() {
        assert_eq!(validate(Symbology::I2of5, "1234"), "1234");
        assert_eq!(validate(Symbology::I2of5, "123"), "0123");
        assert_eq!(validate(Symbology::I2of5C, "1234"), "01234");
        assert_eq!(validate(Symbology::I2of5C, "123"), "123");
    }

    #[test]
    fn test_ean_lengths() {
        assert_eq!(validate(Symbology::Ean13, "4006381333931"), "400638133393");
        assert_eq!(validate(Symbology::UpcA, "36000291452"), "36000291452");
        assert_eq!(validate(Symbology::UpcA, "3600029145"), "03600029145");
        assert_eq!(validate(Symbology::Ean8, "96-385-07"), "9638507");
    }

    #[test]
    fn test_code39_variants() {
        assert_eq!(validate(Symbology::Code39, "code*39"), "CODE 39");
        assert_eq!(validate(Symbology::Code39Full, "code*39"), "code*39");
    }

    #[test]
    fn test_code128_ascii() {
        assert_eq!(validate(Symbology::Gs1_128, "0101234€"), "0101234 ");
    }

    #[test]
    fn test_idempotent_for_every_symbology() {
        let inputs = ["", "Hello, World!", "12345", "ÄÖÜ 42", "\x01\x7fabc", "*-$%"];
        for sym in Symbology::ALL {
            for raw in inputs {
                let once = validate(sym, raw);
                assert_eq!(validate(sym, &once), once, "{sym} on {raw:?}");
            }
        }
    }
}
