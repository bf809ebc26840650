//! Normative pattern tables.

/// Code 128 symbol patterns indexed by symbol value (0..=106). Each entry
/// starts with a bar. 0..=102 are 11 units wide, 106 (STOP) is 13.
pub const CODE128_PATTERNS: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212", "221213",
    "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221", "223211", "221132",
    "221231", "213212", "223112", "312131", "311222", "321122", "321221", "312212", "322112", "322211",
    "212123", "212321", "232121", "111323", "131123", "131321", "112313", "132113", "132311", "211313",
    "231113", "231311", "112133", "112331", "132131", "113123", "113321", "133121", "313121", "211331",
    "231131", "213113", "213311", "213131", "311123", "311321", "331121", "312113", "312311", "332111",
    "314111", "221411", "431111", "111224", "111422", "121124", "121421", "141122", "141221", "112214",
    "112412", "122114", "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111",
    "111242", "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311", "113141",
    "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

pub const CODE128_CODE_C: u8 = 99;
pub const CODE128_CODE_B: u8 = 100;
pub const CODE128_CODE_A: u8 = 101;
pub const CODE128_FNC1: u8 = 102;
pub const CODE128_START_A: u8 = 103;
pub const CODE128_START_B: u8 = 104;
pub const CODE128_START_C: u8 = 105;
pub const CODE128_STOP: u8 = 106;
pub const CODE128_CHECK_MODULUS: u32 = 103;

/// Code 39 characters in check value order (0..=42).
pub const CODE39_ALPHABET: &[u8; 43] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Narrow/wide patterns for [CODE39_ALPHABET], bar first.
pub const CODE39_PATTERNS: [&str; 43] = [
    "NNNWWNWNN", "WNNWNNNNW", "NNWWNNNNW", "WNWWNNNNN", "NNNWWNNNW",
    "WNNWWNNNN", "NNWWWNNNN", "NNNWNNWNW", "WNNWNNWNN", "NNWWNNWNN",
    "WNNNNWNNW", "NNWNNWNNW", "WNWNNWNNN", "NNNNWWNNW", "WNNNWWNNN",
    "NNWNWWNNN", "NNNNNWWNW", "WNNNNWWNN", "NNWNNWWNN", "NNNNWWWNN",
    "WNNNNNNWW", "NNWNNNNWW", "WNWNNNNWN", "NNNNWNNWW", "WNNNWNNWN",
    "NNWNWNNWN", "NNNNNNWWW", "WNNNNNWWN", "NNWNNNWWN", "NNNNWNWWN",
    "WWNNNNNNW", "NWWNNNNNW", "WWWNNNNNN", "NWNNWNNNW", "WWNNWNNNN",
    "NWWNWNNNN", "NWNNNNWNW", "WWNNNNWNN", "NWWNNNWNN", "NWNWNWNNN",
    "NWNWNNNWN", "NWNNNWNWN", "NNNWNWNWN",
];

/// Start/stop character `*`.
pub const CODE39_GUARD: &str = "NWNNWNWNN";

/// Narrow/wide widths of a single Interleaved 2 of 5 digit.
pub const I2OF5_DIGITS: [&str; 10] = [
    "NNWWN", "WNNNW", "NWNNW", "WWNNN", "NNWNW",
    "WNWNN", "NWWNN", "NNNWW", "WNNWN", "NWNWN",
];

pub const I2OF5_START: &str = "NNNN";
pub const I2OF5_STOP: &str = "WNN";

/// EAN/UPC odd parity (L) digit widths. L and G patterns start with a
/// space, R patterns use the same widths as L starting with a bar.
pub const EAN_L: [&str; 10] = [
    "3211", "2221", "2122", "1411", "1132", "1231", "1114", "1312", "1213", "3112",
];

/// Even parity (G) digit widths, the L widths reversed.
pub const EAN_G: [&str; 10] = [
    "1123", "1222", "2212", "1141", "2311", "1321", "4111", "2131", "3121", "2113",
];

/// EAN-13 parity of the six left digits, selected by the leading digit.
pub const EAN13_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG",
    "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL", "LGGLGL",
];

pub const EAN_START_GUARD: &str = "111";
pub const EAN_MIDDLE_GUARD: &str = "11111";
pub const EAN_END_GUARD: &str = "111";

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(digits: &str) -> u32 {
        digits.bytes().map(|b| (b - b'0') as u32).sum()
    }

    #[test]
    fn test_code128_widths() {
        for (v, p) in CODE128_PATTERNS.iter().enumerate() {
            let expected = if v as u8 == CODE128_STOP { 13 } else { 11 };
            assert_eq!(sum(p), expected, "symbol value {v}");
        }
    }

    #[test]
    fn test_code39_shape() {
        for p in CODE39_PATTERNS.iter().chain([CODE39_GUARD].iter()) {
            assert_eq!(p.len(), 9);
            assert_eq!(p.matches('W').count(), 3, "{p}");
        }
    }

    #[test]
    fn test_i2of5_two_wide() {
        for p in I2OF5_DIGITS {
            assert_eq!(p.matches('W').count(), 2);
        }
    }

    #[test]
    fn test_ean_tables() {
        for (l, g) in EAN_L.iter().zip(EAN_G.iter()) {
            assert_eq!(sum(l), 7);
            assert_eq!(l.chars().rev().collect::<String>(), *g);
        }
    }
}
