use core::fmt;
use core::str::FromStr;

use crate::error::BarcodeError;

/// Supported linear symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbology {
    /// Code 128 starting in subset A, subset C allowed.
    Code128Abc,
    /// Code 128 starting in subset B, subset C allowed.
    #[default]
    Code128Bac,
    /// Code 128 starting in subset A, never switching to subset C.
    Code128Ab,
    /// Code 128 starting in subset B, never switching to subset C.
    Code128Ba,
    /// Code 128 with a leading FNC1 (GS1 application identifiers).
    Gs1_128,
    Code39,
    /// Code 39 with a mod 43 check character.
    Code39C,
    /// Code 39 full ASCII.
    Code39Full,
    /// Code 39 full ASCII with a mod 43 check character.
    Code39FullC,
    /// Interleaved 2 of 5.
    I2of5,
    /// Interleaved 2 of 5 with a mod 10 check digit.
    I2of5C,
    Ean13,
    UpcA,
    Ean8,
}

/// Encoder family a symbology belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Code128,
    Code39,
    Interleaved2of5,
    EanUpc,
}

impl Symbology {
    pub const ALL: [Symbology; 14] = [
        Symbology::Code128Abc,
        Symbology::Code128Bac,
        Symbology::Code128Ab,
        Symbology::Code128Ba,
        Symbology::Gs1_128,
        Symbology::Code39,
        Symbology::Code39C,
        Symbology::Code39Full,
        Symbology::Code39FullC,
        Symbology::I2of5,
        Symbology::I2of5C,
        Symbology::Ean13,
        Symbology::UpcA,
        Symbology::Ean8,
    ];

    /// Identifier accepted by [Symbology::from_name] and [FromStr].
    pub const fn name(self) -> &'static str {
        match self {
            Symbology::Code128Abc => "CODE128ABC",
            Symbology::Code128Bac => "CODE128BAC",
            Symbology::Code128Ab => "CODE128AB",
            Symbology::Code128Ba => "CODE128BA",
            Symbology::Gs1_128 => "GS1128",
            Symbology::Code39 => "CODE39",
            Symbology::Code39C => "CODE39C",
            Symbology::Code39Full => "CODE39FULL",
            Symbology::Code39FullC => "CODE39FULLC",
            Symbology::I2of5 => "I2OF5",
            Symbology::I2of5C => "I2OF5C",
            Symbology::Ean13 => "EAN13",
            Symbology::UpcA => "UPCA",
            Symbology::Ean8 => "EAN8",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Symbology::Code128Abc
            | Symbology::Code128Bac
            | Symbology::Code128Ab
            | Symbology::Code128Ba
            | Symbology::Gs1_128 => Family::Code128,
            Symbology::Code39
            | Symbology::Code39C
            | Symbology::Code39Full
            | Symbology::Code39FullC => Family::Code39,
            Symbology::I2of5 | Symbology::I2of5C => Family::Interleaved2of5,
            Symbology::Ean13 | Symbology::UpcA | Symbology::Ean8 => Family::EanUpc,
        }
    }

    /// Quiet zone required on each side, in narrow units.
    pub const fn quiet_zone(self) -> u16 {
        match self {
            Symbology::Ean13 => 11,
            Symbology::UpcA => 9,
            Symbology::Ean8 => 7,
            _ => 10,
        }
    }

    /// Resolves a case-insensitive identifier, falling back to
    /// [Symbology::Code128Bac] when the name is unknown.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "unknown symbology, using the default");
            Symbology::default()
        })
    }
}

impl FromStr for Symbology {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Symbology::ALL
            .into_iter()
            .find(|sym| sym.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| BarcodeError::UnknownSymbology(s.to_owned()))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("code128abc".parse(), Ok(Symbology::Code128Abc));
        assert_eq!("Gs1128".parse(), Ok(Symbology::Gs1_128));
        assert_eq!("CODE39FULLC".parse(), Ok(Symbology::Code39FullC));
        assert_eq!(" ean13 ".parse(), Ok(Symbology::Ean13));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "qr".parse::<Symbology>(),
            Err(BarcodeError::UnknownSymbology("qr".to_owned()))
        );
    }

    #[test]
    fn test_from_name_default() {
        assert_eq!(Symbology::from_name("nope"), Symbology::Code128Bac);
        assert_eq!(Symbology::from_name("upca"), Symbology::UpcA);
    }

    #[test]
    fn test_names_round_trip() {
        for sym in Symbology::ALL {
            assert_eq!(sym.to_string().parse(), Ok(sym));
        }
    }

    #[test]
    fn test_family() {
        assert_eq!(Symbology::Gs1_128.family(), Family::Code128);
        assert_eq!(Symbology::Code39FullC.family(), Family::Code39);
        assert_eq!(Symbology::I2of5C.family(), Family::Interleaved2of5);
        assert_eq!(Symbology::Ean8.family(), Family::EanUpc);
    }
}
