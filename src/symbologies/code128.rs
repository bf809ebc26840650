//! Code 128 and GS1-128.
//!
//! Encoding happens in two passes. [Code128::segments] splits the value into
//! runs that each stay in one subset, then [Code128::encode] emits a subset
//! change (or start) symbol per run followed by its data, the checksum and
//! the stop symbol.

use core::ops::Range;

use crate::buffer::{EncodingBuffer, SymbolKind};
use crate::encoder::{Encoder, Payload};
use crate::helpers::char_kind;
use crate::pattern::{ModuleKind, Pattern};
use crate::symbology::Symbology;
use crate::tables::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subset {
    A,
    B,
    C,
}

/// A run of the value encoded in a single subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub subset: Subset,
    pub range: Range<usize>,
}

/// Symbol value announcing `to`, coming from `from` (`None` for the start
/// symbol).
///
/// Panics when asked to switch to the subset already active, which the
/// segmentation never produces.
pub const fn transition(from: Option<Subset>, to: Subset) -> u8 {
    match (from, to) {
        (None, Subset::A) => CODE128_START_A,
        (None, Subset::B) => CODE128_START_B,
        (None, Subset::C) => CODE128_START_C,
        (Some(Subset::B | Subset::C), Subset::A) => CODE128_CODE_A,
        (Some(Subset::A | Subset::C), Subset::B) => CODE128_CODE_B,
        (Some(Subset::A | Subset::B), Subset::C) => CODE128_CODE_C,
        (Some(Subset::A), Subset::A) | (Some(Subset::B), Subset::B) | (Some(Subset::C), Subset::C) =>
            panic!("a segment never switches to the subset already active"),
    }
}

#[inline]
fn pattern(value: u8) -> Pattern {
    Pattern::from_digits(CODE128_PATTERNS[value as usize], ModuleKind::Bar)
}

/// Symbol value of an ASCII byte in subset A or B.
fn char_value(subset: Subset, c: u8) -> u8 {
    match subset {
        Subset::A if c < 32 => c + 64,
        Subset::A if c < 96 => c - 32,
        Subset::B if (32..128).contains(&c) => c - 32,
        _ => unreachable!("byte {c} is not part of subset {subset:?}"),
    }
}

/// ZPL invocation code of a control symbol. ZPL has no separate code for
/// switching to a subset versus starting in it.
const fn zpl_control(value: u8) -> &'static str {
    match value {
        CODE128_START_A => ">9",
        CODE128_START_B => ">:",
        CODE128_START_C => ">;",
        CODE128_CODE_C => ">5",
        CODE128_CODE_B => ">6",
        CODE128_CODE_A => ">7",
        CODE128_FNC1 => ">8",
        _ => "",
    }
}

fn control_label(value: u8) -> &'static str {
    match value {
        CODE128_START_A => "START A",
        CODE128_START_B => "START B",
        CODE128_START_C => "START C",
        CODE128_CODE_A => "CODE A",
        CODE128_CODE_B => "CODE B",
        CODE128_CODE_C => "CODE C",
        CODE128_FNC1 => "FNC1",
        CODE128_STOP => "STOP",
        _ => unreachable!("symbol value {value} is not a control symbol"),
    }
}

/// Running mod 103 sum. The symbol at position `p` weighs `max(p, 1)`.
#[derive(Debug, Default)]
struct Checksum {
    sum: u32,
}

impl Checksum {
    fn push(&mut self, buffer: &mut EncodingBuffer, text: impl Into<String>, kind: SymbolKind, value: u8) {
        let position = buffer.push(text, kind, pattern(value)) as u32;
        self.sum += value as u32 * position.max(1);
    }

    fn value(&self) -> u8 {
        (self.sum % CODE128_CHECK_MODULUS) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    symbology: Symbology,
    start: Subset,
    suppress_c: bool,
    gs1: bool,
}

impl Code128 {
    /// # Panics
    ///
    /// Panics if `symbology` is not a Code 128 variant.
    pub fn new(symbology: Symbology) -> Self {
        let (start, suppress_c, gs1) = match symbology {
            Symbology::Code128Abc => (Subset::A, false, false),
            Symbology::Code128Bac => (Subset::B, false, false),
            Symbology::Code128Ab => (Subset::A, true, false),
            Symbology::Code128Ba => (Subset::B, true, false),
            Symbology::Gs1_128 => (Subset::B, false, true),
            _ => panic!("{symbology} is not a Code 128 symbology"),
        };
        Self { symbology, start, suppress_c, gs1 }
    }

    /// Subset used for runs that no character forces.
    #[inline]
    pub const fn start_subset(&self) -> Subset {
        self.start
    }

    /// Number of digits at `pos` to pack in subset C, or 0 to stay in the
    /// current subset.
    ///
    /// A run touching the start of the value needs 4 digits and drops a
    /// trailing odd digit. A run touching the end needs 4 digits and an even
    /// length. Any other run needs 6 digits and an even length.
    pub fn subset_c_run(value: &[u8], pos: usize) -> usize {
        let run = value[pos..].iter().take_while(|c| c.is_ascii_digit()).count();
        let at_start = pos == 0;
        let at_end = pos + run == value.len();

        if at_start && at_end && run % 2 == 0 {
            run
        } else if at_start && run >= 4 {
            run & !1
        } else if at_end && run >= 4 && run % 2 == 0 {
            run
        } else if run >= 6 && run % 2 == 0 {
            run
        } else {
            0
        }
    }

    /// Splits `value` into single subset runs, left to right.
    pub fn segments(&self, value: &str) -> Vec<Segment> {
        let bytes = value.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;
        let mut current: Option<Subset> = None;
        let mut i = 0;

        let close = |segments: &mut Vec<Segment>, range: Range<usize>, subset: Subset| {
            tracing::trace!(?subset, ?range, "code 128 segment");
            segments.push(Segment { subset, range });
        };

        while i < bytes.len() {
            let c = bytes[i];
            let forced = match c {
                0..=31 => Some(Subset::A),
                96..=u8::MAX => Some(Subset::B),
                b'0'..=b'9' if !self.suppress_c => {
                    let count = Self::subset_c_run(bytes, i);
                    if count > 0 {
                        if i > start {
                            close(&mut segments, start..i, current.unwrap_or(self.start));
                        }
                        close(&mut segments, i..i + count, Subset::C);
                        i += count;
                        start = i;
                        current = None;
                        continue;
                    }
                    None
                },
                _ => None,
            };

            match (forced, current) {
                (Some(subset), None) => current = Some(subset),
                (Some(subset), Some(active)) if subset != active => {
                    // the character opens the next run
                    close(&mut segments, start..i, active);
                    start = i;
                    current = Some(subset);
                },
                _ => (),
            }
            i += 1;
        }

        if start < bytes.len() {
            close(&mut segments, start..bytes.len(), current.unwrap_or(self.start));
        }
        segments
    }
}

impl Encoder for Code128 {
    fn symbology(&self) -> Symbology {
        self.symbology
    }

    fn encode(&self, value: &str, buffer: &mut EncodingBuffer) -> Payload {
        let bytes = value.as_bytes();
        let segments = self.segments(value);
        if segments.is_empty() {
            return Payload::new("");
        }

        let mut checksum = Checksum::default();
        let mut last: Option<Subset> = None;
        let mut zpl = String::with_capacity(value.len() + 2 * segments.len());

        for segment in &segments {
            let shift = transition(last, segment.subset);
            checksum.push(buffer, control_label(shift), SymbolKind::Control, shift);
            zpl.push_str(zpl_control(shift));
            if last.is_none() && self.gs1 {
                checksum.push(buffer, control_label(CODE128_FNC1), SymbolKind::Control, CODE128_FNC1);
                zpl.push_str(zpl_control(CODE128_FNC1));
            }

            let range = segment.range.clone();
            match segment.subset {
                Subset::C => {
                    for (k, pair) in bytes[range.clone()].chunks(2).enumerate() {
                        debug_assert!(pair.len() == 2, "subset C runs have an even length");
                        let v = (pair[0] - b'0') * 10 + (pair[1] - b'0');
                        let text = &value[range.start + 2 * k..range.start + 2 * k + 2];
                        checksum.push(buffer, text, SymbolKind::Data, v);
                        zpl.push_str(text);
                    }
                },
                subset => {
                    for pos in range {
                        let c = bytes[pos];
                        let kind = char_kind(self.symbology, pos, c);
                        let v = char_value(subset, c);
                        checksum.push(buffer, &value[pos..pos + 1], kind, v);
                        // subset A data goes out as its two digit symbol value
                        if subset == Subset::A {
                            zpl.push_str(&format!("{v:02}"));
                        } else {
                            zpl.push(c as char);
                        }
                    }
                },
            }
            last = Some(segment.subset);
        }

        let check = checksum.value();
        buffer.push(check.to_string(), SymbolKind::Control, pattern(check));
        buffer.push(control_label(CODE128_STOP), SymbolKind::Control, pattern(CODE128_STOP));

        Payload::new(value).with_zpl(zpl)
    }
}
