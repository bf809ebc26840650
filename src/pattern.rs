//! Bar/space module sequences.
//!
//! A [Pattern] is the full run of modules drawn for one symbol. Widths are
//! stored inline so patterns stay `Copy` and can be built in `const` context.

use core::iter;
use crate::dimensions::WideRatio;

/// Maximum number of modules a single pattern can hold. The widest users are
/// a Code 39 character with its inter-character gap and an Interleaved 2 of 5
/// digit pair, both 10 modules.
pub const MAX_MODULES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Bar,
    Space,
}

impl ModuleKind {
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            ModuleKind::Bar => ModuleKind::Space,
            ModuleKind::Space => ModuleKind::Bar,
        }
    }

    #[inline]
    pub const fn is_bar(self) -> bool {
        matches!(self, ModuleKind::Bar)
    }
}

/// One bar or space, `width` narrow units wide (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Module {
    pub kind: ModuleKind,
    pub width: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    widths: [u8; MAX_MODULES],
    len: u8,
    first: ModuleKind,
}

impl Pattern {
    /// Builds a pattern from raw widths, alternating kinds starting with
    /// `first`.
    pub const fn from_widths(widths: &[u8], first: ModuleKind) -> Self {
        assert!(widths.len() <= MAX_MODULES, "pattern has too many modules");

        let mut stored = [0u8; MAX_MODULES];
        let mut i = 0;
        while i < widths.len() {
            assert!(widths[i] >= 1, "module width must be at least one narrow unit");
            stored[i] = widths[i];
            i += 1;
        }

        Self { widths: stored, len: widths.len() as u8, first }
    }

    /// Builds a pattern from a digit string such as `"212222"`, each digit
    /// being the width of one module.
    pub const fn from_digits(digits: &str, first: ModuleKind) -> Self {
        let bytes = digits.as_bytes();
        assert!(bytes.len() <= MAX_MODULES, "pattern has too many modules");

        let mut widths = [0u8; MAX_MODULES];
        let mut i = 0;
        while i < bytes.len() {
            let d = bytes[i];
            assert!(d >= b'1' && d <= b'9', "module widths must be digits between 1 and 9");
            widths[i] = d - b'0';
            i += 1;
        }

        Self { widths, len: bytes.len() as u8, first }
    }

    /// Builds a pattern from a narrow/wide letter string such as
    /// `"NWNNWNWNN"`. Narrow modules are one unit, wide modules are `ratio`
    /// units.
    pub const fn from_letters(letters: &str, ratio: WideRatio, first: ModuleKind) -> Self {
        let bytes = letters.as_bytes();
        assert!(bytes.len() <= MAX_MODULES, "pattern has too many modules");

        let mut widths = [0u8; MAX_MODULES];
        let mut i = 0;
        while i < bytes.len() {
            widths[i] = match bytes[i] {
                b'N' => 1,
                b'W' => ratio.wide(),
                _ => panic!("narrow/wide patterns only contain 'N' and 'W'"),
            };
            i += 1;
        }

        Self { widths, len: bytes.len() as u8, first }
    }

    /// Appends a one unit module of the kind following the last one.
    pub const fn with_gap(mut self) -> Self {
        assert!((self.len as usize) < MAX_MODULES, "no room left for the gap module");
        self.widths[self.len as usize] = 1;
        self.len += 1;
        self
    }

    #[inline]
    pub const fn first(&self) -> ModuleKind {
        self.first
    }

    /// Number of modules (bars and spaces).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total width in narrow units.
    pub const fn width(&self) -> u32 {
        let mut sum = 0;
        let mut i = 0;
        while i < self.len as usize {
            sum += self.widths[i] as u32;
            i += 1;
        }
        sum
    }

    pub fn widths(&self) -> &[u8] {
        &self.widths[..self.len as usize]
    }

    #[inline]
    pub const fn kind_at(&self, index: usize) -> ModuleKind {
        if index % 2 == 0 { self.first } else { self.first.flip() }
    }

    pub fn modules(&self) -> Modules {
        self.into_iter()
    }

    /// One item per narrow unit, `true` for bar units.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        self.modules()
            .flat_map(|m| iter::repeat(m.kind.is_bar()).take(m.width as usize))
    }
}

impl iter::IntoIterator for Pattern {
    type Item = Module;
    type IntoIter = Modules;

    fn into_iter(self) -> Self::IntoIter {
        Modules { front: 0, back: self.len, pattern: self }
    }
}

#[derive(Debug, Clone)]
pub struct Modules {
    pattern: Pattern,
    front: u8,
    back: u8,
}

impl Modules {
    fn module(&self, index: u8) -> Module {
        Module {
            kind: self.pattern.kind_at(index as usize),
            width: self.pattern.widths[index as usize],
        }
    }
}

impl iter::Iterator for Modules {
    type Item = Module;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let m = self.module(self.front);
            self.front += 1;
            Some(m)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = (self.back - self.front) as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Modules {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.module(self.back))
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Modules {}
impl iter::FusedIterator for Modules {}
