//! Ordered symbol storage filled by the encoders.

use crate::pattern::Pattern;

/// How a symbol should be treated by whatever draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Plain data, printed under its bars.
    Data,
    /// Start, stop, subset change, function and check symbols.
    Control,
    /// Carries a value but is not printed on its own (guards, UPC-A outer
    /// digits, control characters).
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub text: String,
    pub kind: SymbolKind,
    pub pattern: Pattern,
    /// Cached `pattern.width()`.
    pub width: u32,
}

impl Symbol {
    pub fn new(text: impl Into<String>, kind: SymbolKind, pattern: Pattern) -> Self {
        Self { text: text.into(), kind, pattern, width: pattern.width() }
    }
}

/// Symbols in append order along with their summed width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingBuffer {
    symbols: Vec<Symbol>,
    min_width: u32,
}

impl EncodingBuffer {
    pub const fn new() -> Self {
        Self { symbols: Vec::new(), min_width: 0 }
    }

    /// Appends a symbol and returns its position.
    pub fn push(&mut self, text: impl Into<String>, kind: SymbolKind, pattern: Pattern) -> usize {
        let symbol = Symbol::new(text, kind, pattern);
        self.min_width += symbol.width;
        self.symbols.push(symbol);
        self.symbols.len() - 1
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
        self.min_width = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Sum of all symbol widths, in narrow units.
    #[inline]
    pub const fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// The whole barcode as one item per narrow unit, `true` for bars.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.symbols.iter().flat_map(|s| s.pattern.bits())
    }
}

impl<'a> IntoIterator for &'a EncodingBuffer {
    type Item = &'a Symbol;
    type IntoIter = core::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
