//! Symbol interning.
//!
//! This module provides [`Symbol`], a cheap `Copy` handle for an interned
//! string, and [`Interner`], the table that hands them out. Compiler phases
//! that need repeated, allocation-free comparisons of identifier text (file
//! names, built-in names, diagnostic labels) intern through here rather than
//! carrying `String`s around.
//!
//! The semantic analyzer's symbol table does not use this type for source
//! identifiers; it compares borrowed name spans directly against the
//! source buffer instead, to avoid a dependency on a shared interner during
//! analysis. `Symbol` is ambient infrastructure for everything else.
//!
//! # Examples
//!
//! ```
//! use glintc_util::symbol::Interner;
//!
//! let mut interner = Interner::new();
//! let a = interner.intern("foo");
//! let b = interner.intern("foo");
//! assert_eq!(a, b);
//! assert_eq!(interner.resolve(a), "foo");
//! ```

use rustc_hash::FxHashMap;

/// A cheap, `Copy` handle for an interned string.
///
/// # Examples
///
/// ```
/// use glintc_util::symbol::Interner;
///
/// let mut interner = Interner::new();
/// let sym = interner.intern("hello");
/// assert_eq!(interner.resolve(sym), "hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Raw index into the owning [`Interner`]. Meaningless without it.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.0
    }
}

/// A string interner backed by a growable table.
///
/// Equal strings always intern to the same [`Symbol`]; interning is
/// idempotent.
#[derive(Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Symbol>,
}

impl Interner {
    /// Create an empty interner.
    ///
    /// # Examples
    ///
    /// ```
    /// use glintc_util::symbol::Interner;
    ///
    /// let interner = Interner::new();
    /// assert_eq!(interner.len(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            strings: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Intern `text`, returning its [`Symbol`].
    ///
    /// Interning the same text twice returns the same symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use glintc_util::symbol::Interner;
    ///
    /// let mut interner = Interner::new();
    /// let a = interner.intern("x");
    /// let b = interner.intern("x");
    /// let c = interner.intern("y");
    /// assert_eq!(a, b);
    /// assert_ne!(a, c);
    /// ```
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.lookup.get(text) {
            return sym;
        }
        let boxed: Box<str> = text.into();
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(boxed.clone());
        self.lookup.insert(boxed, sym);
        sym
    }

    /// Resolve a [`Symbol`] back to its text.
    ///
    /// # Panics
    ///
    /// Panics if `sym` was not produced by this interner.
    ///
    /// # Examples
    ///
    /// ```
    /// use glintc_util::symbol::Interner;
    ///
    /// let mut interner = Interner::new();
    /// let sym = interner.intern("name");
    /// assert_eq!(interner.resolve(sym), "name");
    /// ```
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }

    /// Number of distinct strings interned so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing has been interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let mut interner = Interner::new();
        let a = interner.intern("same");
        let b = interner.intern("same");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = Interner::new();
        let sym = interner.intern("round-trip");
        assert_eq!(interner.resolve(sym), "round-trip");
    }

    #[test]
    fn empty_interner_has_zero_len() {
        let interner = Interner::new();
        assert!(interner.is_empty());
    }
}
