//! Interned symbolic identifiers.
//!
//! Attribute names are never kept as raw strings. Every name goes through the
//! process-wide interner and comes back as a [`Symbol`]: a `Copy` handle to the
//! single allocation holding that text. Two symbols with the same text always
//! point at the same allocation, so comparison is a pointer check.
//!
//! Anything that can name an attribute implements [`ToSymbol`]. Numbers,
//! booleans and structured values deliberately do not.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

static INTERNER: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn intern(text: &str) -> &'static str {
    // The table only ever grows, so a poisoned lock still holds a valid set.
    let mut table = INTERNER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = table.get(text) {
        return *existing;
    }
    let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
    table.insert(leaked);
    leaked
}

/// An interned, normalized name token.
#[derive(Clone, Copy)]
pub struct Symbol(&'static str);

impl Symbol {
    /// Intern `text` and return its symbol.
    ///
    /// ```
    /// use attrdef::Symbol;
    ///
    /// assert_eq!(Symbol::intern("amount"), Symbol::intern(String::from("amount").as_str()));
    /// ```
    pub fn intern(text: &str) -> Self {
        Symbol(intern(text))
    }

    /// The interned text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

// Interned text is unique per allocation.
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Conversion into a [`Symbol`].
///
/// Implemented for the types that can name an attribute: string-like values,
/// `char`, and symbols themselves.
pub trait ToSymbol {
    /// Intern `self` as a symbol.
    fn to_symbol(&self) -> Symbol;
}

impl ToSymbol for Symbol {
    fn to_symbol(&self) -> Symbol {
        *self
    }
}

impl ToSymbol for str {
    fn to_symbol(&self) -> Symbol {
        Symbol::intern(self)
    }
}

impl ToSymbol for String {
    fn to_symbol(&self) -> Symbol {
        Symbol::intern(self)
    }
}

impl ToSymbol for Cow<'_, str> {
    fn to_symbol(&self) -> Symbol {
        Symbol::intern(self)
    }
}

impl ToSymbol for char {
    fn to_symbol(&self) -> Symbol {
        let mut buf = [0u8; 4];
        Symbol::intern(self.encode_utf8(&mut buf))
    }
}

impl<T: ToSymbol + ?Sized> ToSymbol for &T {
    fn to_symbol(&self) -> Symbol {
        (**self).to_symbol()
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::intern(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Symbol::intern(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn same_text_interns_to_same_allocation() {
        let a = Symbol::intern("amount");
        let b = Symbol::intern(&format!("amo{}", "unt"));
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn different_text_is_not_equal() {
        assert_ne!(Symbol::intern("amount"), Symbol::intern("Amount"));
        assert_ne!(Symbol::intern("amount"), Symbol::intern("amount "));
    }

    #[test]
    fn string_like_inputs_convert() {
        let expected = Symbol::intern("first_name");
        assert_eq!("first_name".to_symbol(), expected);
        assert_eq!(String::from("first_name").to_symbol(), expected);
        assert_eq!(Cow::Borrowed("first_name").to_symbol(), expected);
        assert_eq!(expected.to_symbol(), expected);
        assert_eq!((&&expected).to_symbol(), expected);
    }

    #[test]
    fn char_converts_to_single_letter_symbol() {
        assert_eq!('x'.to_symbol(), Symbol::intern("x"));
        assert_eq!('é'.to_symbol().as_str(), "é");
    }

    #[test]
    fn empty_text_is_a_valid_symbol() {
        assert_eq!("".to_symbol().as_str(), "");
    }

    #[test]
    fn display_and_debug() {
        let sym = Symbol::intern("amount");
        assert_eq!(sym.to_string(), "amount");
        assert_eq!(format!("{:?}", sym), ":amount");
    }

    #[test]
    fn compares_against_plain_text() {
        let sym = Symbol::intern("amount");
        assert!(sym == "amount");
        assert!(sym == *"amount");
    }

    #[test]
    fn converts_from_strings() {
        let expected = Symbol::intern("amount");
        assert_eq!(Symbol::from("amount"), expected);
        assert_eq!(Symbol::from(String::from("amount")), expected);
        let sym: Symbol = "amount".into();
        assert_eq!(sym.as_ref(), "amount");
    }

    #[test]
    fn orders_by_text() {
        let mut syms = vec![Symbol::intern("b"), Symbol::intern("c"), Symbol::intern("a")];
        syms.sort();
        let names: Vec<_> = syms.iter().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(Symbol::intern("amount"), 1);
        assert_eq!(map.get(&"amount".to_symbol()), Some(&1));
    }

    #[test]
    fn interning_is_safe_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Symbol::intern("shared_across_threads")))
            .collect();
        let syms: Vec<Symbol> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(syms.windows(2).all(|w| w[0] == w[1]));
    }
}
