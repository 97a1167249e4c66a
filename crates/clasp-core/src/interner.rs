//! String interning for token text.
//!
//! Literal words, placeholder names and placeholder types are stored once
//! and referenced through cheap `Name` handles. Comparing two names is an
//! integer comparison, which is what symbol deduplication relies on.

use std::collections::HashMap;

/// A lightweight handle to an interned string.
///
/// Names are ordered by insertion order, not lexicographically. Use
/// `Interner::resolve` when string ordering matters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize)]
#[serde(transparent)]
pub struct Name(u32);

impl Name {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// String interner. Deduplicates strings and hands out `Name` handles.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<String, Name>,
    /// Indexed by `Name`.
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string. Returns the existing handle if already present.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }

        let name = self.next_name();
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), name);
        name
    }

    /// Intern an owned string, avoiding a clone on a hit.
    pub fn intern_owned(&mut self, s: String) -> Name {
        if let Some(&name) = self.map.get(&s) {
            return name;
        }

        let name = self.next_name();
        self.strings.push(s.clone());
        self.map.insert(s, name);
        name
    }

    fn next_name(&self) -> Name {
        Name(u32::try_from(self.strings.len()).expect("interner exhausted u32 name space"))
    }

    /// Resolve a name back to its string.
    ///
    /// # Panics
    /// Panics if the name was not created by this interner.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    #[inline]
    pub fn try_resolve(&self, name: Name) -> Option<&str> {
        self.strings.get(name.0 as usize).map(|s| s.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all interned strings with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Name(i as u32), s.as_str()))
    }
}
