//! String interning for identifiers and string literals.
//!
//! A [`Symbol`] is a compact, cheaply-copyable handle into a global string
//! table. Two symbols compare equal in O(1) time iff the underlying strings
//! are equal, which makes them a good fit for identifier names that get
//! looked up and compared throughout lexing, parsing, and evaluation.

use ahash::AHasher;
use dashmap::DashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

/// An interned string.
///
/// `Symbol` is `Copy` and 4 bytes wide; comparing two symbols never touches
/// the underlying string data.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `text`, returning the symbol for it. Repeated calls with the
    /// same string return the same symbol.
    pub fn intern(text: &str) -> Self {
        interner().intern(text)
    }

    /// Returns the interned string this symbol refers to.
    pub fn as_str(&self) -> &'static str {
        interner().resolve(*self)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

fn interner() -> &'static Interner {
    static INTERNER: OnceLock<Interner> = OnceLock::new();
    INTERNER.get_or_init(Interner::new)
}

/// Thread-safe string table backing [`Symbol`].
///
/// Strings are leaked to obtain `'static` references; this is acceptable
/// because the interner lives for the whole process and the set of distinct
/// identifiers in any one source file is small.
struct Interner {
    by_hash: DashMap<u64, (&'static str, u32)>,
    strings: boxcar::Vec<&'static str>,
    next_index: AtomicU32,
}

impl Interner {
    fn new() -> Self {
        Self {
            by_hash: DashMap::new(),
            strings: boxcar::Vec::new(),
            next_index: AtomicU32::new(0),
        }
    }

    fn hash_of(text: &str) -> u64 {
        let mut hasher = AHasher::default();
        text.hash(&mut hasher);
        hasher.finish()
    }

    fn intern(&self, text: &str) -> Symbol {
        let hash = Self::hash_of(text);
        if let Some(entry) = self.by_hash.get(&hash) {
            if entry.value().0 == text {
                return Symbol(entry.value().1);
            }
        }

        let leaked: &'static str = Box::leak(text.to_string().into_boxed_str());
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        self.strings.push(leaked);
        self.by_hash.insert(hash, (leaked, index));
        Symbol(index)
    }

    fn resolve(&self, symbol: Symbol) -> &'static str {
        self.strings
            .get(symbol.0 as usize)
            .copied()
            .expect("symbol index out of range of the interner")
    }
}

/// Minimal append-only, index-stable vector used by the interner.
///
/// `Vec<T>` under a lock would also work, but a grow-only structure keeps
/// previously returned `&'static str` slices alive without borrowing the
/// whole table.
mod boxcar {
    use std::sync::RwLock;

    pub struct Vec<T> {
        inner: RwLock<std::vec::Vec<T>>,
    }

    impl<T: Copy> Vec<T> {
        pub fn new() -> Self {
            Self {
                inner: RwLock::new(std::vec::Vec::new()),
            }
        }

        pub fn push(&self, value: T) {
            self.inner.write().unwrap().push(value);
        }

        pub fn get(&self, index: usize) -> Option<T> {
            self.inner.read().unwrap().get(index).copied()
        }
    }
}
