//! Symbol interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked, so
//! lookups hand out `&'static str` and symbols stay valid for the process
//! lifetime.
//!
//! The interner is single-threaded (`RefCell`, not locks): the evaluator's
//! contract is strictly synchronous, so there is no concurrent access to
//! guard against.

use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// An interned symbol identifier.
///
/// Two `Name`s are equal iff they were interned from equal strings through
/// the same interner. Comparison is a single `u32` compare, so the evaluator
/// can recognize special forms without string lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Name(u32);

impl Name {
    #[inline]
    fn new(index: u32) -> Self {
        Name(index)
    }

    /// Index into the interner's string table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interner storage: map for dedup, vec for `Name` → string resolution.
struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// String interner for symbol names.
///
/// Special form and primitive names are pre-interned at construction so the
/// evaluator can stash their `Name`s once and compare identities on the hot
/// dispatch path.
pub struct SymbolInterner {
    table: RefCell<InternTable>,
}

impl SymbolInterner {
    /// Create a new interner with the language's fixed names pre-interned.
    pub fn new() -> Self {
        let interner = SymbolInterner {
            table: RefCell::new(InternTable {
                map: FxHashMap::default(),
                strings: Vec::with_capacity(64),
            }),
        };
        interner.pre_intern_fixed_names();
        interner
    }

    /// Intern a string, returning its `Name`.
    pub fn intern(&self, s: &str) -> Name {
        let mut table = self.table.borrow_mut();
        if let Some(&index) = table.map.get(s) {
            return Name::new(index);
        }

        // Leak the string to get 'static lifetime; interned names live for
        // the process.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = u32::try_from(table.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded {} strings", u32::MAX));
        table.strings.push(leaked);
        table.map.insert(leaked, index);
        Name::new(index)
    }

    /// Look up the string for a `Name`.
    ///
    /// # Panics
    /// Panics if `name` did not come from this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.borrow().strings[name.index()]
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.table.borrow().strings.len()
    }

    /// True if nothing has been interned (never the case after `new`, which
    /// pre-interns the fixed names).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pre-intern the special forms and primitive names.
    fn pre_intern_fixed_names(&self) {
        const FIXED: &[&str] = &[
            // Special forms
            "quote",
            "cond",
            "define",
            "lambda",
            // Primitive procedures
            "+",
            "-",
            "*",
            "/",
            ">",
            "<",
            ">=",
            "<=",
            "=",
            "eq?",
            "not",
            "cons",
            "car",
            "cdr",
            "atom?",
            // Pre-bound constants
            "else",
            "true",
            "false",
        ];

        for s in FIXED {
            self.intern(s);
        }
    }
}

impl Default for SymbolInterner {
    fn default() -> Self {
        Self::new()
    }
}
