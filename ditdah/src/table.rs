//! The code table.
//!
//! The table is the bidirectional mapping between patterns and the letters
//! they spell.  It is built once at startup from a flat list of
//! (pattern, letter) pairs and never changes afterward; both translation
//! directions share a single table by reference.

extern crate alloc;

use alloc::collections::BTreeMap;
use core::fmt;

use crate::Pattern;

/// Errors detected while building a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The same pattern was given two meanings.
    DuplicatePattern(Pattern),
    /// The same letter was given two patterns.
    DuplicateLetter(char),
    /// A letter outside lowercase a-z.
    UnsupportedLetter(char),
    /// The finished table does not cover this letter.
    MissingLetter(char),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicatePattern(pat) => write!(f, "duplicate pattern {}", pat),
            TableError::DuplicateLetter(ch) => write!(f, "duplicate letter {:?}", ch),
            TableError::UnsupportedLetter(ch) => write!(f, "unsupported letter {:?}", ch),
            TableError::MissingLetter(ch) => write!(f, "no pattern for letter {:?}", ch),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}

/// The frozen table.  Lookup misses are not errors: the engines routinely
/// probe with half-keyed patterns that aren't letters yet.
pub struct CodeTable {
    decode: BTreeMap<Pattern, char>,
    encode: BTreeMap<char, Pattern>,
}

/// A table builder.
pub struct CodeTableBuilder {
    decode: BTreeMap<Pattern, char>,
    encode: BTreeMap<char, Pattern>,
}

impl CodeTableBuilder {
    pub fn new() -> CodeTableBuilder {
        CodeTableBuilder {
            decode: BTreeMap::new(),
            encode: BTreeMap::new(),
        }
    }

    /// Add one (pattern, letter) pair.  Rejects letters outside a-z and
    /// anything that would make either direction ambiguous.
    pub fn insert(&mut self, pattern: Pattern, letter: char) -> Result<(), TableError> {
        if !letter.is_ascii_lowercase() {
            return Err(TableError::UnsupportedLetter(letter));
        }
        if self.decode.contains_key(&pattern) {
            return Err(TableError::DuplicatePattern(pattern));
        }
        if self.encode.contains_key(&letter) {
            return Err(TableError::DuplicateLetter(letter));
        }
        self.decode.insert(pattern, letter);
        self.encode.insert(letter, pattern);
        Ok(())
    }

    /// Freeze the table.  Every letter a-z must be covered; together with
    /// the insert checks this makes the two directions mutual inverses.
    pub fn into_code_table(self) -> Result<CodeTable, TableError> {
        for letter in 'a'..='z' {
            if !self.encode.contains_key(&letter) {
                return Err(TableError::MissingLetter(letter));
            }
        }
        Ok(CodeTable {
            decode: self.decode,
            encode: self.encode,
        })
    }
}

impl CodeTable {
    /// Look up the letter a complete pattern spells.
    pub fn decode(&self, pattern: Pattern) -> Option<char> {
        self.decode.get(&pattern).copied()
    }

    /// Look up the pattern for a letter.
    pub fn encode(&self, letter: char) -> Option<Pattern> {
        self.encode.get(&letter).copied()
    }

    /// Iterate the (letter, pattern) pairs in letter order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Pattern)> + '_ {
        self.encode.iter().map(|(letter, pat)| (*letter, *pat))
    }
}
