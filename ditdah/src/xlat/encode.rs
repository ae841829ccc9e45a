//! Text-to-code translation.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt::Write;

use crate::log::{debug, warn};
use crate::table::CodeTable;

use super::cursor::Cursor;
use super::{Event, Outcome};

/// The text-to-code engine.
///
/// Text units are single letters, so unlike the decoder there is no
/// in-progress composition: every accepted letter immediately appends its
/// pattern and a separating space to the code output, and every delete
/// retracts a whole unit.
pub struct Encoder {
    table: Rc<CodeTable>,
    source: String,
    output: String,
    cursor: Cursor,
}

impl Encoder {
    pub fn new(table: Rc<CodeTable>) -> Encoder {
        Encoder {
            table,
            source: String::new(),
            output: String::new(),
            cursor: Cursor::new(),
        }
    }

    /// The typed text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The encoded code text.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many units (letters and word breaks) have been committed.
    pub fn committed(&self) -> usize {
        self.cursor.depth()
    }

    /// Apply one classified keystroke.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Letter(ch) => self.on_letter(ch),
            Event::WordBreak => self.on_word_break(),
            Event::Delete => self.on_delete(),
            // Dits, dahs, and letter spaces belong to the code surface.
            Event::Element(_) | Event::LetterBreak => Outcome::Ignored,
        }
    }

    fn on_letter(&mut self, ch: char) -> Outcome {
        // The table only covers lowercase a-z; anything else simply does
        // not appear.
        let pattern = match self.table.encode(ch) {
            Some(pattern) => pattern,
            None => {
                debug!("unsupported letter {:?}", ch);
                return Outcome::Ignored;
            }
        };
        self.source.push(ch);
        let _ = write!(self.output, "{} ", pattern);
        self.cursor.commit(pattern.len() + 1, self.source.len());
        Outcome::Accepted
    }

    fn on_word_break(&mut self) -> Outcome {
        // No empty words: a space needs a letter before it.
        if self.source.is_empty() || self.source.ends_with(' ') {
            return Outcome::Ignored;
        }
        self.source.push(' ');
        self.output.push_str("/ ");
        self.cursor.commit(2, self.source.len());
        Outcome::Accepted
    }

    fn on_delete(&mut self) -> Outcome {
        let deleted = match self.source.pop() {
            Some(ch) => ch,
            None => return Outcome::Ignored,
        };
        // Every accepted unit pushed a checkpoint, so the rewind cannot
        // fail while the engine owns all buffer mutations.
        if !self.cursor.rewind() {
            debug_assert!(false, "delete without a checkpoint");
            warn!("delete without a checkpoint");
            self.source.push(deleted);
            return Outcome::Ignored;
        }
        self.output.truncate(self.cursor.location());
        Outcome::Accepted
    }
}
