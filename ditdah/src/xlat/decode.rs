//! Code-to-text translation.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;

use crate::log::warn;
use crate::pattern::{Element, Pattern};
use crate::table::CodeTable;

use super::cursor::Cursor;
use super::{Event, Outcome};

/// The code-to-text engine.
///
/// Feeding it the keystrokes of the code surface keeps two buffers live: the
/// raw keyed source (dits, dahs, letter spaces, word slashes) and the
/// decoded text.  The output cell for the in-progress pattern is rewritten
/// after every keystroke, so the text surface always shows the best current
/// reading of an unfinished letter, and shows nothing for a pattern that
/// isn't a letter.
pub struct Decoder {
    table: Rc<CodeTable>,
    source: String,
    output: String,
    cursor: Cursor,
}

impl Decoder {
    pub fn new(table: Rc<CodeTable>) -> Decoder {
        Decoder {
            table,
            source: String::new(),
            output: String::new(),
            cursor: Cursor::new(),
        }
    }

    /// The raw keyed text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The decoded text.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many letters have been committed by a letter or word break.
    pub fn committed(&self) -> usize {
        self.cursor.depth()
    }

    /// Apply one classified keystroke.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Element(elt) => self.on_element(elt),
            Event::LetterBreak => self.on_letter_break(),
            Event::WordBreak => self.on_word_break(),
            Event::Delete => self.on_delete(),
            // Letters belong to the text surface.
            Event::Letter(_) => Outcome::Ignored,
        }
    }

    /// The in-progress unit, if it currently reads as a pattern.
    fn unit(&self) -> Option<Pattern> {
        Pattern::from_text(&self.source[self.cursor.start()..]).ok()
    }

    /// A decoded letter is pending when the current unit has produced one.
    /// Breaks only commit pending letters.
    fn pending(&self) -> bool {
        self.output.len() > self.cursor.location()
    }

    /// Rewrite the output cell for the current unit.
    fn refresh(&mut self) {
        self.output.truncate(self.cursor.location());
        if let Some(ch) = self.unit().and_then(|pat| self.table.decode(pat)) {
            self.output.push(ch);
        }
    }

    fn on_element(&mut self, elt: Element) -> Outcome {
        self.source.push(elt.as_char());
        self.refresh();
        Outcome::Accepted
    }

    fn on_letter_break(&mut self) -> Outcome {
        if !self.pending() {
            return Outcome::Ignored;
        }
        self.source.push(' ');
        self.cursor.commit(1, self.source.len());
        Outcome::Accepted
    }

    fn on_word_break(&mut self) -> Outcome {
        if !self.pending() {
            return Outcome::Ignored;
        }
        self.source.push('/');
        self.output.push(' ');
        self.cursor.commit(2, self.source.len());
        Outcome::Accepted
    }

    fn on_delete(&mut self) -> Outcome {
        let deleted = match self.source.pop() {
            Some(ch) => ch,
            None => return Outcome::Ignored,
        };
        match deleted {
            ' ' | '/' => {
                // Every break pushed a checkpoint, so the rewind cannot
                // fail while the engine owns all buffer mutations.
                if !self.cursor.rewind() {
                    debug_assert!(false, "boundary delete without a checkpoint");
                    warn!("boundary delete without a checkpoint");
                    self.source.push(deleted);
                    return Outcome::Ignored;
                }
                if deleted == '/' {
                    // Retract the word separator.  The reopened unit's cell
                    // is left as committed until the next keystroke.
                    self.output.pop();
                }
            }
            _ => self.refresh(),
        }
        Outcome::Accepted
    }
}
