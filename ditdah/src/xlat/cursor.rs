//! Cursor tracking for the translation engines.

extern crate alloc;

use alloc::vec::Vec;

/// A saved position, recorded when a unit is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Checkpoint {
    location: usize,
    start: usize,
}

/// Tracks where the in-progress unit lives in both buffers.
///
/// `location` is the output offset where the current unit renders, `start`
/// the source offset where it begins.  Committing a unit pushes the prior
/// position, so a backspace that crosses a unit boundary can rewind to
/// exactly where composition left off.  The stack is as deep as the number
/// of committed units.
#[derive(Debug, Default)]
pub struct Cursor {
    location: usize,
    start: usize,
    history: Vec<Checkpoint>,
}

impl Cursor {
    pub fn new() -> Cursor {
        Cursor::default()
    }

    pub fn location(&self) -> usize {
        self.location
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// How many units have been committed.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Commit the current unit: save the present position, advance the
    /// output position by `cells`, and begin the next unit at `start`.
    pub fn commit(&mut self, cells: usize, start: usize) {
        self.history.push(Checkpoint {
            location: self.location,
            start: self.start,
        });
        self.location += cells;
        self.start = start;
    }

    /// Undo the most recent commit, restoring both offsets.  Returns false,
    /// changing nothing, if no commit is left to undo.
    pub fn rewind(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.location = prev.location;
                self.start = prev.start;
                true
            }
            None => false,
        }
    }
}
