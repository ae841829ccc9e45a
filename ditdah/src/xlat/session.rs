//! Direction switching.

extern crate alloc;

use alloc::rc::Rc;

use crate::table::CodeTable;

use super::{Decoder, Direction, Encoder, Event, Outcome};

/// A pair of engines with one active at a time.
///
/// The interactive surfaces work in swap mode: only one side accepts input,
/// and swapping directions keeps each engine's buffers as they were.  The
/// session routes events to the active engine and presents the code and
/// plain text of whichever pair is live.
pub struct Session {
    decoder: Decoder,
    encoder: Encoder,
    active: Direction,
}

impl Session {
    /// Build both engines over one shared table, starting on the code
    /// surface.
    pub fn new(table: Rc<CodeTable>) -> Session {
        Session {
            decoder: Decoder::new(table.clone()),
            encoder: Encoder::new(table),
            active: Direction::Decoding,
        }
    }

    pub fn direction(&self) -> Direction {
        self.active
    }

    /// Switch which surface is being edited.
    pub fn swap(&mut self) {
        self.active = match self.active {
            Direction::Decoding => Direction::Encoding,
            Direction::Encoding => Direction::Decoding,
        };
    }

    /// Feed one event to the active engine.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match self.active {
            Direction::Decoding => self.decoder.handle(event),
            Direction::Encoding => self.encoder.handle(event),
        }
    }

    /// The code text of the active pair.
    pub fn code_text(&self) -> &str {
        match self.active {
            Direction::Decoding => self.decoder.source(),
            Direction::Encoding => self.encoder.output(),
        }
    }

    /// The plain text of the active pair.
    pub fn plain_text(&self) -> &str {
        match self.active {
            Direction::Decoding => self.decoder.output(),
            Direction::Encoding => self.encoder.source(),
        }
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }
}
