//! Live transliteration.
//!
//! Each translation direction is a small state machine fed one classified
//! keystroke at a time: the [`Decoder`] turns keyed patterns into text, the
//! [`Encoder`] turns typed text into patterns, and a [`Session`] picks which
//! of the two is currently receiving input.  Every engine keeps its source
//! text, its rendered output, and a checkpointed cursor consistent before
//! an event handler returns.

mod cursor;
mod decode;
mod encode;
mod session;

pub use decode::Decoder;
pub use encode::Encoder;
pub use session::Session;

use crate::pattern::Element;

/// One classified keystroke from an input surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A dit or dah keyed on the code surface.
    Element(Element),
    /// A letter typed on the text surface.
    Letter(char),
    /// End of the current letter (space on the code surface).
    LetterBreak,
    /// End of the current word (slash on the code surface, space on the
    /// text surface).
    WordBreak,
    /// Backspace over the most recent source character.
    Delete,
}

/// What an engine did with an event.  An ignored event leaves every piece
/// of state untouched; the caller treats it as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Accepted,
    Ignored,
}

/// Which surface is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Keyed code in, plain text out.
    Decoding,
    /// Plain text in, code out.
    Encoding,
}
