//! Interactive transliteration terminal.
//!
//! A small front-end over the ditdah engines: it owns the keyboard, decides
//! what each keystroke means for the active surface, and repaints both
//! buffers after every event.  All of the translation state lives in the
//! library.

use std::fs;
use std::io::{stdin, stdout, Write};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ditdah::pattern::{Element, Pattern};
use ditdah::table::{CodeTable, CodeTableBuilder};
use ditdah::xlat::{Direction, Event, Session};
use log::debug;
use termion::clear;
use termion::cursor;
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;

/// Default code table, looked up relative to the working directory.
const DEFAULT_DICT: &str = "code.txt";

#[derive(Parser)]
#[command(name = "ditdah-tty")]
#[command(about = "Interactive Morse transliteration in a terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transliterate interactively.
    Write {
        /// The code table file to load.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_DICT)]
        dict: String,
    },

    /// Load a code table file and show what it contains.
    Check {
        /// The file to check.
        filename: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Write { dict } => {
            let table = load_table(dict)?;
            write_loop(table)?;
        }
        Commands::Check { filename } => {
            let table = load_table(filename)?;
            // Printed pattern-first, so the listing is itself a loadable
            // table file.
            for (letter, pattern) in table.entries() {
                println!("{} {}", pattern, letter);
            }
        }
    }

    Ok(())
}

/// Load a code table from a flat file of whitespace-separated
/// `<pattern> <letter>` token pairs.  Anything wrong with the file is
/// fatal; a partial table would decode some letters and silently drop
/// others.
fn load_table(name: &str) -> Result<Rc<CodeTable>> {
    let text = fs::read_to_string(name)
        .with_context(|| format!("unable to read code table {:?}", name))?;

    let mut builder = CodeTableBuilder::new();
    let mut tokens = text.split_whitespace();
    while let Some(pattern) = tokens.next() {
        let letter = match tokens.next() {
            Some(letter) => letter,
            None => bail!("{}: pattern {:?} has no letter", name, pattern),
        };
        let pattern = Pattern::from_text(pattern)
            .with_context(|| format!("{}: bad pattern {:?}", name, pattern))?;
        let mut chars = letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => bail!("{}: expected a single letter, got {:?}", name, letter),
        };
        builder
            .insert(pattern, letter)
            .with_context(|| format!("{}: bad entry for {:?}", name, letter))?;
    }

    let table = builder
        .into_code_table()
        .with_context(|| format!("{}: incomplete code table", name))?;
    Ok(Rc::new(table))
}

/// The interactive loop.  The session tracks the active direction; this
/// just classifies keys for it.
fn write_loop(table: Rc<CodeTable>) -> Result<()> {
    let stdin = stdin();
    let mut stdout = stdout().into_raw_mode()?;

    let mut session = Session::new(table);

    writeln!(stdout, "Tab swaps direction, Esc quits.\r")?;
    render(&mut stdout, &session)?;

    for key in stdin.keys() {
        let event = match key? {
            Key::Esc => break,
            Key::Char('\t') => {
                session.swap();
                render(&mut stdout, &session)?;
                continue;
            }
            Key::Backspace => Some(Event::Delete),
            Key::Char(ch) => classify(session.direction(), ch),
            _ => None,
        };
        if let Some(event) = event {
            let outcome = session.handle(event);
            debug!("{:?} -> {:?}", event, outcome);
            render(&mut stdout, &session)?;
        }
    }

    write!(stdout, "\r\n\r\n")?;
    Ok(())
}

/// Map a printable key to an engine event for the active surface.  Keys
/// that mean nothing there are dropped before the engine sees them; the
/// engine rejects the rest (an unsupported letter just never appears).
fn classify(direction: Direction, ch: char) -> Option<Event> {
    match direction {
        Direction::Decoding => match ch {
            '.' => Some(Event::Element(Element::Dit)),
            '-' | '_' => Some(Event::Element(Element::Dah)),
            ' ' => Some(Event::LetterBreak),
            '/' => Some(Event::WordBreak),
            _ => None,
        },
        Direction::Encoding => match ch {
            ' ' => Some(Event::WordBreak),
            ch => Some(Event::Letter(ch)),
        },
    }
}

/// Repaint the two buffers in place, marking the active surface.
fn render(stdout: &mut impl Write, session: &Session) -> Result<()> {
    let (code_mark, text_mark) = match session.direction() {
        Direction::Decoding => ('*', ' '),
        Direction::Encoding => (' ', '*'),
    };
    write!(
        stdout,
        "\r{}{} code: {}\r\n{}{} text: {}{}",
        clear::CurrentLine,
        code_mark,
        session.code_text(),
        clear::CurrentLine,
        text_mark,
        session.plain_text(),
        cursor::Up(1),
    )?;
    stdout.flush()?;
    Ok(())
}
