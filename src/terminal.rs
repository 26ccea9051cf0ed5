//! Terminal control sequences.
//!
//! Pure builders for cursor movement and screen control sequences, plus a
//! thin `Console` writer that sends them to an output stream. The builders
//! have no side effects and are what the CLI and tests exercise; `Console`
//! is a direct write-and-flush wrapper with no state of its own.

use std::io::{self, Write};

/// Hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// Clear the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
/// Clear the current line and return to its start.
pub const CLEAR_LINE: &str = "\r\x1b[K";
/// Move to the beginning of the current line.
pub const LINE_START: &str = "\r";
/// Save the cursor position.
pub const SAVE_CURSOR: &str = "\x1b[s";
/// Restore the saved cursor position.
pub const RESTORE_CURSOR: &str = "\x1b[u";
/// Terminal bell.
pub const BELL: &str = "\x07";

pub fn move_up(n: u16) -> String {
    format!("\x1b[{n}A")
}

pub fn move_down(n: u16) -> String {
    format!("\x1b[{n}B")
}

pub fn move_right(n: u16) -> String {
    format!("\x1b[{n}C")
}

pub fn move_left(n: u16) -> String {
    format!("\x1b[{n}D")
}

/// Move to `(column, row)`, both 1-indexed.
pub fn move_to(column: u16, row: u16) -> String {
    format!("\x1b[{row};{column}H")
}

pub fn scroll_up(n: u16) -> String {
    format!("\x1b[{n}T")
}

pub fn scroll_down(n: u16) -> String {
    format!("\x1b[{n}S")
}

/// Applies control sequences to an output stream.
///
/// Every send is a direct write followed by a flush, so cursor movement
/// takes effect immediately even on line-buffered stdout.
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a raw sequence (or any text) and flush.
    pub fn send(&mut self, sequence: &str) -> io::Result<()> {
        self.out.write_all(sequence.as_bytes())?;
        self.out.flush()
    }

    pub fn move_up(&mut self, n: u16) -> io::Result<()> {
        self.send(&move_up(n))
    }

    pub fn move_down(&mut self, n: u16) -> io::Result<()> {
        self.send(&move_down(n))
    }

    pub fn move_right(&mut self, n: u16) -> io::Result<()> {
        self.send(&move_right(n))
    }

    pub fn move_left(&mut self, n: u16) -> io::Result<()> {
        self.send(&move_left(n))
    }

    pub fn move_to(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.send(&move_to(column, row))
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.send(HIDE_CURSOR)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.send(SHOW_CURSOR)
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.send(CLEAR_SCREEN)
    }

    pub fn clear_line(&mut self) -> io::Result<()> {
        self.send(CLEAR_LINE)
    }

    pub fn save_cursor(&mut self) -> io::Result<()> {
        self.send(SAVE_CURSOR)
    }

    pub fn restore_cursor(&mut self) -> io::Result<()> {
        self.send(RESTORE_CURSOR)
    }

    pub fn bell(&mut self) -> io::Result<()> {
        self.send(BELL)
    }
}
