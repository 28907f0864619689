// Terminal Console implementation
// Line-oriented prompts over any BufRead/Write pair (stdin/stdout in the binary)

use crate::listing_style::ListingStyle;
use colored::Colorize;
use roster_core::domain::RosterListing;
use roster_core::error::{AppError, Result};
use roster_core::port::Console;
use std::io::{BufRead, Write};
use tracing::debug;

/// ANSI: erase display, cursor home
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[H";

/// Marker printed before the operator types
const INPUT_MARKER: &str = "> ";

/// Console backed by a reader and a writer
///
/// An empty line counts as a cancelled prompt; end of input is reported as
/// `AppError::InputClosed`. Lines that are not valid UTF-8 are decoded lossily.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    style: ListingStyle,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            style: ListingStyle::default(),
            clear_screen: false,
        }
    }

    pub fn with_style(mut self, style: ListingStyle) -> Self {
        self.style = style;
        self
    }

    /// Emit the clear sequence before listings (only useful on a real terminal)
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", message.cyan())?;
        write!(self.output, "{}", INPUT_MARKER)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("End of input reached");
            return Err(AppError::InputClosed);
        }

        // Undecodable bytes become U+FFFD instead of ending the session
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.yellow().bold())?;
        self.output.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SEQUENCE)?;
        }
        Ok(())
    }

    fn show_listing(&mut self, listing: &RosterListing) -> Result<()> {
        let lines = self.style.render(listing).map_err(std::io::Error::from)?;
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
