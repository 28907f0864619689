// Roster Infrastructure - Terminal Adapter
// Implements: Console (stdin/stdout)

pub mod listing_style;
pub mod terminal_console;

pub use listing_style::{ListingStyle, UnknownStyle};
pub use terminal_console::TerminalConsole;
