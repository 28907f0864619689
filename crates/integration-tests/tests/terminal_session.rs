//! End-to-end: session over the terminal adapter with in-memory streams.

use roster_core::application::Session;
use roster_core::domain::{Roster, TSV_HEADER};
use roster_infra_terminal::{ListingStyle, TerminalConsole};
use std::io::Cursor;

fn run_terminal(input: &str, style: ListingStyle) -> (Roster, String) {
    run_terminal_bytes(input.as_bytes(), style)
}

fn run_terminal_bytes(input: &[u8], style: ListingStyle) -> (Roster, String) {
    let console = TerminalConsole::new(Cursor::new(input.to_vec()), Vec::new())
        .with_style(style);
    let mut session = Session::new(Roster::seeded(), console);
    session.run().expect("session ends at end of input");

    let (roster, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (roster, output)
}

#[test]
fn test_tsv_session_output() {
    let (roster, output) = run_terminal("1\nJoe,28,12,45\n", ListingStyle::Tsv);

    assert_eq!(roster.len(), 4);
    assert_eq!(output.matches(TSV_HEADER).count(), 2);
    assert!(output.contains("4\tJoe\t\t28\t\t27080\t\t45\t\t\t12\t\tManager"));
}

#[test]
fn test_blank_line_is_a_cancel() {
    let (roster, output) = run_terminal("2\n\n", ListingStyle::Tsv);

    assert_eq!(roster.len(), 3);
    assert!(output.contains("You have not selected an option. Please try again."));
}

#[test]
fn test_table_session_output() {
    let (_, output) = run_terminal("2\n1\n", ListingStyle::Table);

    assert!(output.contains("Salary"));
    assert!(output.contains("Ella"));
    assert!(!output.contains(TSV_HEADER));
}

#[test]
fn test_no_clear_sequence_by_default() {
    let (_, output) = run_terminal("4\n", ListingStyle::Tsv);
    assert!(!output.contains("\x1B[2J"));
}

#[test]
fn test_non_utf8_line_does_not_end_session() {
    // Latin-1 "José" at the remove prompt, then remove id 1
    let (roster, output) = run_terminal_bytes(b"2\nJos\xe9\n2\n1\n", ListingStyle::Tsv);

    assert!(output.contains("No employee found with name 'jos"));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.employees()[0].name, "Matt");
}
