//! Whole sessions driven by scripted operator input.

use roster_core::application::messages;
use roster_core::application::Session;
use roster_core::domain::{EmployeeKind, Roster};
use roster_core::port::{ConsoleEvent, ScriptedConsole};

fn run(console: ScriptedConsole) -> (Roster, ScriptedConsole) {
    let mut session = Session::new(Roster::seeded(), console);
    session.run().expect("scripted session ends cleanly");
    session.into_parts()
}

fn names(roster: &Roster) -> Vec<&str> {
    roster.employees().iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_empty_script_shows_startup_listing_only() {
    let (roster, console) = run(ScriptedConsole::default());

    assert_eq!(roster.len(), 3);
    assert_eq!(console.listings().len(), 1);
    assert_eq!(console.listings()[0].rows.len(), 3);
    assert!(console.alerts().is_empty());
}

#[test]
fn test_add_remove_edit_session() {
    let script = ScriptedConsole::new([
        "1",
        "Joe,28,12,45",
        "2",
        "matt",
        "3",
        "1",
        "30",
        "4",
    ]);
    let (roster, console) = run(script);

    assert_eq!(names(&roster), vec!["Marc", "Ella", "Joe"]);
    let ids: Vec<u32> = roster.employees().iter().map(|e| e.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let marc = &roster.employees()[0];
    assert_eq!(marc.pay_rate, 30.0);
    assert_eq!(roster.employees()[2].kind, EmployeeKind::Manager);

    // startup + add + remove + edit + list
    assert_eq!(console.listings().len(), 5);
    assert!(console.alerts().is_empty());
}

#[test]
fn test_every_listing_is_preceded_by_clear() {
    let (_, console) = run(ScriptedConsole::new(["4", "4"]));

    let transcript = console.transcript();
    for (i, event) in transcript.iter().enumerate() {
        if let ConsoleEvent::Listing(_) = event {
            assert_eq!(transcript[i - 1], ConsoleEvent::Clear);
        }
    }
    assert_eq!(console.listings().len(), 3);
}

#[test]
fn test_menu_noise_is_silently_ignored() {
    let script = ScriptedConsole::new(["exit", "quit", "0", "5", "1 "])
        .cancel()
        .answer("");
    let (roster, console) = run(script);

    assert_eq!(roster.len(), 3);
    assert!(console.alerts().is_empty());
    assert_eq!(console.listings().len(), 1);

    let menu_prompts = console
        .transcript()
        .iter()
        .filter(|e| **e == ConsoleEvent::Prompt(messages::MENU_PROMPT.to_string()))
        .count();
    // 7 answered menus plus the one that hit end of input
    assert_eq!(menu_prompts, 8);
}

#[test]
fn test_errors_return_to_menu_without_retry() {
    let script = ScriptedConsole::new([
        "1",
        "Joe,,12,45",
        "2",
        "42",
        "2",
        "Nobody",
        "3",
        "abc",
        "3",
        "2",
        "-4",
        "2",
    ])
    .cancel();
    let (roster, console) = run(script);

    assert_eq!(
        console.alerts(),
        vec![
            messages::INVALID_VALUES,
            "No employee found with ID 42.",
            "No employee found with name 'nobody'.",
            messages::ID_NOT_ON_FILE,
            messages::INVALID_PAY_RATE,
            messages::NO_OPTION_SELECTED,
        ]
    );
    assert_eq!(roster.employees(), Roster::seeded().employees());
}

#[test]
fn test_input_closed_mid_action_ends_session() {
    // Script stops right after choosing "Edit" and giving an id
    let (roster, console) = run(ScriptedConsole::new(["3", "2"]));

    assert_eq!(roster.employees()[1].pay_rate, 15.0);
    match console.transcript().last() {
        Some(ConsoleEvent::Prompt(p)) => {
            assert_eq!(p, "Enter the new pay rate for Matt.\n(Current pay rate: 15)")
        }
        other => panic!("unexpected last event: {:?}", other),
    }
}

#[test]
fn test_empty_roster_session() {
    let mut session = Session::new(
        Roster::new(),
        ScriptedConsole::new(["2", "1", "1", "Ann,30,20,40"]),
    );
    session.run().unwrap();
    let (roster, console) = session.into_parts();

    assert_eq!(console.alerts(), vec!["No employee found with ID 1."]);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.employees()[0].id.value(), 1);
    assert_eq!(roster.employees()[0].kind, EmployeeKind::Manager);
}
