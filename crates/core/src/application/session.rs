// Session - menu-driven interaction loop over one roster

use super::menu::MenuChoice;
use super::messages;
use crate::domain::{parse_number, EmployeeId, NewEmployee, RemoveTarget, Roster};
use crate::error::Result;
use crate::port::Console;
use tracing::{debug, info, warn};

/// Interaction loop (Menu -> action -> Menu)
///
/// Owns the roster and the console. Operator mistakes (bad values, unknown
/// keys) are reported through `Console::alert` and never leave the loop; only
/// console failures are returned to the caller.
pub struct Session<C: Console> {
    roster: Roster,
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(roster: Roster, console: C) -> Self {
        Self { roster, console }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (Roster, C) {
        (self.roster, self.console)
    }

    /// List the roster once, then loop on the menu.
    ///
    /// There is no exit command. The loop ends when the console reports
    /// `InputClosed`, which is a normal end of session.
    pub fn run(&mut self) -> Result<()> {
        info!(employees = self.roster.len(), "Session started");
        match self.drive() {
            Err(e) if e.is_input_closed() => {
                info!(employees = self.roster.len(), "Input closed, session finished");
                Ok(())
            }
            other => other,
        }
    }

    fn drive(&mut self) -> Result<()> {
        self.list_employees()?;
        loop {
            self.step()?;
        }
    }

    /// Show the menu once and carry out the chosen action (if any).
    pub fn step(&mut self) -> Result<Option<MenuChoice>> {
        let answer = self.console.prompt(messages::MENU_PROMPT)?;
        let choice = answer.as_deref().and_then(MenuChoice::parse);
        match choice {
            Some(c) => debug!(choice = %c, "Menu answered"),
            None => debug!(answer = ?answer, "Menu answer ignored"),
        }

        match choice {
            Some(MenuChoice::AddEmployee) => self.add_employee()?,
            Some(MenuChoice::RemoveEmployee) => self.remove_employee()?,
            Some(MenuChoice::EditEmployee) => self.edit_employee()?,
            Some(MenuChoice::ListEmployees) => self.list_employees()?,
            None => {}
        }

        Ok(choice)
    }

    fn add_employee(&mut self) -> Result<()> {
        let Some(line) = self.prompt_non_empty(messages::ADD_PROMPT)? else {
            return self.console.alert(messages::NO_INFORMATION);
        };

        match NewEmployee::from_csv_line(&line) {
            Ok(hire) => {
                self.roster.add(hire);
                self.list_employees()
            }
            Err(e) => {
                warn!(input = %line, error = %e, "Rejected new employee");
                self.console.alert(messages::INVALID_VALUES)
            }
        }
    }

    fn remove_employee(&mut self) -> Result<()> {
        let Some(input) = self.prompt_non_empty(messages::REMOVE_PROMPT)? else {
            return self.console.alert(messages::NO_OPTION_SELECTED);
        };

        let target = RemoveTarget::classify(&input);
        match self.roster.remove(&target) {
            Ok(_) => self.list_employees(),
            Err(e) => {
                warn!(target = ?target, error = %e, "Removal failed");
                self.console.alert(&messages::not_found(&e))
            }
        }
    }

    fn edit_employee(&mut self) -> Result<()> {
        let Some(input) = self.prompt_non_empty(messages::EDIT_PROMPT)? else {
            return self.console.alert(messages::NOTHING_ENTERED);
        };

        let found = parse_number(&input)
            .and_then(EmployeeId::from_number)
            .and_then(|id| self.roster.find(id))
            .map(|e| (e.id, messages::pay_rate_prompt(&e.name, e.pay_rate)));
        let Some((id, prompt)) = found else {
            warn!(input = %input, "Edit requested for unknown id");
            return self.console.alert(messages::ID_NOT_ON_FILE);
        };

        let new_rate = self.console.prompt(&prompt)?.unwrap_or_default();
        match self.roster.edit_pay_rate(id, &new_rate) {
            Ok(_) => self.list_employees(),
            Err(e) if e.is_validation() => {
                warn!(id = %id, error = %e, "Rejected pay rate");
                self.console.alert(messages::INVALID_PAY_RATE)
            }
            Err(_) => self.console.alert(messages::ID_NOT_ON_FILE),
        }
    }

    fn list_employees(&mut self) -> Result<()> {
        let listing = self.roster.list();
        self.console.clear()?;
        self.console.show_listing(&listing)
    }

    /// Prompt and treat cancelled or blank answers as "nothing entered".
    fn prompt_non_empty(&mut self, message: &str) -> Result<Option<String>> {
        let answer = self.console.prompt(message)?;
        Ok(answer.filter(|a| !a.trim().is_empty()))
    }
}
