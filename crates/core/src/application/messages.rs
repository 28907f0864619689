// Operator-facing prompt and alert texts

pub const MENU_PROMPT: &str = "Choose an option:\n1. Add Employee\n2. Remove Employee\n3. Edit Employee\n4. Display Employees";

pub const ADD_PROMPT: &str = "Add a new employee. Please enter employee name, age, pay rate, and hours worked per week separated by commas.";

pub const REMOVE_PROMPT: &str = "Enter the name or ID number of the employee you wish to remove.";

pub const EDIT_PROMPT: &str = "Enter the employee ID of the employee you wish to edit.";

pub const INVALID_VALUES: &str = "One or more values were entered incorrectly. Please make sure only letters are used in the name and only numbers for all other values.";

pub const NO_INFORMATION: &str = "No information provided!";

pub const NO_OPTION_SELECTED: &str = "You have not selected an option. Please try again.";

pub const NOTHING_ENTERED: &str = "Nothing has been entered. Please try again.";

pub const ID_NOT_ON_FILE: &str = "The ID you entered does not match our files.";

pub const INVALID_PAY_RATE: &str = "Invalid pay rate entered. It must be a positive number.";

/// Second edit prompt, shows the current rate
pub fn pay_rate_prompt(name: &str, current: f64) -> String {
    format!(
        "Enter the new pay rate for {}.\n(Current pay rate: {})",
        name, current
    )
}

/// Alert for a removal key that matched nothing
pub fn not_found(err: &crate::domain::DomainError) -> String {
    format!("{}.", err)
}
