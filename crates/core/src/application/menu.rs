// Menu choices

/// Action selected from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    RemoveEmployee,
    EditEmployee,
    ListEmployees,
}

impl MenuChoice {
    /// Only the exact answers "1".."4" select an action.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddEmployee),
            "2" => Some(MenuChoice::RemoveEmployee),
            "3" => Some(MenuChoice::EditEmployee),
            "4" => Some(MenuChoice::ListEmployees),
            _ => None,
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuChoice::AddEmployee => write!(f, "ADD_EMPLOYEE"),
            MenuChoice::RemoveEmployee => write!(f, "REMOVE_EMPLOYEE"),
            MenuChoice::EditEmployee => write!(f, "EDIT_EMPLOYEE"),
            MenuChoice::ListEmployees => write!(f, "LIST_EMPLOYEES"),
        }
    }
}
