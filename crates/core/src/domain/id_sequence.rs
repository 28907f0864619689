// Employee identifier sequence

use super::constants::FIRST_EMPLOYEE_ID;
use super::employee::EmployeeId;

/// Monotonic identifier counter owned by a roster.
///
/// Replaces a process-wide generator: every roster carries its own sequence,
/// so two rosters (or two tests) never share numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    current: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self {
            current: FIRST_EMPLOYEE_ID,
        }
    }

    /// Return the current value, then advance.
    pub fn next(&mut self) -> EmployeeId {
        let id = EmployeeId::new(self.current);
        self.current += 1;
        id
    }

    /// Restart numbering at 1.
    pub fn reset(&mut self) {
        self.current = FIRST_EMPLOYEE_ID;
    }

    /// The value the next call to `next()` will return.
    pub fn peek(&self) -> EmployeeId {
        EmployeeId::new(self.current)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
