// Domain constants (No magic values)

/// Paid weeks in a year, used by both salary formulas
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Flat annual deduction applied to manager salaries
pub const MANAGER_ANNUAL_DEDUCTION: f64 = 1000.0;

/// Weekly hours at or above which a new hire is a manager
pub const MANAGER_HOURS_THRESHOLD: f64 = 40.0;

/// First identifier handed out by a fresh (or reset) sequence
pub const FIRST_EMPLOYEE_ID: u32 = 1;
