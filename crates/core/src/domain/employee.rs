// Employee Domain Model

use super::constants::{MANAGER_ANNUAL_DEDUCTION, MANAGER_HOURS_THRESHOLD, WEEKS_PER_YEAR};
use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Employee identifier (1..N within a roster)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Convert an operator-entered number into an identifier.
    ///
    /// Returns `None` for fractional, negative or out-of-range values; such a
    /// key can never match a record.
    pub fn from_number(number: f64) -> Option<Self> {
        if number.fract() != 0.0 || number < 0.0 || number > u32::MAX as f64 {
            return None;
        }
        Some(Self(number as u32))
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee variant. Selects the salary formula and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeKind {
    #[serde(rename = "Part-Time")]
    PartTime,
    #[serde(rename = "Manager")]
    Manager,
}

impl EmployeeKind {
    /// Variant assigned to a new hire working `hours_per_week`
    pub fn for_hours(hours_per_week: f64) -> Self {
        if hours_per_week >= MANAGER_HOURS_THRESHOLD {
            EmployeeKind::Manager
        } else {
            EmployeeKind::PartTime
        }
    }

    /// Annual salary for this variant
    ///
    /// - Part-Time: `pay_rate * hours_per_week * 52`
    /// - Manager: `hours_per_week * pay_rate * 52 - 1000`
    pub fn annual_salary(&self, pay_rate: f64, hours_per_week: f64) -> f64 {
        match self {
            EmployeeKind::PartTime => pay_rate * hours_per_week * WEEKS_PER_YEAR,
            EmployeeKind::Manager => {
                (hours_per_week * pay_rate * WEEKS_PER_YEAR) - MANAGER_ANNUAL_DEDUCTION
            }
        }
    }
}

impl std::fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeKind::PartTime => write!(f, "Part-Time"),
            EmployeeKind::Manager => write!(f, "Manager"),
        }
    }
}

/// Employee Entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: f64,
    pub pay_rate: f64,
    pub hours_per_week: f64,
    pub kind: EmployeeKind,
}

impl Employee {
    /// Create an employee. The identifier comes from the owning roster's
    /// sequence, never from the operator.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        age: f64,
        pay_rate: f64,
        hours_per_week: f64,
        kind: EmployeeKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            pay_rate,
            hours_per_week,
            kind,
        }
    }

    /// Derived on every read from the current pay rate and hours
    pub fn annual_salary(&self) -> f64 {
        self.kind.annual_salary(self.pay_rate, self.hours_per_week)
    }

    /// Case-insensitive exact name match
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Validated input for a new hire (identifier not yet assigned)
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub age: f64,
    pub pay_rate: f64,
    pub hours_per_week: f64,
}

impl NewEmployee {
    /// Validate the four text fields of a new hire.
    ///
    /// Field order is `(name, age, pay_rate, hours_per_week)` for both the
    /// seed records and operator input.
    pub fn parse(name: &str, age: &str, pay_rate: &str, hours_per_week: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            age: parse_field("age", age)?,
            pay_rate: parse_field("pay rate", pay_rate)?,
            hours_per_week: parse_field("hours per week", hours_per_week)?,
        })
    }

    /// Parse one `name,age,payRate,hoursPerWeek` line. Fields are trimmed;
    /// anything after the fourth field is ignored.
    pub fn from_csv_line(line: &str) -> Result<Self> {
        let mut fields = line.split(',').map(str::trim);
        let name = fields.next().unwrap_or_default();
        let age = fields.next().ok_or(DomainError::MissingField("age"))?;
        let pay_rate = fields.next().ok_or(DomainError::MissingField("pay rate"))?;
        let hours = fields
            .next()
            .ok_or(DomainError::MissingField("hours per week"))?;

        Self::parse(name, age, pay_rate, hours)
    }

    /// Variant this hire will get
    pub fn kind(&self) -> EmployeeKind {
        EmployeeKind::for_hours(self.hours_per_week)
    }
}

/// Parse operator text as a finite number (surrounding whitespace allowed).
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a new pay rate; it must be a positive number.
pub fn parse_pay_rate(text: &str) -> Result<f64> {
    match parse_number(text) {
        Some(rate) if rate > 0.0 => Ok(rate),
        _ => Err(DomainError::InvalidPayRate(text.trim().to_string())),
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64> {
    parse_number(value).ok_or_else(|| DomainError::NotNumeric {
        field,
        value: value.trim().to_string(),
    })
}
