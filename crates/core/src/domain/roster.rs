// Roster Aggregate - ordered employee collection with its own id sequence

use super::employee::{
    parse_number, parse_pay_rate, Employee, EmployeeId, EmployeeKind, NewEmployee,
};
use super::error::{DomainError, Result};
use super::id_sequence::IdSequence;
use super::listing::RosterListing;
use tracing::{debug, info};

/// What the operator asked to remove
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveTarget {
    /// Input parsed as a number
    Id(f64),
    /// Anything else (matched case-insensitively)
    Name(String),
}

impl RemoveTarget {
    /// Numeric input goes down the identifier path, everything else is a name.
    pub fn classify(input: &str) -> Self {
        let input = input.trim();
        match parse_number(input) {
            Some(number) => RemoveTarget::Id(number),
            None => RemoveTarget::Name(input.to_string()),
        }
    }
}

/// Ordered employee collection.
///
/// Order is insertion order. Identifiers are compacted to `1..N` after every
/// successful removal, so they are not stable across removals.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    ids: IdSequence,
}

impl Roster {
    /// Empty roster, numbering starts at 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster preloaded with the three starting employees
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        roster.push("Marc", 43.0, 23.0, 42.0, EmployeeKind::Manager);
        roster.push("Matt", 31.0, 15.0, 22.0, EmployeeKind::PartTime);
        roster.push("Ella", 35.0, 14.0, 16.0, EmployeeKind::PartTime);
        roster
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Identifier the next added employee will receive
    pub fn next_id(&self) -> EmployeeId {
        self.ids.peek()
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Append a validated hire. Variant is chosen by weekly hours.
    pub fn add(&mut self, hire: NewEmployee) -> &Employee {
        let kind = hire.kind();
        let employee = self.push(
            hire.name,
            hire.age,
            hire.pay_rate,
            hire.hours_per_week,
            kind,
        );
        info!(
            id = %employee.id,
            name = %employee.name,
            kind = %employee.kind,
            "Employee added"
        );
        employee
    }

    /// Validate raw text fields and append. Nothing changes on error.
    pub fn add_fields(
        &mut self,
        name: &str,
        age: &str,
        pay_rate: &str,
        hours_per_week: &str,
    ) -> Result<&Employee> {
        let hire = NewEmployee::parse(name, age, pay_rate, hours_per_week)?;
        Ok(self.add(hire))
    }

    /// Remove by identifier or name, depending on how the input classifies.
    pub fn remove(&mut self, target: &RemoveTarget) -> Result<Vec<Employee>> {
        match target {
            RemoveTarget::Id(number) => match EmployeeId::from_number(*number) {
                Some(id) => self.remove_by_id(id),
                None => Err(DomainError::IdNotFound(number.to_string())),
            },
            RemoveTarget::Name(name) => self.remove_by_name(name),
        }
    }

    /// Remove every record with `id`, then renumber.
    pub fn remove_by_id(&mut self, id: EmployeeId) -> Result<Vec<Employee>> {
        if self.find(id).is_none() {
            return Err(DomainError::IdNotFound(id.to_string()));
        }

        let removed = self.extract(|e| e.id == id);
        info!(id = %id, removed = removed.len(), "Employee removed by id");
        self.renumber();
        Ok(removed)
    }

    /// Remove every record whose name matches case-insensitively, then renumber.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Vec<Employee>> {
        let wanted = name.trim().to_lowercase();
        debug!(name = %wanted, "Attempting to remove employee");
        debug!(employees = ?self.employees, "Current employees before removal");

        if !self.employees.iter().any(|e| e.has_name(&wanted)) {
            return Err(DomainError::NameNotFound(wanted));
        }

        let removed = self.extract(|e| e.has_name(&wanted));
        info!(name = %wanted, removed = removed.len(), "Employee removed by name");
        self.renumber();
        Ok(removed)
    }

    /// Replace the pay rate of one employee. Id, name, age and variant stay.
    pub fn edit_pay_rate(&mut self, id: EmployeeId, new_pay_rate: &str) -> Result<&Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DomainError::IdNotFound(id.to_string()))?;
        let rate = parse_pay_rate(new_pay_rate)?;

        let previous = std::mem::replace(&mut self.employees[index].pay_rate, rate);
        info!(id = %id, previous, current = rate, "Pay rate updated");
        Ok(&self.employees[index])
    }

    /// Read-only snapshot for display
    pub fn list(&self) -> RosterListing {
        RosterListing::from_employees(&self.employees)
    }

    fn push(
        &mut self,
        name: impl Into<String>,
        age: f64,
        pay_rate: f64,
        hours_per_week: f64,
        kind: EmployeeKind,
    ) -> &Employee {
        let id = self.ids.next();
        self.employees
            .push(Employee::new(id, name, age, pay_rate, hours_per_week, kind));
        &self.employees[self.employees.len() - 1]
    }

    fn extract(&mut self, matches: impl Fn(&Employee) -> bool) -> Vec<Employee> {
        let (removed, kept): (Vec<Employee>, Vec<Employee>) = std::mem::take(&mut self.employees)
            .into_iter()
            .partition(|e| matches(e));
        self.employees = kept;
        removed
    }

    /// Reissue identifiers 1..N in current order.
    fn renumber(&mut self) {
        self.ids.reset();
        for employee in &mut self.employees {
            employee.id = self.ids.next();
        }
    }
}
