// Roster listing (display snapshot)

use super::employee::{Employee, EmployeeId, EmployeeKind};
use serde::{Deserialize, Serialize};

/// Header of the tab-separated listing
pub const TSV_HEADER: &str = "ID\tName\t\tAge\t\tSalary\t\tHours\t\tPay\t\tType";

/// One displayed record, salary already derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRow {
    pub id: EmployeeId,
    pub name: String,
    pub age: f64,
    pub salary: f64,
    pub hours: f64,
    pub pay_rate: f64,
    pub kind: EmployeeKind,
}

impl ListingRow {
    /// Tab-separated line matching `TSV_HEADER`
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t\t{}\t\t{}\t\t{}\t\t\t{}\t\t{}",
            self.id, self.name, self.age, self.salary, self.hours, self.pay_rate, self.kind
        )
    }
}

impl From<&Employee> for ListingRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            age: employee.age,
            salary: employee.annual_salary(),
            hours: employee.hours_per_week,
            pay_rate: employee.pay_rate,
            kind: employee.kind,
        }
    }
}

/// Ordered snapshot of the roster
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RosterListing {
    pub rows: Vec<ListingRow>,
}

impl RosterListing {
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            rows: employees.iter().map(ListingRow::from).collect(),
        }
    }

    /// Header line followed by one line per record
    pub fn to_tsv_lines(&self) -> Vec<String> {
        std::iter::once(TSV_HEADER.to_string())
            .chain(self.rows.iter().map(ListingRow::to_tsv))
            .collect()
    }
}
