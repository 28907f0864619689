// Listing renderers (tab-separated, table, JSON lines)

use roster_core::domain::{ListingRow, RosterListing};
use std::str::FromStr;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use thiserror::Error;

/// How a roster listing is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStyle {
    /// Tab-separated columns with a header line
    #[default]
    Tsv,
    /// Boxed table
    Table,
    /// One JSON object per employee
    Json,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown listing style '{0}' (expected tsv, table or json)")]
pub struct UnknownStyle(pub String);

impl FromStr for ListingStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" => Ok(ListingStyle::Tsv),
            "table" => Ok(ListingStyle::Table),
            "json" => Ok(ListingStyle::Json),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

impl std::fmt::Display for ListingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStyle::Tsv => write!(f, "tsv"),
            ListingStyle::Table => write!(f, "table"),
            ListingStyle::Json => write!(f, "json"),
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: f64,
    #[tabled(rename = "Salary")]
    salary: f64,
    #[tabled(rename = "Hours")]
    hours: f64,
    #[tabled(rename = "Pay")]
    pay: f64,
    #[tabled(rename = "Type")]
    kind: String,
}

impl From<&ListingRow> for TableRow {
    fn from(row: &ListingRow) -> Self {
        Self {
            id: row.id.value(),
            name: row.name.clone(),
            age: row.age,
            salary: row.salary,
            hours: row.hours,
            pay: row.pay_rate,
            kind: row.kind.to_string(),
        }
    }
}

impl ListingStyle {
    /// Render a listing as output lines
    pub fn render(&self, listing: &RosterListing) -> Result<Vec<String>, serde_json::Error> {
        match self {
            ListingStyle::Tsv => Ok(listing.to_tsv_lines()),
            ListingStyle::Table => {
                let rows: Vec<TableRow> = listing.rows.iter().map(TableRow::from).collect();
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                Ok(table.to_string().lines().map(str::to_string).collect())
            }
            ListingStyle::Json => listing.rows.iter().map(serde_json::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::domain::{Roster, TSV_HEADER};

    #[test]
    fn test_parse_styles() {
        assert_eq!("tsv".parse::<ListingStyle>(), Ok(ListingStyle::Tsv));
        assert_eq!("TABLE".parse::<ListingStyle>(), Ok(ListingStyle::Table));
        assert_eq!(" json ".parse::<ListingStyle>(), Ok(ListingStyle::Json));
        assert_eq!(
            "xml".parse::<ListingStyle>(),
            Err(UnknownStyle("xml".to_string()))
        );
    }

    #[test]
    fn test_tsv_render() {
        let lines = ListingStyle::Tsv.render(&Roster::seeded().list()).unwrap();
        assert_eq!(lines[0], TSV_HEADER);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_table_render_has_headers_and_rows() {
        let lines = ListingStyle::Table
            .render(&Roster::seeded().list())
            .unwrap();
        let text = lines.join("\n");

        for header in ["ID", "Name", "Age", "Salary", "Hours", "Pay", "Type"] {
            assert!(text.contains(header), "missing header {}", header);
        }
        assert!(text.contains("Marc"));
        assert!(text.contains("49232"));
        assert!(text.contains("Part-Time"));
    }

    #[test]
    fn test_json_render_one_object_per_row() {
        let lines = ListingStyle::Json.render(&Roster::seeded().list()).unwrap();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["id"], 1);
        assert_eq!(first["name"], "Marc");
        assert_eq!(first["salary"], 49232.0);
        assert_eq!(first["kind"], "Manager");
    }
}
