// Domain Layer - Pure business logic and entities

pub mod constants;
pub mod employee;
pub mod error;
pub mod id_sequence;
pub mod listing;
pub mod roster;

// Re-exports
pub use error::DomainError;
pub use employee::{
    parse_number, parse_pay_rate, Employee, EmployeeId, EmployeeKind, NewEmployee,
};
pub use id_sequence::IdSequence;
pub use listing::{ListingRow, RosterListing, TSV_HEADER};
pub use roster::{RemoveTarget, Roster};
