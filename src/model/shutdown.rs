//! Domain models for shutdown windows.

use chrono::NaiveDate;

use crate::util::parse::DATE_FORMAT;

/// A real-world date range during which in-game time does not advance.
#[derive(Debug, Clone, PartialEq)]
pub struct ShutdownWindow {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}

impl ShutdownWindow {
    /// Converts an entity model to a shutdown domain model at the repository boundary.
    pub fn from_entity(entity: entity::shutdown::Model) -> Self {
        Self {
            id: entity.id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            description: entity.description,
        }
    }

    /// Length of the window in whole days (`end - start`).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// One-line summary used in autocomplete choices and confirmations.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} -> {}",
            self.description,
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT)
        )
    }
}

/// Parameters for creating a shutdown window.
///
/// Validated by the shutdown service before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateShutdownParam {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}
