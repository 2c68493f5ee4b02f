//! Shutdown factory for creating test shutdown windows.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shutdown windows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::shutdown::ShutdownFactory;
///
/// let shutdown = ShutdownFactory::new(&db)
///     .start_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap())
///     .build()
///     .await?;
/// ```
pub struct ShutdownFactory<'a> {
    db: &'a DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: String,
}

impl<'a> ShutdownFactory<'a> {
    /// Creates a new ShutdownFactory with default values.
    ///
    /// Defaults:
    /// - start_date: 2024-01-10
    /// - end_date: 2024-01-20
    /// - description: `"Shutdown {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            description: format!("Shutdown {}", id),
        }
    }

    /// Sets the first day of the window.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the last day of the window.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the shutdown row.
    ///
    /// # Returns
    /// - `Ok(entity::shutdown::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shutdown::Model, DbErr> {
        entity::shutdown::ActiveModel {
            id: ActiveValue::NotSet,
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shutdown window with default values.
pub async fn create_shutdown(db: &DatabaseConnection) -> Result<entity::shutdown::Model, DbErr> {
    ShutdownFactory::new(db).build().await
}
