//! Shutdown window data repository.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::shutdown::{CreateShutdownParam, ShutdownWindow};

pub struct ShutdownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShutdownRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all shutdown windows ordered by start date, then id.
    ///
    /// # Returns
    /// - `Ok(Vec<ShutdownWindow>)`: All shutdown windows
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<ShutdownWindow>, DbErr> {
        let entities = entity::prelude::Shutdown::find()
            .order_by_asc(entity::shutdown::Column::StartDate)
            .order_by_asc(entity::shutdown::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ShutdownWindow::from_entity).collect())
    }

    /// Creates a shutdown window.
    ///
    /// Performs no validation; callers go through `ShutdownService::create`.
    ///
    /// # Returns
    /// - `Ok(ShutdownWindow)`: The created window
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateShutdownParam) -> Result<ShutdownWindow, DbErr> {
        let entity = entity::shutdown::ActiveModel {
            id: ActiveValue::NotSet,
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            description: ActiveValue::Set(param.description),
        }
        .insert(self.db)
        .await?;

        Ok(ShutdownWindow::from_entity(entity))
    }

    /// Deletes a shutdown window by id.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows deleted (0 when the id does not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Shutdown::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
