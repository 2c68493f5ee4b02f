//! Shutdown window management.

use crate::data::shutdown::ShutdownRepository;
use crate::error::AppError;
use crate::model::shutdown::{CreateShutdownParam, ShutdownWindow};
use crate::service::cache::SnapshotCache;

/// Minimum description length, after trimming.
const MIN_DESCRIPTION_LENGTH: usize = 5;

pub struct ShutdownService<'a> {
    cache: &'a SnapshotCache,
}

impl<'a> ShutdownService<'a> {
    pub fn new(cache: &'a SnapshotCache) -> Self {
        Self { cache }
    }

    /// Validates and stores a shutdown window, then refreshes the cache.
    ///
    /// # Returns
    /// - `Ok(ShutdownWindow)` - The stored window
    /// - `Err(AppError::BadRequest)` - Start after end, or description too short
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateShutdownParam) -> Result<ShutdownWindow, AppError> {
        let param = validate(param)?;

        let shutdown = ShutdownRepository::new(self.cache.db())
            .create(param)
            .await?;
        self.cache.refresh_after_write("shutdown creation").await;

        tracing::info!("Added shutdown {}: {}", shutdown.id, shutdown.summary());

        Ok(shutdown)
    }

    /// Deletes a shutdown window by id, then refreshes the cache.
    ///
    /// # Returns
    /// - `Ok(())` - Window deleted
    /// - `Err(AppError::NotFound)` - No window with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = ShutdownRepository::new(self.cache.db()).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "No shutdown with ID {} exists.",
                id
            )));
        }

        self.cache.refresh_after_write("shutdown removal").await;

        tracing::info!("Removed shutdown {}", id);

        Ok(())
    }
}

fn validate(param: CreateShutdownParam) -> Result<CreateShutdownParam, AppError> {
    if param.start_date > param.end_date {
        return Err(AppError::BadRequest(
            "The start date cannot be after the end date.".to_string(),
        ));
    }

    let description = param.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Please enter a description of at least {} characters.",
            MIN_DESCRIPTION_LENGTH
        )));
    }

    Ok(CreateShutdownParam {
        description: description.to_string(),
        ..param
    })
}
