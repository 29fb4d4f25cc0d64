//! The backend seam the [`Synchronizer`](crate::sync::Synchronizer) drives.
//!
//! [`AdminApi`] is the production implementation; tests substitute an
//! in-memory store.

use async_trait::async_trait;
use kol_torah_core::types::DbId;

use crate::api::{AdminApi, ApiError};
use crate::models::{Rabbi, RabbiCreate, RabbiUpdate, Series, SeriesCreate, SeriesUpdate};

/// Remote record operations used by the synchronizer.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_rabbis(&self) -> Result<Vec<Rabbi>, ApiError>;

    async fn get_rabbi(&self, id: DbId) -> Result<Rabbi, ApiError>;

    async fn create_rabbi(&self, payload: &RabbiCreate) -> Result<Rabbi, ApiError>;

    async fn update_rabbi(&self, id: DbId, payload: &RabbiUpdate) -> Result<Rabbi, ApiError>;

    /// Deleting a rabbi also deletes all of its series.
    async fn delete_rabbi(&self, id: DbId) -> Result<(), ApiError>;

    async fn list_series_by_rabbi(&self, rabbi_id: DbId) -> Result<Vec<Series>, ApiError>;

    async fn create_series(&self, payload: &SeriesCreate) -> Result<Series, ApiError>;

    async fn update_series(&self, id: DbId, payload: &SeriesUpdate) -> Result<Series, ApiError>;

    async fn delete_series(&self, id: DbId) -> Result<(), ApiError>;
}

#[async_trait]
impl RecordStore for AdminApi {
    async fn list_rabbis(&self) -> Result<Vec<Rabbi>, ApiError> {
        self.rabbis().list_all().await
    }

    async fn get_rabbi(&self, id: DbId) -> Result<Rabbi, ApiError> {
        self.rabbis().get_by_id(id).await
    }

    async fn create_rabbi(&self, payload: &RabbiCreate) -> Result<Rabbi, ApiError> {
        self.rabbis().create(payload).await
    }

    async fn update_rabbi(&self, id: DbId, payload: &RabbiUpdate) -> Result<Rabbi, ApiError> {
        self.rabbis().update(id, payload).await
    }

    async fn delete_rabbi(&self, id: DbId) -> Result<(), ApiError> {
        self.rabbis().delete_by_id(id).await
    }

    async fn list_series_by_rabbi(&self, rabbi_id: DbId) -> Result<Vec<Series>, ApiError> {
        self.series().list_by_rabbi(rabbi_id).await
    }

    async fn create_series(&self, payload: &SeriesCreate) -> Result<Series, ApiError> {
        self.series().create(payload).await
    }

    async fn update_series(&self, id: DbId, payload: &SeriesUpdate) -> Result<Series, ApiError> {
        self.series().update(id, payload).await
    }

    async fn delete_series(&self, id: DbId) -> Result<(), ApiError> {
        self.series().delete_by_id(id).await
    }
}
