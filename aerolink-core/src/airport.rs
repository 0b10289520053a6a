use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::model::Airport;
use crate::repository::AirportRepository;
use crate::{CoreError, CoreResult};

/// CRUD over airport records.
pub struct AirportService {
    airports: Arc<dyn AirportRepository>,
}

impl AirportService {
    pub fn new(airports: Arc<dyn AirportRepository>) -> Self {
        Self { airports }
    }

    pub async fn find_all(&self) -> CoreResult<Vec<Airport>> {
        Ok(self.airports.find_all().await?)
    }

    pub async fn find_one(&self, id: Uuid) -> CoreResult<Airport> {
        self.airports
            .find_by_id(id)
            .await?
            .ok_or(CoreError::AirportNotFound)
    }

    pub async fn create(&self, airport: Airport) -> CoreResult<Airport> {
        let saved = self.airports.save(&airport).await?;
        debug!(airport_id = %saved.id, code = %saved.code, "airport created");
        Ok(saved)
    }

    /// Updates the record fields; the path id wins over any id carried
    /// by the payload.
    pub async fn update(&self, id: Uuid, mut airport: Airport) -> CoreResult<Airport> {
        let existing = self.find_one(id).await?;
        airport.id = existing.id;
        Ok(self.airports.save(&airport).await?)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        self.find_one(id).await?;
        Ok(self.airports.delete(id).await?)
    }
}
