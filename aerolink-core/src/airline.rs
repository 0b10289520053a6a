use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::model::Airline;
use crate::repository::AirlineRepository;
use crate::{CoreError, CoreResult};

/// CRUD over airline records. Existence checks only; the association
/// rules live in `AssociationManager`.
pub struct AirlineService {
    airlines: Arc<dyn AirlineRepository>,
}

impl AirlineService {
    pub fn new(airlines: Arc<dyn AirlineRepository>) -> Self {
        Self { airlines }
    }

    pub async fn find_all(&self) -> CoreResult<Vec<Airline>> {
        Ok(self.airlines.find_all().await?)
    }

    pub async fn find_one(&self, id: Uuid) -> CoreResult<Airline> {
        self.airlines
            .find_by_id_with_airports(id)
            .await?
            .ok_or(CoreError::AirlineNotFound)
    }

    pub async fn create(&self, airline: Airline) -> CoreResult<Airline> {
        let saved = self.airlines.save(&airline).await?;
        debug!(airline_id = %saved.id, "airline created");
        Ok(saved)
    }

    /// Updates the record fields. The path id wins over any id carried
    /// by the payload, and the associated-airport set is preserved as
    /// persisted; association changes go through `AssociationManager`.
    pub async fn update(&self, id: Uuid, mut airline: Airline) -> CoreResult<Airline> {
        let existing = self.find_one(id).await?;
        airline.id = existing.id;
        airline.airports = existing.airports;
        Ok(self.airlines.save(&airline).await?)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        self.find_one(id).await?;
        Ok(self.airlines.delete(id).await?)
    }
}
