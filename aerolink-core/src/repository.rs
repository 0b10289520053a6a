use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Airline, Airport};
use crate::StoreError;

/// Repository trait for airport data access
#[async_trait]
pub trait AirportRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Airport>, StoreError>;

    /// Upsert; returns the persisted state.
    async fn save(&self, airport: &Airport) -> Result<Airport, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Repository trait for airline data access. Airlines are always loaded
/// together with their full associated-airport set.
#[async_trait]
pub trait AirlineRepository: Send + Sync {
    async fn find_by_id_with_airports(&self, id: Uuid) -> Result<Option<Airline>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Airline>, StoreError>;

    /// Upsert; persists the record and replaces its association rows
    /// with the set carried by `airline`.
    async fn save(&self, airline: &Airline) -> Result<Airline, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
