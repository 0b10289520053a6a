//! In-memory repository implementations backed by a `RwLock<HashMap>`.
//! Used by the unit and API tests; also handy for running the service
//! without a database.
//!
//! Locks are only held for the duration of a map operation, never
//! across an await point.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Airline, Airport};
use crate::repository::{AirlineRepository, AirportRepository};
use crate::StoreError;

#[derive(Default)]
pub struct InMemoryAirportRepository {
    airports: RwLock<HashMap<Uuid, Airport>>,
}

impl InMemoryAirportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AirportRepository for InMemoryAirportRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, StoreError> {
        let map = self.airports.read().map_err(|_| "airport store lock poisoned")?;
        Ok(map.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Airport>, StoreError> {
        let map = self.airports.read().map_err(|_| "airport store lock poisoned")?;
        Ok(map.values().cloned().collect())
    }

    async fn save(&self, airport: &Airport) -> Result<Airport, StoreError> {
        let mut map = self.airports.write().map_err(|_| "airport store lock poisoned")?;
        map.insert(airport.id, airport.clone());
        Ok(airport.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut map = self.airports.write().map_err(|_| "airport store lock poisoned")?;
        map.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAirlineRepository {
    airlines: RwLock<HashMap<Uuid, Airline>>,
}

impl InMemoryAirlineRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AirlineRepository for InMemoryAirlineRepository {
    async fn find_by_id_with_airports(&self, id: Uuid) -> Result<Option<Airline>, StoreError> {
        let map = self.airlines.read().map_err(|_| "airline store lock poisoned")?;
        Ok(map.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Airline>, StoreError> {
        let map = self.airlines.read().map_err(|_| "airline store lock poisoned")?;
        Ok(map.values().cloned().collect())
    }

    async fn save(&self, airline: &Airline) -> Result<Airline, StoreError> {
        let mut map = self.airlines.write().map_err(|_| "airline store lock poisoned")?;
        map.insert(airline.id, airline.clone());
        Ok(airline.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut map = self.airlines.write().map_err(|_| "airline store lock poisoned")?;
        map.remove(&id);
        Ok(())
    }
}
