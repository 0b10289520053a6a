use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::model::{Airline, Airport};
use crate::repository::{AirlineRepository, AirportRepository};
use crate::{CoreError, CoreResult};

/// Manages the airline/airport association. Every mutation of an
/// airline's associated-airport set goes through here so the existence
/// and membership checks happen in one place. Airport records are never
/// mutated; only the set held on the airline side is.
///
/// Calls are stateless read-then-save sequences. Concurrent writes to
/// the same airline are last-writer-wins.
pub struct AssociationManager {
    airlines: Arc<dyn AirlineRepository>,
    airports: Arc<dyn AirportRepository>,
}

impl AssociationManager {
    pub fn new(
        airlines: Arc<dyn AirlineRepository>,
        airports: Arc<dyn AirportRepository>,
    ) -> Self {
        Self { airlines, airports }
    }

    /// Associates an airport with an airline. Both must exist. Adding an
    /// airport that is already a member leaves the set unchanged.
    pub async fn add_airport_to_airline(
        &self,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> CoreResult<Airline> {
        let mut airline = self.find_airline(airline_id).await?;
        let airport = self.find_airport(airport_id).await?;

        airline.add_airport(airport);
        let saved = self.airlines.save(&airline).await?;
        debug!(%airline_id, %airport_id, "airport associated with airline");
        Ok(saved)
    }

    /// Returns the airline's associated airports as the store
    /// materialized them.
    pub async fn find_airports_from_airline(
        &self,
        airline_id: Uuid,
    ) -> CoreResult<Vec<Airport>> {
        let airline = self.find_airline(airline_id).await?;
        Ok(airline.airports)
    }

    /// Returns one associated airport. Fails with a precondition error
    /// when the airport exists but is not a member of the airline's set.
    pub async fn find_airport_from_airline(
        &self,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> CoreResult<Airport> {
        let airline = self.find_airline(airline_id).await?;
        let airport = self.find_airport(airport_id).await?;

        airline
            .airports
            .into_iter()
            .find(|a| a.id == airport.id)
            .ok_or(CoreError::AirportNotAssociated)
    }

    /// Replaces the airline's associated-airport set with the given
    /// list. Every listed airport is checked against the store before
    /// anything is written; one missing id fails the whole call and the
    /// prior set stays untouched.
    pub async fn update_airports_from_airline(
        &self,
        airline_id: Uuid,
        airports: Vec<Airport>,
    ) -> CoreResult<Airline> {
        let mut airline = self.find_airline(airline_id).await?;

        let mut validated = Vec::with_capacity(airports.len());
        for airport in &airports {
            validated.push(self.find_airport(airport.id).await?);
        }

        airline.set_airports(validated);
        let saved = self.airlines.save(&airline).await?;
        debug!(%airline_id, count = saved.airports.len(), "airline airports replaced");
        Ok(saved)
    }

    /// Dissociates an airport from an airline. Same preconditions as
    /// `find_airport_from_airline`.
    pub async fn delete_airport_from_airline(
        &self,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> CoreResult<()> {
        let mut airline = self.find_airline(airline_id).await?;
        let airport = self.find_airport(airport_id).await?;

        if !airline.has_airport(airport.id) {
            return Err(CoreError::AirportNotAssociated);
        }

        airline.remove_airport(airport.id);
        self.airlines.save(&airline).await?;
        debug!(%airline_id, %airport_id, "airport dissociated from airline");
        Ok(())
    }

    async fn find_airline(&self, airline_id: Uuid) -> CoreResult<Airline> {
        self.airlines
            .find_by_id_with_airports(airline_id)
            .await?
            .ok_or(CoreError::AirlineNotFound)
    }

    async fn find_airport(&self, airport_id: Uuid) -> CoreResult<Airport> {
        self.airports
            .find_by_id(airport_id)
            .await?
            .ok_or(CoreError::AirportNotFound)
    }
}
