use std::sync::Arc;

use aerolink_core::airline::AirlineService;
use aerolink_core::airport::AirportService;
use aerolink_core::association::AssociationManager;
use aerolink_core::repository::{AirlineRepository, AirportRepository};

#[derive(Clone)]
pub struct AppState {
    pub airlines: Arc<AirlineService>,
    pub airports: Arc<AirportService>,
    pub associations: Arc<AssociationManager>,
}

impl AppState {
    /// Wires the services over the two store collaborators.
    pub fn new(
        airline_repo: Arc<dyn AirlineRepository>,
        airport_repo: Arc<dyn AirportRepository>,
    ) -> Self {
        Self {
            airlines: Arc::new(AirlineService::new(airline_repo.clone())),
            airports: Arc::new(AirportService::new(airport_repo.clone())),
            associations: Arc::new(AssociationManager::new(airline_repo, airport_repo)),
        }
    }
}
