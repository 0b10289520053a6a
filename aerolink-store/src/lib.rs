pub mod airline_repo;
pub mod airport_repo;
pub mod app_config;
pub mod database;

pub use airline_repo::PgAirlineRepository;
pub use airport_repo::PgAirportRepository;
pub use database::DbClient;
