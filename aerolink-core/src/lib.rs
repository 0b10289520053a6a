pub mod airline;
pub mod airport;
pub mod association;
pub mod memory;
pub mod model;
pub mod repository;

/// Boxed error coming out of a store collaborator. These are never
/// interpreted by the domain layer; they pass through unmodified.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("The airline with the given id was not found")]
    AirlineNotFound,
    #[error("The airport with the given id was not found")]
    AirportNotFound,
    #[error("The airport with the given id is not associated to the airline")]
    AirportNotAssociated,
    #[error("{0}")]
    Store(StoreError),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Store(err)
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
