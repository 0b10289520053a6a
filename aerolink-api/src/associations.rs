use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use aerolink_core::model::{Airline, Airport};

use crate::error::AppError;
use crate::state::AppState;

/// Airport reference carried in a replace-all request body. Mirrors the
/// airport payload, plus the id the membership is keyed on; the manager
/// re-reads the canonical record by id before persisting anything.
#[derive(Debug, Deserialize)]
pub struct AssociatedAirportDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

impl From<AssociatedAirportDto> for Airport {
    fn from(dto: AssociatedAirportDto) -> Self {
        Airport {
            id: dto.id,
            name: dto.name,
            code: dto.code,
            country: dto.country,
            city: dto.city,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/airlines/{airline_id}/airports",
            get(find_airports_from_airline).put(update_airports_from_airline),
        )
        .route(
            "/airlines/{airline_id}/airports/{airport_id}",
            get(find_airport_from_airline)
                .post(add_airport_to_airline)
                .delete(delete_airport_from_airline),
        )
}

async fn find_airports_from_airline(
    State(state): State<AppState>,
    Path(airline_id): Path<Uuid>,
) -> Result<Json<Vec<Airport>>, AppError> {
    Ok(Json(
        state
            .associations
            .find_airports_from_airline(airline_id)
            .await?,
    ))
}

async fn find_airport_from_airline(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Airport>, AppError> {
    Ok(Json(
        state
            .associations
            .find_airport_from_airline(airline_id, airport_id)
            .await?,
    ))
}

async fn add_airport_to_airline(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<Airline>), AppError> {
    let airline = state
        .associations
        .add_airport_to_airline(airline_id, airport_id)
        .await?;
    Ok((StatusCode::CREATED, Json(airline)))
}

async fn update_airports_from_airline(
    State(state): State<AppState>,
    Path(airline_id): Path<Uuid>,
    Json(dtos): Json<Vec<AssociatedAirportDto>>,
) -> Result<Json<Airline>, AppError> {
    let airports = dtos.into_iter().map(Airport::from).collect();
    Ok(Json(
        state
            .associations
            .update_airports_from_airline(airline_id, airports)
            .await?,
    ))
}

async fn delete_airport_from_airline(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    state
        .associations
        .delete_airport_from_airline(airline_id, airport_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
