use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use aerolink_core::model::Airport;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AirportDto {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

impl AirportDto {
    fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("code", &self.code),
            ("country", &self.country),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "{field} must not be empty"
                )));
            }
        }
        Ok(())
    }

    fn into_airport(self, id: Uuid) -> Airport {
        Airport {
            id,
            name: self.name,
            code: self.code,
            country: self.country,
            city: self.city,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/airports", get(find_all).post(create))
        .route(
            "/airports/{id}",
            get(find_one).put(update).delete(delete_one),
        )
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Airport>>, AppError> {
    Ok(Json(state.airports.find_all().await?))
}

async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Airport>, AppError> {
    Ok(Json(state.airports.find_one(id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<AirportDto>,
) -> Result<(StatusCode, Json<Airport>), AppError> {
    dto.validate()?;
    let airport = dto.into_airport(Uuid::new_v4());
    let created = state.airports.create(airport).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<AirportDto>,
) -> Result<Json<Airport>, AppError> {
    dto.validate()?;
    let airport = dto.into_airport(id);
    Ok(Json(state.airports.update(id, airport).await?))
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.airports.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
