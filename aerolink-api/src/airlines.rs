use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use aerolink_core::model::Airline;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AirlineDto {
    pub name: String,
    pub description: String,
    pub founding_date: NaiveDate,
    pub website: String,
}

impl AirlineDto {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::ValidationError(
                "description must not be empty".to_string(),
            ));
        }
        if self.website.trim().is_empty() {
            return Err(AppError::ValidationError(
                "website must not be empty".to_string(),
            ));
        }
        if self.founding_date > Utc::now().date_naive() {
            return Err(AppError::ValidationError(
                "founding date must not be in the future".to_string(),
            ));
        }
        Ok(())
    }

    fn into_airline(self, id: Uuid) -> Airline {
        Airline {
            id,
            name: self.name,
            description: self.description,
            founding_date: self.founding_date,
            website: self.website,
            airports: Vec::new(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/airlines", get(find_all).post(create))
        .route(
            "/airlines/{id}",
            get(find_one).put(update).delete(delete_one),
        )
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Airline>>, AppError> {
    Ok(Json(state.airlines.find_all().await?))
}

async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Airline>, AppError> {
    Ok(Json(state.airlines.find_one(id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<AirlineDto>,
) -> Result<(StatusCode, Json<Airline>), AppError> {
    dto.validate()?;
    let airline = dto.into_airline(Uuid::new_v4());
    let created = state.airlines.create(airline).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<AirlineDto>,
) -> Result<Json<Airline>, AppError> {
    dto.validate()?;
    let airline = dto.into_airline(id);
    Ok(Json(state.airlines.update(id, airline).await?))
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.airlines.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
