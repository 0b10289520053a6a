use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use aerolink_core::model::{Airline, Airport};
use aerolink_core::repository::AirlineRepository;
use aerolink_core::StoreError;

use crate::airport_repo::AirportRow;

pub struct PgAirlineRepository {
    pool: PgPool,
}

impl PgAirlineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn airports_of(&self, airline_id: Uuid) -> Result<Vec<Airport>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AirportRow>(
            r#"
            SELECT a.id, a.name, a.code, a.country, a.city
            FROM airports a
            JOIN airline_airports aa ON aa.airport_id = a.id
            WHERE aa.airline_id = $1
            ORDER BY a.name
            "#,
        )
        .bind(airline_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Airport::from).collect())
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct AirlineRow {
    id: Uuid,
    name: String,
    description: String,
    founding_date: NaiveDate,
    website: String,
}

impl AirlineRow {
    fn into_airline(self, airports: Vec<Airport>) -> Airline {
        Airline {
            id: self.id,
            name: self.name,
            description: self.description,
            founding_date: self.founding_date,
            website: self.website,
            airports,
        }
    }
}

#[async_trait]
impl AirlineRepository for PgAirlineRepository {
    async fn find_by_id_with_airports(&self, id: Uuid) -> Result<Option<Airline>, StoreError> {
        let row = sqlx::query_as::<_, AirlineRow>(
            "SELECT id, name, description, founding_date, website FROM airlines WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let airports = self.airports_of(row.id).await?;
                Ok(Some(row.into_airline(airports)))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Airline>, StoreError> {
        let rows = sqlx::query_as::<_, AirlineRow>(
            "SELECT id, name, description, founding_date, website FROM airlines ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut airlines = Vec::with_capacity(rows.len());
        for row in rows {
            let airports = self.airports_of(row.id).await?;
            airlines.push(row.into_airline(airports));
        }

        Ok(airlines)
    }

    async fn save(&self, airline: &Airline) -> Result<Airline, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO airlines (id, name, description, founding_date, website)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                description = EXCLUDED.description,
                founding_date = EXCLUDED.founding_date,
                website = EXCLUDED.website
            "#,
        )
        .bind(airline.id)
        .bind(&airline.name)
        .bind(&airline.description)
        .bind(airline.founding_date)
        .bind(&airline.website)
        .execute(&mut *tx)
        .await?;

        // The carried set is authoritative: replace the association rows
        // wholesale within the same transaction.
        sqlx::query("DELETE FROM airline_airports WHERE airline_id = $1")
            .bind(airline.id)
            .execute(&mut *tx)
            .await?;

        for airport in &airline.airports {
            sqlx::query(
                r#"
                INSERT INTO airline_airports (airline_id, airport_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(airline.id)
            .bind(airport.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(airline.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        // Association rows go with the airline via ON DELETE CASCADE.
        sqlx::query("DELETE FROM airlines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
