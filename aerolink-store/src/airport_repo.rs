use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use aerolink_core::model::Airport;
use aerolink_core::repository::AirportRepository;
use aerolink_core::StoreError;

pub struct PgAirportRepository {
    pool: PgPool,
}

impl PgAirportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
pub(crate) struct AirportRow {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) code: String,
    pub(crate) country: String,
    pub(crate) city: String,
}

impl From<AirportRow> for Airport {
    fn from(row: AirportRow) -> Self {
        Airport {
            id: row.id,
            name: row.name,
            code: row.code,
            country: row.country,
            city: row.city,
        }
    }
}

#[async_trait]
impl AirportRepository for PgAirportRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, StoreError> {
        let row = sqlx::query_as::<_, AirportRow>(
            "SELECT id, name, code, country, city FROM airports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Airport::from))
    }

    async fn find_all(&self) -> Result<Vec<Airport>, StoreError> {
        let rows = sqlx::query_as::<_, AirportRow>(
            "SELECT id, name, code, country, city FROM airports ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Airport::from).collect())
    }

    async fn save(&self, airport: &Airport) -> Result<Airport, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO airports (id, name, code, country, city)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                code = EXCLUDED.code,
                country = EXCLUDED.country,
                city = EXCLUDED.city
            "#,
        )
        .bind(airport.id)
        .bind(&airport.name)
        .bind(&airport.code)
        .bind(&airport.country)
        .bind(&airport.city)
        .execute(&self.pool)
        .await?;

        Ok(airport.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
