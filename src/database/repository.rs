use sqlx::PgPool;

use crate::database::manager::{Database, DatabaseError};
use crate::database::models::{CoffeeInput, CoffeeRecord};

const NOT_FOUND: &str = "Coffee not found";

/// Data access for the coffees table. Each mutating call is one unit of
/// work: update and delete run their existence check and mutation inside a
/// single transaction, which rolls back on drop if any step fails.
pub struct CoffeeRepository {
    pool: PgPool,
}

impl CoffeeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    pub async fn select_all(&self) -> Result<Vec<CoffeeRecord>, DatabaseError> {
        let records = sqlx::query_as::<_, CoffeeRecord>(
            "SELECT id, name, description, price FROM coffees",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn select_404(&self, id: i32) -> Result<CoffeeRecord, DatabaseError> {
        sqlx::query_as::<_, CoffeeRecord>(
            "SELECT id, name, description, price FROM coffees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(NOT_FOUND.to_string()))
    }

    /// Insert a new record; the store assigns the id.
    pub async fn insert(&self, input: &CoffeeInput) -> Result<CoffeeRecord, DatabaseError> {
        let record = sqlx::query_as::<_, CoffeeRecord>(
            "INSERT INTO coffees (name, description, price) VALUES ($1, $2, $3) \
             RETURNING id, name, description, price",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Overwrite name/description/price wholesale. NotFound when the id is
    /// absent; nothing is mutated in that case.
    pub async fn update_404(
        &self,
        id: i32,
        input: &CoffeeInput,
    ) -> Result<CoffeeRecord, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, CoffeeRecord>(
            "SELECT id, name, description, price FROM coffees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_none() {
            // tx dropped here, rolling back the unit of work
            return Err(DatabaseError::NotFound(NOT_FOUND.to_string()));
        }

        let record = sqlx::query_as::<_, CoffeeRecord>(
            "UPDATE coffees SET name = $1, description = $2, price = $3 WHERE id = $4 \
             RETURNING id, name, description, price",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Remove the record. NotFound when the id is absent.
    pub async fn delete_404(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, CoffeeRecord>(
            "SELECT id, name, description, price FROM coffees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_none() {
            return Err(DatabaseError::NotFound(NOT_FOUND.to_string()));
        }

        sqlx::query("DELETE FROM coffees WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
