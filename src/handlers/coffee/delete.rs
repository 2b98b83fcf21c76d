// handlers/coffee/delete.rs - DELETE /coffees/:id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::database::manager::Database;
use crate::database::repository::CoffeeRepository;
use crate::error::ApiError;

/// DELETE /coffees/:id - Remove the record; 204 on success
pub async fn delete(State(db): State<Database>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    CoffeeRepository::new(&db).delete_404(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
