// handlers/coffee/create.rs - POST /coffees/ handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::database::manager::Database;
use crate::database::models::{CoffeeInput, CoffeeView};
use crate::database::repository::CoffeeRepository;
use crate::error::ApiError;

/// POST /coffees/ - Create a coffee; the store assigns the id
pub async fn create(
    State(db): State<Database>,
    payload: Result<Json<CoffeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CoffeeView>), ApiError> {
    let Json(input) = payload?;
    input
        .validate()
        .map_err(|errors| ApiError::unprocessable_entity("Invalid coffee payload", errors))?;

    let record = CoffeeRepository::new(&db).insert(&input).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
