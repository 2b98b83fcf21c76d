// handlers/coffee/update.rs - PUT /coffees/:id handler

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::database::manager::Database;
use crate::database::models::{CoffeeInput, CoffeeView};
use crate::database::repository::CoffeeRepository;
use crate::error::ApiError;

/// PUT /coffees/:id - Overwrite name/description/price wholesale. Partial
/// update is not supported; omitted description becomes NULL.
pub async fn update(
    State(db): State<Database>,
    Path(id): Path<i32>,
    payload: Result<Json<CoffeeInput>, JsonRejection>,
) -> Result<Json<CoffeeView>, ApiError> {
    let Json(input) = payload?;
    input
        .validate()
        .map_err(|errors| ApiError::unprocessable_entity("Invalid coffee payload", errors))?;

    let record = CoffeeRepository::new(&db).update_404(id, &input).await?;

    Ok(Json(record.into()))
}
