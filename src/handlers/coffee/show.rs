// handlers/coffee/show.rs - GET /coffees/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::manager::Database;
use crate::database::models::CoffeeView;
use crate::database::repository::CoffeeRepository;
use crate::error::ApiError;

/// GET /coffees/:id - Fetch a single coffee by primary key
pub async fn show(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<CoffeeView>, ApiError> {
    let record = CoffeeRepository::new(&db).select_404(id).await?;

    Ok(Json(record.into()))
}
