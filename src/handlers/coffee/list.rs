// handlers/coffee/list.rs - GET /coffees/ handler

use axum::{extract::State, response::Json};

use crate::database::manager::Database;
use crate::database::models::CoffeeView;
use crate::database::repository::CoffeeRepository;
use crate::error::ApiError;

/// GET /coffees/ - List every coffee record, no ordering guarantee
pub async fn list(State(db): State<Database>) -> Result<Json<Vec<CoffeeView>>, ApiError> {
    let records = CoffeeRepository::new(&db).select_all().await?;
    let views: Vec<CoffeeView> = records.into_iter().map(CoffeeView::from).collect();

    Ok(Json(views))
}
