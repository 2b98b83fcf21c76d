use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

/// Persisted coffee row. `id` is SERIAL-assigned and immutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoffeeRecord {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Request body for create and update. Carries no id; the store is the
/// source of truth for identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl CoffeeInput {
    /// Field-level validation beyond what deserialization enforces.
    /// Price is intentionally unconstrained: zero and negative values are
    /// accepted, and names need not be unique.
    pub fn validate(&self) -> Result<(), HashMap<String, String>> {
        let mut field_errors = HashMap::new();

        if self.name.trim().is_empty() {
            field_errors.insert("name".to_string(), "must not be empty".to_string());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(field_errors)
        }
    }
}

/// Response body: a direct projection of CoffeeRecord, no hidden fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<CoffeeRecord> for CoffeeView {
    fn from(record: CoffeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
        }
    }
}
