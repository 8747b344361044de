//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe entity — one row in the `cafe` table
///
/// The field list is declared explicitly, in column order; serialization
/// emits every column as a same-named JSON field (booleans as JSON
/// booleans, `id` as a JSON number).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Create cafe payload
///
/// `id` is auto-assigned by the store and never part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}
