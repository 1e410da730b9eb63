use serde::{Deserialize, Serialize};

/// Buyer as served by `GET /api/buyers` and as populated on orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
}

impl Buyer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
