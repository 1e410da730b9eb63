use serde::{Deserialize, Serialize};

/// Vegetable catalog entry as served by `GET /api/vegetables`.
///
/// The backend keys entities by Mongo-style string ids; the id stays opaque
/// on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vegetable {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
}

impl Vegetable {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
