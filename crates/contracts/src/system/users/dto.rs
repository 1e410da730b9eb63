use serde::{Deserialize, Serialize};

/// Account record from `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    #[serde(default)]
    pub role: Option<String>,
}
