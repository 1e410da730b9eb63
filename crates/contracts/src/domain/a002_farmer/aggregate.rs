use serde::{Deserialize, Serialize};

/// Sentinel shown wherever a farmer cannot be named.
pub const UNKNOWN_FARMER: &str = "ไม่ระบุ";

/// Farmer as served by `GET /api/farmers` and as populated inside order
/// details (`detail.farmerId`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farmer {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,

    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,

    // Plot coordinates, present for farmers placed on the map
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Farmer {
    /// `"<first> <last>"`, or the unknown sentinel when either part is absent.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{} {}", first, last)
            }
            _ => UNKNOWN_FARMER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer(first: Option<&str>, last: Option<&str>) -> Farmer {
        Farmer {
            id: "f1".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn full_name_joins_both_parts() {
        assert_eq!(farmer(Some("สมชาย"), Some("ใจดี")).full_name(), "สมชาย ใจดี");
    }

    #[test]
    fn full_name_falls_back_when_incomplete() {
        assert_eq!(farmer(Some("สมชาย"), None).full_name(), UNKNOWN_FARMER);
        assert_eq!(farmer(None, None).full_name(), UNKNOWN_FARMER);
        assert_eq!(farmer(Some(""), Some("ใจดี")).full_name(), UNKNOWN_FARMER);
    }
}
