use crate::domain::a001_vegetable::Vegetable;
use crate::domain::a002_farmer::Farmer;
use crate::domain::a003_buyer::Buyer;
use serde::{Deserialize, Serialize};

/// One order as served by `GET /api/orders`.
///
/// The backend populates `vegetable`, `buyer` and each detail's `farmerId`
/// from their collections; any of them may be missing on legacy records, so
/// every nested reference is optional and readers degrade to sentinels
/// instead of failing the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub vegetable: Option<Vegetable>,

    #[serde(default)]
    pub buyer: Option<Buyer>,

    #[serde(rename = "orderDate", default)]
    pub order_date: Option<String>,

    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub season: Option<String>,

    // Absent entirely on orders created before the details schema; an order
    // without this field contributes no line items anywhere.
    #[serde(default)]
    pub details: Option<Vec<OrderDetail>>,
}

/// One planned delivery line inside an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "farmerId", default)]
    pub farmer: Option<Farmer>,

    #[serde(rename = "quantityKg", default)]
    pub quantity_kg: Option<f64>,

    #[serde(default)]
    pub delivery: Option<Delivery>,
}

/// Actual delivery recorded against a detail line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(rename = "actualKg", default)]
    pub actual_kg: Option<f64>,

    #[serde(rename = "deliveredDate", default)]
    pub delivered_date: Option<String>,

    // Kept as the raw backend string; unknown codes fall back to Pending at
    // the point of use.
    #[serde(default)]
    pub status: Option<String>,
}

/// Envelope of `GET /api/orders`: the body is `{ "data": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub data: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_without_details_deserializes() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o1","vegetable":{"_id":"v1","name":"คะน้า"},"orderDate":"2024-03-01T00:00:00.000Z"}"#,
        )
        .expect("order should parse");
        assert!(order.details.is_none());
        assert!(order.buyer.is_none());
        assert_eq!(order.vegetable.unwrap().name, "คะน้า");
    }

    #[test]
    fn unknown_delivery_status_is_preserved_as_string() {
        let delivery: Delivery =
            serde_json::from_str(r#"{"actualKg":12.5,"status":"Shipped"}"#).expect("should parse");
        assert_eq!(delivery.status.as_deref(), Some("Shipped"));
        assert_eq!(delivery.actual_kg, Some(12.5));
    }
}
