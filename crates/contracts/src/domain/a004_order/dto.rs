use serde::{Deserialize, Serialize};

/// Payload of `PUT /api/orders/:id` when editing one detail line: the backend
/// expects the changed detail wrapped in a `details` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailUpdate {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "quantityKg")]
    pub quantity_kg: f64,

    pub delivery: DeliveryUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryUpdate {
    #[serde(rename = "actualKg")]
    pub actual_kg: f64,

    // RFC3339 or null to clear the date
    #[serde(rename = "deliveredDate")]
    pub delivered_date: Option<String>,

    pub status: String,
}

/// Payload of `POST /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(rename = "vegetableId")]
    pub vegetable_id: String,

    #[serde(rename = "buyerId")]
    pub buyer_id: String,

    #[serde(rename = "orderDate")]
    pub order_date: String,

    #[serde(rename = "dueDate")]
    pub due_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    pub details: Vec<NewOrderDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderDetail {
    #[serde(rename = "farmerId")]
    pub farmer_id: String,

    #[serde(rename = "quantityKg")]
    pub quantity_kg: f64,
}

/// Payload of `POST /api/predict`: expected yield for a planned planting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "vegetableId")]
    pub vegetable_id: String,

    #[serde(rename = "farmerId")]
    pub farmer_id: String,

    #[serde(rename = "quantityKg")]
    pub quantity_kg: f64,

    #[serde(rename = "orderDate")]
    pub order_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "predictedKg")]
    pub predicted_kg: f64,
}

/// One row of `GET /api/top-vegetables/:farmerId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopVegetable {
    pub name: String,

    #[serde(rename = "totalKg", default)]
    pub total_kg: f64,
}
