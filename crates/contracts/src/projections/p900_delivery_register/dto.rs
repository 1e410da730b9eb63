use crate::domain::a002_farmer::UNKNOWN_FARMER;
use crate::domain::a004_order::Order;
use crate::enums::DeliveryStatus;
use crate::shared::dates::{format_display_date, MISSING_DATE};
use serde::{Deserialize, Serialize};

/// One row of the manage page: an order detail joined with its order-level
/// fields, all display-ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRow {
    pub id: String,
    pub order_id: String,
    pub farmer_name: String,
    pub vegetable_name: String,
    pub buyer_name: String,
    pub order_date: String,
    pub due_date: String,
    pub quantity_ordered: f64,
    pub delivery_date: String,
    pub quantity_delivered: f64,
    pub status: DeliveryStatus,
}

/// Flatten orders into manage-page rows.
///
/// Orders without a `details` field are skipped, and so is any detail whose
/// farmer was not populated (the register is keyed on who grows the line).
/// Unknown status codes fall back to `Pending`.
pub fn flatten_register(orders: &[Order]) -> Vec<DeliveryRow> {
    orders
        .iter()
        .filter_map(|order| order.details.as_ref().map(|details| (order, details)))
        .flat_map(|(order, details)| {
            details
                .iter()
                .filter(|detail| detail.farmer.is_some())
                .map(move |detail| {
                    let delivery = detail.delivery.as_ref();
                    DeliveryRow {
                        id: detail.id.clone(),
                        order_id: order.id.clone(),
                        farmer_name: detail
                            .farmer
                            .as_ref()
                            .map(|f| f.full_name())
                            .unwrap_or_else(|| UNKNOWN_FARMER.to_string()),
                        vegetable_name: order
                            .vegetable
                            .as_ref()
                            .map(|v| v.name.clone())
                            .unwrap_or_else(|| "ไม่ระบุ".to_string()),
                        buyer_name: order
                            .buyer
                            .as_ref()
                            .map(|b| b.name.clone())
                            .unwrap_or_else(|| "-".to_string()),
                        order_date: order
                            .order_date
                            .as_deref()
                            .map(format_display_date)
                            .unwrap_or_else(|| MISSING_DATE.to_string()),
                        due_date: order
                            .due_date
                            .as_deref()
                            .map(format_display_date)
                            .unwrap_or_else(|| MISSING_DATE.to_string()),
                        quantity_ordered: detail.quantity_kg.unwrap_or(0.0),
                        delivery_date: delivery
                            .and_then(|d| d.delivered_date.as_deref())
                            .map(format_display_date)
                            .unwrap_or_else(|| MISSING_DATE.to_string()),
                        quantity_delivered: delivery.and_then(|d| d.actual_kg).unwrap_or(0.0),
                        status: delivery
                            .and_then(|d| d.status.as_deref())
                            .and_then(DeliveryStatus::from_code)
                            .unwrap_or_default(),
                    }
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_farmer::Farmer;
    use crate::domain::a004_order::{Delivery, OrderDetail};
    use crate::domain::a001_vegetable::Vegetable;

    fn farmer() -> Farmer {
        Farmer {
            id: "f1".to_string(),
            first_name: Some("สมชาย".to_string()),
            last_name: Some("ใจดี".to_string()),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn skips_details_without_a_populated_farmer() {
        let order = Order {
            id: "o1".to_string(),
            vegetable: Some(Vegetable::new("v1", "คะน้า")),
            buyer: None,
            order_date: Some("2024-02-01T00:00:00.000Z".to_string()),
            due_date: None,
            season: None,
            details: Some(vec![
                OrderDetail {
                    id: "d1".to_string(),
                    farmer: None,
                    quantity_kg: Some(10.0),
                    delivery: None,
                },
                OrderDetail {
                    id: "d2".to_string(),
                    farmer: Some(farmer()),
                    quantity_kg: Some(20.0),
                    delivery: Some(Delivery {
                        actual_kg: None,
                        delivered_date: None,
                        status: Some("Nonsense".to_string()),
                    }),
                },
            ]),
        };

        let rows = flatten_register(&[order]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "d2");
        assert_eq!(rows[0].farmer_name, "สมชาย ใจดี");
        assert_eq!(rows[0].order_date, "01/02/2024");
        assert_eq!(rows[0].due_date, "--");
        assert_eq!(rows[0].buyer_name, "-");
        // unknown status code falls back to pending
        assert_eq!(rows[0].status, DeliveryStatus::Pending);
    }
}
