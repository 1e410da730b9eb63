use crate::domain::a004_order::Order;
use crate::shared::dates::{format_display_date, MISSING_DATE};
use serde::{Deserialize, Serialize};

/// Placeholder for an absent name, used instead of null throughout the UI.
pub const MISSING_NAME: &str = "-";

/// One delivery line flattened out of an order, ready for the dashboard
/// table, the filter pipeline and the chart series.
///
/// Dates are already in `DD/MM/YYYY` display form (or the `"--"` sentinel);
/// that string, not an `Option`, is the missing-date representation the
/// filters work against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub id: String,
    pub vegetable_name: String,
    pub quantity_ordered: f64,
    pub quantity_delivered: f64,
    pub harvest_date: String,
    pub buyer_id: Option<String>,
    pub buyer_name: String,
    pub due_date: String,
}

/// Flatten the orders list into one record per (order, detail) pair.
///
/// An order whose `details` field is absent contributes nothing; it is
/// skipped before flattening, not emitted as an empty group. Missing nested
/// fields degrade to `"-"` / `0` / `"--"` instead of erroring.
pub fn flatten_orders(orders: &[Order]) -> Vec<OrderLineItem> {
    orders
        .iter()
        .filter_map(|order| order.details.as_ref().map(|details| (order, details)))
        .flat_map(|(order, details)| {
            details.iter().map(move |detail| {
                let delivery = detail.delivery.as_ref();
                OrderLineItem {
                    id: detail.id.clone(),
                    vegetable_name: order
                        .vegetable
                        .as_ref()
                        .map(|v| v.name.clone())
                        .unwrap_or_else(|| MISSING_NAME.to_string()),
                    quantity_ordered: detail.quantity_kg.unwrap_or(0.0),
                    quantity_delivered: delivery.and_then(|d| d.actual_kg).unwrap_or(0.0),
                    harvest_date: delivery
                        .and_then(|d| d.delivered_date.as_deref())
                        .map(format_display_date)
                        .unwrap_or_else(|| MISSING_DATE.to_string()),
                    buyer_id: order.buyer.as_ref().map(|b| b.id.clone()),
                    buyer_name: order
                        .buyer
                        .as_ref()
                        .map(|b| b.name.clone())
                        .unwrap_or_else(|| MISSING_NAME.to_string()),
                    due_date: order
                        .due_date
                        .as_deref()
                        .map(format_display_date)
                        .unwrap_or_else(|| MISSING_DATE.to_string()),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_buyer::Buyer;
    use crate::domain::a001_vegetable::Vegetable;
    use crate::domain::a004_order::{Delivery, OrderDetail};

    fn detail(id: &str, quantity: Option<f64>, delivery: Option<Delivery>) -> OrderDetail {
        OrderDetail {
            id: id.to_string(),
            farmer: None,
            quantity_kg: quantity,
            delivery,
        }
    }

    fn order(id: &str, details: Option<Vec<OrderDetail>>) -> Order {
        Order {
            id: id.to_string(),
            vegetable: Some(Vegetable::new("v1", "คะน้า")),
            buyer: Some(Buyer::new("b1", "ตลาดไท")),
            order_date: None,
            due_date: Some("2024-04-01T00:00:00.000Z".to_string()),
            season: None,
            details,
        }
    }

    #[test]
    fn one_line_per_detail() {
        let orders = vec![order(
            "o1",
            Some(vec![
                detail("d1", Some(50.0), None),
                detail(
                    "d2",
                    Some(30.0),
                    Some(Delivery {
                        actual_kg: Some(28.5),
                        delivered_date: Some("2024-03-15T08:00:00.000Z".to_string()),
                        status: Some("Complete".to_string()),
                    }),
                ),
            ]),
        )];

        let items = flatten_orders(&orders);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].harvest_date, "--");
        assert_eq!(items[0].quantity_delivered, 0.0);
        assert_eq!(items[1].harvest_date, "15/03/2024");
        assert_eq!(items[1].quantity_delivered, 28.5);
        assert_eq!(items[1].due_date, "01/04/2024");
    }

    #[test]
    fn order_without_details_contributes_nothing() {
        let orders = vec![order("o1", None), order("o2", Some(vec![detail("d1", None, None)]))];
        let items = flatten_orders(&orders);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "d1");
        assert_eq!(items[0].quantity_ordered, 0.0);
    }

    #[test]
    fn missing_references_degrade_to_sentinels() {
        let mut bare = order("o1", Some(vec![detail("d1", Some(10.0), None)]));
        bare.vegetable = None;
        bare.buyer = None;
        bare.due_date = None;

        let items = flatten_orders(&[bare]);
        assert_eq!(items[0].vegetable_name, MISSING_NAME);
        assert_eq!(items[0].buyer_name, MISSING_NAME);
        assert_eq!(items[0].buyer_id, None);
        assert_eq!(items[0].due_date, "--");
    }
}
