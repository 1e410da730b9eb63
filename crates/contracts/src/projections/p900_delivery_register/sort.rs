use super::dto::DeliveryRow;
use std::cmp::Ordering;

/// Sortable columns of the register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Farmer,
    Vegetable,
    Buyer,
    OrderDate,
    DueDate,
    QuantityOrdered,
    DeliveryDate,
    QuantityDelivered,
    Status,
}

impl SortKey {
    fn compare(&self, a: &DeliveryRow, b: &DeliveryRow) -> Ordering {
        match self {
            SortKey::Farmer => a.farmer_name.cmp(&b.farmer_name),
            SortKey::Vegetable => a.vegetable_name.cmp(&b.vegetable_name),
            SortKey::Buyer => a.buyer_name.cmp(&b.buyer_name),
            SortKey::OrderDate => a.order_date.cmp(&b.order_date),
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::QuantityOrdered => a
                .quantity_ordered
                .partial_cmp(&b.quantity_ordered)
                .unwrap_or(Ordering::Equal),
            SortKey::DeliveryDate => a.delivery_date.cmp(&b.delivery_date),
            SortKey::QuantityDelivered => a
                .quantity_delivered
                .partial_cmp(&b.quantity_delivered)
                .unwrap_or(Ordering::Equal),
            SortKey::Status => a.status.code().cmp(b.status.code()),
        }
    }
}

/// Single-key sort of the register.
///
/// Ties keep the original input order in both directions: the sort is
/// stable and descending order only reverses the comparator, never the
/// equal-key runs.
pub fn sort_rows(rows: &mut [DeliveryRow], key: SortKey, ascending: bool) {
    rows.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DeliveryStatus;

    fn row(id: &str, farmer: &str, ordered: f64) -> DeliveryRow {
        DeliveryRow {
            id: id.to_string(),
            order_id: "o1".to_string(),
            farmer_name: farmer.to_string(),
            vegetable_name: "คะน้า".to_string(),
            buyer_name: "-".to_string(),
            order_date: "--".to_string(),
            due_date: "--".to_string(),
            quantity_ordered: ordered,
            delivery_date: "--".to_string(),
            quantity_delivered: 0.0,
            status: DeliveryStatus::Pending,
        }
    }

    fn ids(rows: &[DeliveryRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn sorts_by_numeric_key() {
        let mut rows = vec![row("a", "ก", 30.0), row("b", "ข", 10.0), row("c", "ค", 20.0)];
        sort_rows(&mut rows, SortKey::QuantityOrdered, true);
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);
        sort_rows(&mut rows, SortKey::QuantityOrdered, false);
        assert_eq!(ids(&rows), vec!["a", "c", "b"]);
    }

    #[test]
    fn equal_keys_preserve_input_order_in_both_directions() {
        let mut rows = vec![row("a", "ก", 10.0), row("b", "ข", 10.0), row("c", "ค", 5.0)];
        sort_rows(&mut rows, SortKey::QuantityOrdered, true);
        assert_eq!(ids(&rows), vec!["c", "a", "b"]);

        let mut rows = vec![row("a", "ก", 10.0), row("b", "ข", 10.0), row("c", "ค", 5.0)];
        sort_rows(&mut rows, SortKey::QuantityOrdered, false);
        // "a" still precedes "b": only the comparator reverses
        assert_eq!(ids(&rows), vec!["a", "b", "c"]);
    }
}
