use super::dto::DeliveryRow;
use crate::enums::DeliveryStatus;
use crate::shared::dates::{parse_display_date, MISSING_DATE};
use chrono::NaiveDate;

/// Manage-page search conditions: free text, an optional date range and an
/// optional status, composed by logical AND.
#[derive(Debug, Clone, Default)]
pub struct RegisterFilter {
    pub search: String,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub status: Option<DeliveryStatus>,
}

impl RegisterFilter {
    /// Free-text condition: case-insensitive substring over the three name
    /// columns, plus plain substring over the two quantities rendered as
    /// numbers. An empty term matches everything.
    pub fn matches_text(&self, row: &DeliveryRow) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        row.farmer_name.to_lowercase().contains(&term)
            || row.vegetable_name.to_lowercase().contains(&term)
            || row.buyer_name.to_lowercase().contains(&term)
            || row.quantity_ordered.to_string().contains(&self.search)
            || row.quantity_delivered.to_string().contains(&self.search)
    }

    /// Date condition: when either bound is set, the row matches if ANY of
    /// its order/due/delivery dates satisfies EITHER bound (logical OR
    /// across the three fields and the two bounds). Sentinel dates do not
    /// participate.
    pub fn matches_dates(&self, row: &DeliveryRow) -> bool {
        if self.date_start.is_none() && self.date_end.is_none() {
            return true;
        }

        let dates = [&row.order_date, &row.due_date, &row.delivery_date]
            .into_iter()
            .filter(|value| value.as_str() != MISSING_DATE)
            .filter_map(|value| parse_display_date(value));

        for date in dates {
            if let Some(start) = self.date_start {
                if date >= start {
                    return true;
                }
            }
            if let Some(end) = self.date_end {
                if date <= end {
                    return true;
                }
            }
        }
        false
    }

    /// Status condition: equality when a status is selected.
    pub fn matches_status(&self, row: &DeliveryRow) -> bool {
        match self.status {
            Some(status) => row.status == status,
            None => true,
        }
    }

    pub fn apply(&self, rows: &[DeliveryRow]) -> Vec<DeliveryRow> {
        rows.iter()
            .filter(|row| self.matches_text(row) && self.matches_dates(row) && self.matches_status(row))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(farmer: &str, ordered: f64, order_date: &str, status: DeliveryStatus) -> DeliveryRow {
        DeliveryRow {
            id: "d1".to_string(),
            order_id: "o1".to_string(),
            farmer_name: farmer.to_string(),
            vegetable_name: "คะน้า".to_string(),
            buyer_name: "ตลาดไท".to_string(),
            order_date: order_date.to_string(),
            due_date: "--".to_string(),
            quantity_ordered: ordered,
            delivery_date: "--".to_string(),
            quantity_delivered: 0.0,
            status,
        }
    }

    #[test]
    fn empty_filter_is_identity() {
        let rows = vec![row("สมชาย ใจดี", 10.0, "01/03/2024", DeliveryStatus::Pending)];
        assert_eq!(RegisterFilter::default().apply(&rows), rows);
    }

    #[test]
    fn text_matches_names_and_quantities() {
        let rows = vec![
            row("สมชาย ใจดี", 120.0, "--", DeliveryStatus::Pending),
            row("สมหญิง รักสวน", 45.0, "--", DeliveryStatus::Pending),
        ];

        let by_name = RegisterFilter {
            search: "สมหญิง".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&rows).len(), 1);

        let by_quantity = RegisterFilter {
            search: "120".to_string(),
            ..Default::default()
        };
        assert_eq!(by_quantity.apply(&rows).len(), 1);
        assert_eq!(by_quantity.apply(&rows)[0].quantity_ordered, 120.0);
    }

    #[test]
    fn date_range_matches_any_of_the_three_dates() {
        let mut with_delivery = row("ก", 1.0, "--", DeliveryStatus::Complete);
        with_delivery.delivery_date = "20/03/2024".to_string();
        let rows = vec![
            row("ข", 1.0, "01/01/2024", DeliveryStatus::Pending),
            with_delivery,
        ];

        let filter = RegisterFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let matched = filter.apply(&rows);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].delivery_date, "20/03/2024");
    }

    #[test]
    fn either_bound_alone_can_match() {
        // With only an end bound, a date at or before it matches even
        // without a start bound.
        let rows = vec![row("ก", 1.0, "01/01/2024", DeliveryStatus::Pending)];
        let filter = RegisterFilter {
            date_end: NaiveDate::from_ymd_opt(2024, 2, 1),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 1);
    }

    #[test]
    fn all_sentinel_dates_never_match_a_range() {
        let rows = vec![row("ก", 1.0, "--", DeliveryStatus::Pending)];
        let filter = RegisterFilter {
            date_start: NaiveDate::from_ymd_opt(2000, 1, 1),
            ..Default::default()
        };
        assert!(filter.apply(&rows).is_empty());
    }

    #[test]
    fn status_equality() {
        let rows = vec![
            row("ก", 1.0, "--", DeliveryStatus::Pending),
            row("ข", 1.0, "--", DeliveryStatus::Complete),
        ];
        let filter = RegisterFilter {
            status: Some(DeliveryStatus::Complete),
            ..Default::default()
        };
        let matched = filter.apply(&rows);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].farmer_name, "ข");
    }
}
