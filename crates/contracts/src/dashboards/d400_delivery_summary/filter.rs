use super::dto::OrderLineItem;
use crate::domain::a001_vegetable::Vegetable;
use crate::shared::dates::{parse_display_date, MISSING_DATE};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Active filter conditions of the delivery summary dashboard.
///
/// Each category is an independent predicate over one line item; the
/// pipeline is their logical AND. An empty selection set or an unset date
/// imposes no constraint. The pipeline never touches pagination; callers
/// reset the page themselves when an input changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryFilter {
    pub vegetable_ids: HashSet<String>,
    pub buyer_ids: HashSet<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DeliveryFilter {
    /// True when no condition is active, in which case `apply` is identity.
    pub fn is_empty(&self) -> bool {
        self.vegetable_ids.is_empty()
            && self.buyer_ids.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Vegetable condition: the line item carries only the vegetable NAME,
    /// so membership is checked by resolving the name back to an id against
    /// the fetched catalog. A name not present in the catalog never matches.
    /// Known limitation: two catalog entries sharing a name are ambiguous.
    pub fn matches_vegetable(&self, item: &OrderLineItem, catalog: &[Vegetable]) -> bool {
        if self.vegetable_ids.is_empty() {
            return true;
        }
        catalog
            .iter()
            .find(|v| v.name == item.vegetable_name)
            .map(|v| self.vegetable_ids.contains(&v.id))
            .unwrap_or(false)
    }

    /// Buyer condition: direct membership on the line item's buyer id.
    pub fn matches_buyer(&self, item: &OrderLineItem) -> bool {
        if self.buyer_ids.is_empty() {
            return true;
        }
        item.buyer_id
            .as_ref()
            .map(|id| self.buyer_ids.contains(id))
            .unwrap_or(false)
    }

    /// Start-date condition: sentinel harvest dates never match; a harvest
    /// date that fails to parse is excluded rather than propagated.
    pub fn matches_start(&self, item: &OrderLineItem) -> bool {
        let Some(start) = self.start_date else {
            return true;
        };
        if item.harvest_date == MISSING_DATE {
            return false;
        }
        match parse_display_date(&item.harvest_date) {
            Some(harvest) => harvest >= start,
            None => false,
        }
    }

    /// End-date condition, symmetric to `matches_start`. The end day is
    /// inclusive (the original compares against 23:59:59.999 of that day).
    pub fn matches_end(&self, item: &OrderLineItem) -> bool {
        let Some(end) = self.end_date else {
            return true;
        };
        if item.harvest_date == MISSING_DATE {
            return false;
        }
        match parse_display_date(&item.harvest_date) {
            Some(harvest) => harvest <= end,
            None => false,
        }
    }

    /// Run the whole pipeline: AND of all active conditions.
    pub fn apply(&self, items: &[OrderLineItem], catalog: &[Vegetable]) -> Vec<OrderLineItem> {
        items
            .iter()
            .filter(|item| {
                self.matches_vegetable(item, catalog)
                    && self.matches_buyer(item)
                    && self.matches_end(item)
                    && self.matches_start(item)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, vegetable: &str, buyer: Option<&str>, harvest: &str) -> OrderLineItem {
        OrderLineItem {
            id: id.to_string(),
            vegetable_name: vegetable.to_string(),
            quantity_ordered: 10.0,
            quantity_delivered: 8.0,
            harvest_date: harvest.to_string(),
            buyer_id: buyer.map(str::to_string),
            buyer_name: buyer.map(|_| "ตลาดไท".to_string()).unwrap_or("-".to_string()),
            due_date: "--".to_string(),
        }
    }

    fn catalog() -> Vec<Vegetable> {
        vec![
            Vegetable::new("v1", "คะน้า"),
            Vegetable::new("v2", "ผักบุ้ง"),
        ]
    }

    #[test]
    fn no_active_filters_is_identity() {
        let items = vec![
            item("d1", "คะน้า", Some("b1"), "01/03/2024"),
            item("d2", "ผักบุ้ง", None, "--"),
        ];
        let filtered = DeliveryFilter::default().apply(&items, &catalog());
        assert_eq!(filtered, items);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let items = vec![
            item("d1", "คะน้า", Some("b1"), "01/03/2024"),
            item("d2", "ผักบุ้ง", Some("b2"), "15/03/2024"),
            item("d3", "คะน้า", None, "--"),
        ];
        let filter = DeliveryFilter {
            buyer_ids: ["b1", "b2"].iter().map(|s| s.to_string()).collect(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let once = filter.apply(&items, &catalog());
        let twice = filter.apply(&once, &catalog());
        assert_eq!(once, twice);
    }

    #[test]
    fn start_date_keeps_later_harvests_only() {
        let items = vec![
            item("d1", "คะน้า", Some("b1"), "01/03/2024"),
            item("d2", "คะน้า", Some("b1"), "15/03/2024"),
        ];
        let filter = DeliveryFilter {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 10),
            ..Default::default()
        };
        let filtered = filter.apply(&items, &catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d2");
    }

    #[test]
    fn end_date_is_inclusive_and_skips_sentinel() {
        let items = vec![
            item("d1", "คะน้า", Some("b1"), "10/03/2024"),
            item("d2", "คะน้า", Some("b1"), "11/03/2024"),
            item("d3", "คะน้า", Some("b1"), "--"),
        ];
        let filter = DeliveryFilter {
            end_date: NaiveDate::from_ymd_opt(2024, 3, 10),
            ..Default::default()
        };
        let filtered = filter.apply(&items, &catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d1");
    }

    #[test]
    fn unparsable_harvest_date_never_matches_date_filters() {
        let items = vec![item("d1", "คะน้า", Some("b1"), "99/99/2024")];
        let filter = DeliveryFilter {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..Default::default()
        };
        assert!(filter.apply(&items, &catalog()).is_empty());
    }

    #[test]
    fn vegetable_filter_resolves_name_through_catalog() {
        let items = vec![
            item("d1", "คะน้า", Some("b1"), "--"),
            item("d2", "ผักบุ้ง", Some("b1"), "--"),
        ];
        let filter = DeliveryFilter {
            vegetable_ids: ["v1".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let filtered = filter.apply(&items, &catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d1");
    }

    #[test]
    fn vegetable_name_missing_from_catalog_is_excluded() {
        // Line item named "A" whose backing id no longer exists in the
        // fetched catalog: the name->id join fails, so it is filtered out.
        let items = vec![item("d1", "ผักสลัด", Some("b1"), "--")];
        let filter = DeliveryFilter {
            vegetable_ids: ["v1".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert!(filter.apply(&items, &catalog()).is_empty());
    }

    #[test]
    fn buyer_filter_requires_membership() {
        let items = vec![
            item("d1", "คะน้า", Some("b1"), "--"),
            item("d2", "คะน้า", Some("b2"), "--"),
            item("d3", "คะน้า", None, "--"),
        ];
        let filter = DeliveryFilter {
            buyer_ids: ["b2".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let filtered = filter.apply(&items, &catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d2");
    }
}
