use super::dto::{OrderLineItem, MISSING_NAME};
use serde::{Deserialize, Serialize};

/// Chart-ready aggregation result: parallel label/value vectors, keyed by
/// buyer (pie) or vegetable (bar). Derived on every filter pass, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Group the filtered set by buyer and sum delivered quantities.
///
/// Items whose buyer name is the `"-"` sentinel (or empty) are excluded
/// from the aggregation but stay visible in the table. When nothing
/// qualifies the series resets to empty rather than erroring. Labels carry
/// the group's share of the grand total to one decimal place:
/// `"<buyer> (<sum> กก. <pct>%)"`.
pub fn buyer_series(items: &[OrderLineItem]) -> ChartSeries {
    // Vec-based grouping keeps first-seen order so the slice order is
    // deterministic; the sums themselves are order-insensitive.
    let mut groups: Vec<(String, String, f64)> = Vec::new();

    for item in items {
        if item.buyer_name.is_empty() || item.buyer_name == MISSING_NAME {
            continue;
        }
        let Some(buyer_id) = item.buyer_id.as_ref() else {
            continue;
        };
        match groups.iter_mut().find(|(id, _, _)| id == buyer_id) {
            Some((_, _, sum)) => *sum += item.quantity_delivered,
            None => groups.push((
                buyer_id.clone(),
                item.buyer_name.clone(),
                item.quantity_delivered,
            )),
        }
    }

    if groups.is_empty() {
        return ChartSeries::default();
    }

    let grand_total: f64 = groups.iter().map(|(_, _, sum)| sum).sum();
    let mut series = ChartSeries::default();
    for (_, name, sum) in groups {
        let percentage = sum / grand_total * 100.0;
        series
            .labels
            .push(format!("{} ({} กก. {:.1}%)", name, format_kg(sum), percentage));
        series.values.push(sum);
    }
    series
}

/// Group the filtered set by vegetable name and sum delivered quantities.
/// No exclusion and no percentage, matching the bar chart.
pub fn vegetable_series(items: &[OrderLineItem]) -> ChartSeries {
    let mut series = ChartSeries::default();

    for item in items {
        match series
            .labels
            .iter()
            .position(|name| *name == item.vegetable_name)
        {
            Some(index) => series.values[index] += item.quantity_delivered,
            None => {
                series.labels.push(item.vegetable_name.clone());
                series.values.push(item.quantity_delivered);
            }
        }
    }
    series
}

/// Render a kilogram quantity the way the charts label it: integral values
/// without a decimal point, fractional values as-is.
pub fn format_kg(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(buyer: Option<(&str, &str)>, vegetable: &str, delivered: f64) -> OrderLineItem {
        OrderLineItem {
            id: "d".to_string(),
            vegetable_name: vegetable.to_string(),
            quantity_ordered: delivered,
            quantity_delivered: delivered,
            harvest_date: "--".to_string(),
            buyer_id: buyer.map(|(id, _)| id.to_string()),
            buyer_name: buyer
                .map(|(_, name)| name.to_string())
                .unwrap_or(MISSING_NAME.to_string()),
            due_date: "--".to_string(),
        }
    }

    #[test]
    fn buyer_series_groups_and_sums() {
        let items = vec![
            item(Some(("b1", "ตลาดไท")), "คะน้า", 30.0),
            item(Some(("b2", "แม็คโคร")), "ผักบุ้ง", 10.0),
            item(Some(("b1", "ตลาดไท")), "ผักบุ้ง", 10.0),
        ];
        let series = buyer_series(&items);
        assert_eq!(series.values, vec![40.0, 10.0]);
        assert_eq!(series.labels[0], "ตลาดไท (40 กก. 80.0%)");
        assert_eq!(series.labels[1], "แม็คโคร (10 กก. 20.0%)");
    }

    #[test]
    fn sentinel_buyers_are_excluded_but_sum_matches_qualifying_subset() {
        let items = vec![
            item(Some(("b1", "ตลาดไท")), "คะน้า", 25.0),
            item(None, "คะน้า", 99.0),
        ];
        let series = buyer_series(&items);
        let qualifying: f64 = items
            .iter()
            .filter(|i| i.buyer_name != MISSING_NAME && !i.buyer_name.is_empty())
            .map(|i| i.quantity_delivered)
            .sum();
        assert_eq!(series.total(), qualifying);
    }

    #[test]
    fn all_sentinel_buyers_reset_to_empty_series() {
        let items = vec![item(None, "คะน้า", 5.0), item(None, "ผักบุ้ง", 7.0)];
        let series = buyer_series(&items);
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let items = vec![
            item(Some(("b1", "หนึ่ง")), "คะน้า", 33.0),
            item(Some(("b2", "สอง")), "คะน้า", 33.0),
            item(Some(("b3", "สาม")), "คะน้า", 34.0),
        ];
        let series = buyer_series(&items);
        let total: f64 = series
            .labels
            .iter()
            .map(|label| {
                let start = label.rfind("กก. ").expect("label format") + "กก. ".len();
                let end = label.rfind('%').expect("label format");
                label[start..end].parse::<f64>().expect("numeric pct")
            })
            .sum();
        assert!((total - 100.0).abs() < 0.2, "got {}", total);
    }

    #[test]
    fn vegetable_series_keeps_every_item() {
        let items = vec![
            item(None, "คะน้า", 5.0),
            item(Some(("b1", "ตลาดไท")), "คะน้า", 5.0),
            item(Some(("b1", "ตลาดไท")), "ผักบุ้ง", 2.5),
        ];
        let series = vegetable_series(&items);
        assert_eq!(series.labels, vec!["คะน้า", "ผักบุ้ง"]);
        assert_eq!(series.values, vec![10.0, 2.5]);
        assert_eq!(series.total(), 12.5);
    }

    #[test]
    fn format_kg_drops_integral_decimal() {
        assert_eq!(format_kg(40.0), "40");
        assert_eq!(format_kg(28.5), "28.5");
    }
}
