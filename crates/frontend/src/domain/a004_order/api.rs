use crate::shared::api_utils::{delete_unit, get_json, post_json, post_json_unit, put_json_unit};
use contracts::domain::a004_order::{
    NewOrder, OrderDetailUpdate, OrderListResponse, PredictRequest, PredictResponse, TopVegetable,
};
use serde::Serialize;

/// Optional query parameters of `GET /api/orders`. Unset fields are left
/// out of the query string entirely.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub season: Option<String>,
    pub farmer_id: Option<String>,
    pub quantity: Option<String>,
    pub actual_kg: Option<String>,
    pub status: Option<String>,
    pub order_date: Option<String>,
}

impl OrderQuery {
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        let text_params = [
            ("search", &self.search),
            ("season", &self.season),
            ("farmerId", &self.farmer_id),
            ("quantity", &self.quantity),
            ("actualKg", &self.actual_kg),
            ("status", &self.status),
            ("orderDate", &self.order_date),
        ];
        for (key, value) in text_params {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push(format!("{}={}", key, urlencoding::encode(value)));
            }
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Fetch orders, optionally narrowed by search parameters.
pub async fn get_orders(query: &OrderQuery) -> Result<OrderListResponse, String> {
    get_json(&format!("/orders{}", query.to_query_string())).await
}

pub async fn get_top_vegetables(farmer_id: &str) -> Result<Vec<TopVegetable>, String> {
    get_json(&format!("/top-vegetables/{}", farmer_id)).await
}

pub async fn create_order(order: &NewOrder) -> Result<(), String> {
    post_json_unit("/orders", order).await
}

pub async fn predict_order(request: &PredictRequest) -> Result<PredictResponse, String> {
    post_json("/predict", request).await
}

#[derive(Debug, Clone, Serialize)]
struct DetailsEnvelope<'a> {
    details: [&'a OrderDetailUpdate; 1],
}

/// Update one detail line: the backend expects the changed detail wrapped
/// in a `details` array on `PUT /api/orders/:id`.
pub async fn update_order_detail(order_id: &str, detail: &OrderDetailUpdate) -> Result<(), String> {
    put_json_unit(
        &format!("/orders/{}", order_id),
        &DetailsEnvelope { details: [detail] },
    )
    .await
}

pub async fn delete_order_detail(order_id: &str, detail_id: &str) -> Result<(), String> {
    delete_unit(&format!("/orders/{}/details/{}", order_id, detail_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_builds_no_query_string() {
        assert_eq!(OrderQuery::default().to_query_string(), "");
    }

    #[test]
    fn set_fields_are_encoded_in_order() {
        let query = OrderQuery {
            limit: Some(50),
            search: Some("คะน้า สด".to_string()),
            status: Some("Pending".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.to_query_string(),
            format!(
                "?limit=50&search={}&status=Pending",
                urlencoding::encode("คะน้า สด")
            )
        );
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let query = OrderQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "");
    }
}
