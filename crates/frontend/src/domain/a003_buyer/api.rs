use crate::shared::api_utils::get_json;
use contracts::domain::a003_buyer::Buyer;

pub async fn get_buyers() -> Result<Vec<Buyer>, String> {
    get_json("/buyers").await
}
