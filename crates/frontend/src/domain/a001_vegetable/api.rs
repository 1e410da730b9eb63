use crate::shared::api_utils::get_json;
use contracts::domain::a001_vegetable::Vegetable;

pub async fn get_vegetables() -> Result<Vec<Vegetable>, String> {
    get_json("/vegetables").await
}
