use crate::shared::api_utils::get_json;
use contracts::domain::a002_farmer::Farmer;

pub async fn get_farmers() -> Result<Vec<Farmer>, String> {
    get_json("/farmers").await
}
