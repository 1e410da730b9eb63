use crate::shared::api_utils::get_json;
use contracts::system::users::UserDto;

pub async fn get_users() -> Result<Vec<UserDto>, String> {
    get_json("/users").await
}
