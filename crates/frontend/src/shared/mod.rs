pub mod api_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod pagination;
