pub mod dto;
pub mod filter;
pub mod sort;

pub use dto::{flatten_register, DeliveryRow};
pub use filter::RegisterFilter;
pub use sort::{sort_rows, SortKey};
