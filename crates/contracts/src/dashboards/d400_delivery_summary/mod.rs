pub mod dto;
pub mod filter;
pub mod series;

pub use dto::{flatten_orders, OrderLineItem, MISSING_NAME};
pub use filter::DeliveryFilter;
pub use series::{buyer_series, vegetable_series, ChartSeries};
