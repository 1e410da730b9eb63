pub mod aggregate;
pub mod dto;

pub use aggregate::{Delivery, Order, OrderDetail, OrderListResponse};
pub use dto::{
    DeliveryUpdate, NewOrder, NewOrderDetail, OrderDetailUpdate, PredictRequest, PredictResponse,
    TopVegetable,
};
