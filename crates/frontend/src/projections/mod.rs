pub mod p900_delivery_register;

pub use p900_delivery_register::ui::DeliveryRegisterList;
