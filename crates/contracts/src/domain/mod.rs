pub mod a001_vegetable;
pub mod a002_farmer;
pub mod a003_buyer;
pub mod a004_order;
