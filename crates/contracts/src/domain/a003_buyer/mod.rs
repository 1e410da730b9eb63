pub mod aggregate;

pub use aggregate::Buyer;
