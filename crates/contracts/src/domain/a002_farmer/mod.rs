pub mod aggregate;

pub use aggregate::{Farmer, UNKNOWN_FARMER};
