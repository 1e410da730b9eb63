pub mod form;

pub use form::PlantOrderForm;
