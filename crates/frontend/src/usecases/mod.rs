pub mod u501_plant_order;

pub use u501_plant_order::ui::PlantOrderForm;
