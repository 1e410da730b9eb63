pub mod d400_delivery_summary;

pub use d400_delivery_summary::ui::DeliverySummaryDashboard;
