pub mod d400_delivery_summary;
