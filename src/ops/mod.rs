pub mod analytics;
pub mod ids;
pub mod listing_ops;
pub mod rent_ops;
pub mod ticket_ops;
