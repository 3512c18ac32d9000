pub mod config;
pub mod listing;
pub mod rent;
pub mod state;
pub mod ticket;

pub use config::*;
pub use listing::*;
pub use rent::*;
pub use state::*;
pub use ticket::*;
