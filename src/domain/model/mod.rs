pub mod history;
pub mod order;
pub mod params;
pub mod transfer;
