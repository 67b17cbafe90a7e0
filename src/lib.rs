pub mod config_loader;
pub mod domain;
pub mod infrastructure;

pub use config_loader::{AppConfig, BinanceConfig, Credentials};
pub use domain::enums::*;
pub use domain::errors::MarginTradingError;
pub use domain::model::history::*;
pub use domain::model::order::*;
pub use domain::model::params::{Params, ParamsBuilder, ToParams};
pub use domain::model::transfer::*;
pub use domain::traits::RequestHandler;
pub use infrastructure::exchange::binance::*;
