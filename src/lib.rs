pub mod auth;
pub mod client;
pub mod config;
mod error;
pub mod menu;
pub mod model;
pub mod pipeline;

pub use client::BinanceClient;
pub use config::{Config, Palette};
pub use error::BarError;
pub use model::{MarketSnapshot, MergedCoin};
