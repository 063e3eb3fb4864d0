pub mod client;
pub mod config;
pub mod resolver;
pub mod source;

pub use client::RelayClient;
pub use config::ResolverConfig;
pub use resolver::{FoodResolver, Resolution};
pub use source::{FoodDataSource, FoodDetails, SearchResponse};
