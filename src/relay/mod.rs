//! HTTP relay that keeps the USDA API key on the server.

pub mod routes;
pub mod upstream;

pub use routes::{RelayState, router};
pub use upstream::{RelayConfig, UpstreamReply, UsdaUpstream};
