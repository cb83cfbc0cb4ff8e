//! Policy configuration for the workforce core.

mod loader;
mod types;

pub use loader::load_policy;
pub use types::{GatewayConfig, PolicyConfig};
