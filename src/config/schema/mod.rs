mod core;
mod gateway;
mod identity;

pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use identity::IdentityConfig;
