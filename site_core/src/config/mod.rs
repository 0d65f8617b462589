//! Application configuration

pub mod settings;

pub use settings::{
    AppConfig, CorsConfig, LoggingConfig, RateLimitConfig, RelayConfig, ServerConfig, SiteConfig,
    DEFAULT_RELAY_ENDPOINT,
};
