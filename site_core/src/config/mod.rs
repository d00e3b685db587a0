pub mod settings;

pub use settings::{
    ApiCredentials, AppConfig, CorsConfig, ServerConfig, SiteConfig, WhatsAppConfig,
    DEFAULT_BUSINESS_NUMBER,
};
