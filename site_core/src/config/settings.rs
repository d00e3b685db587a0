use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::relay::client::DEFAULT_API_BASE;

/// Number published on the site itself; the deep link falls back to it when
/// no destination is configured.
pub const DEFAULT_BUSINESS_NUMBER: &str = "5493874857539";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub cors: CorsConfig,
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub assets_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Credentials and addressing for the WhatsApp Cloud API. All three secrets
/// are optional: with any of them missing the relay degrades to handing the
/// visitor a `wa.me` link instead of delivering for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    pub api_base: String,
    pub phone_number_id: Option<String>,
    pub access_token: Option<String>,
    pub business_number: Option<String>,
}

/// The fully-present counterpart of [`WhatsAppConfig`], handed to the client
/// once the configuration check has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub phone_number_id: String,
    pub access_token: String,
    pub business_number: String,
}

impl WhatsAppConfig {
    /// Returns the credentials only when all three secrets are present and
    /// non-empty.
    pub fn credentials(&self) -> Option<ApiCredentials> {
        Some(ApiCredentials {
            phone_number_id: non_empty(&self.phone_number_id)?,
            access_token: non_empty(&self.access_token)?,
            business_number: non_empty(&self.business_number)?,
        })
    }

    /// Destination for the deep link: the configured business number, or the
    /// published default when that is absent.
    pub fn fallback_number(&self) -> &str {
        self.business_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_BUSINESS_NUMBER)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            cors: CorsConfig::default(),
            whatsapp: WhatsAppConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("static"),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            phone_number_id: None,
            access_token: None,
            business_number: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.site.assets_dir.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "Assets directory cannot be empty".to_string(),
            ));
        }

        if self.whatsapp.api_base.is_empty() {
            return Err(ConfigError::Message(
                "WhatsApp API base URL cannot be empty".to_string(),
            ));
        }

        if self.whatsapp.credentials().is_none() {
            tracing::warn!(
                "WhatsApp API not fully configured - the contact relay will answer with the direct link"
            );
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
