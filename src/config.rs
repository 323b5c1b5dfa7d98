use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{Provider, Web3FormsConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    pub verification: VerificationConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FeatureConfig {
    /// Renders the projects section, its navigation entry and `/projects`
    #[serde(default)]
    pub show_projects: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    pub endpoint: String,
    #[serde(default)]
    pub access_key: String,
    pub subject: String,
    /// No timeout when unset, reqwest defaults apply
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VerificationConfig {
    pub provider: String,
    #[serde(default)]
    pub site_key: String,
    pub theme: String,
    pub size: String,
}

impl VerificationConfig {
    pub fn provider(&self) -> Result<Provider, String> {
        self.provider
            .parse()
            .map_err(|_| format!("Unknown verification provider: {}", self.provider))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_github")]
    pub github: String,
    #[serde(default = "default_linkedin")]
    pub linkedin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            email: default_email(),
            location: default_location(),
            github: default_github(),
            linkedin: default_linkedin(),
        }
    }
}

fn default_owner() -> String {
    "Ignacio Gallardo Sánchez".to_string()
}

fn default_email() -> String {
    "nachogallardosanchez@gmail.com".to_string()
}

fn default_location() -> String {
    "Sevilla, España".to_string()
}

fn default_github() -> String {
    "https://github.com/nachogallardo".to_string()
}

fn default_linkedin() -> String {
    "https://www.linkedin.com/in/ignaciogallardosanchez/".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (WEB3FORMS_ACCESS_KEY, HCAPTCHA_SITE_KEY, SHOW_PROJECTS)
    /// 2. Environment variables (FOLIO__CONTACT__ACCESS_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.endpoint", folio_contact::WEB3FORMS_ENDPOINT)?
            .set_default("contact.subject", "Nuevo mensaje desde el portfolio")?
            .set_default("verification.provider", "hcaptcha")?
            .set_default("verification.theme", "dark")?
            .set_default("verification.size", "normal")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(access_key) = env::var("WEB3FORMS_ACCESS_KEY") {
            builder = builder.set_override("contact.access_key", access_key)?;
        }
        if let Ok(site_key) = env::var("HCAPTCHA_SITE_KEY") {
            builder = builder.set_override("verification.site_key", site_key)?;
        }
        if let Ok(show_projects) = env::var("SHOW_PROJECTS") {
            builder = builder.set_override("features.show_projects", show_projects == "true")?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.access_key.trim().is_empty() {
            return Err("Contact access key must be set".to_string());
        }
        if self.verification.site_key.trim().is_empty() {
            return Err("Verification site key must be set".to_string());
        }
        if reqwest::Url::parse(&self.contact.endpoint).is_err() {
            return Err(format!(
                "Contact endpoint is not a valid URL: {}",
                self.contact.endpoint
            ));
        }
        self.verification.provider()?;
        Ok(())
    }

    pub fn forms(&self) -> Result<Web3FormsConfig, String> {
        Ok(Web3FormsConfig {
            endpoint: self.contact.endpoint.to_owned(),
            access_key: self.contact.access_key.to_owned(),
            subject: self.contact.subject.to_owned(),
            provider: self.verification.provider()?,
            timeout: self.contact.timeout_secs.map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            contact: ContactConfig {
                endpoint: "https://api.web3forms.com/submit".to_string(),
                access_key: "access-key".to_string(),
                subject: "New message".to_string(),
                timeout_secs: None,
            },
            verification: VerificationConfig {
                provider: "hcaptcha".to_string(),
                site_key: "10000000-ffff-ffff-ffff-000000000001".to_string(),
                theme: "dark".to_string(),
                size: "normal".to_string(),
            },
            observability: ObservabilityConfig::default(),
            features: FeatureConfig::default(),
            site: SiteConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_access_key() {
        let mut config = valid_config();
        config.contact.access_key = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_site_key() {
        let mut config = valid_config();
        config.verification.site_key = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_provider() {
        let mut config = valid_config();
        config.verification.provider = "recaptcha".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_endpoint() {
        let mut config = valid_config();
        config.contact.endpoint = "not a url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_forms_config() {
        let mut config = valid_config();
        config.contact.timeout_secs = Some(10);
        config.verification.provider = "turnstile".to_string();

        let forms = config.forms().unwrap();
        assert_eq!(forms.access_key, "access-key");
        assert_eq!(forms.provider, Provider::Turnstile);
        assert_eq!(forms.timeout, Some(Duration::from_secs(10)));
    }
}
