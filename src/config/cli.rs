//! Command-line options and configuration.

use clap::Parser;

use crate::config::constants::{
    DEFAULT_LANGUAGE, DEFAULT_PRIMARY_PROVIDER_URL, DEFAULT_SECONDARY_PROVIDER_URL,
};
use crate::config::types::{LogFormat, LogLevel};

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line flags.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// address_autofill
///
/// # Bind to all interfaces on a custom port
/// address_autofill --host 0.0.0.0 --port 8080
///
/// # Enable the secondary provider
/// address_autofill --geocode-maps-api-key YOUR_KEY
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "address_autofill",
    about = "Resolves coordinates into shipping addresses and serves the autofill API."
)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Base URL of the primary reverse-geocoding provider (Nominatim)
    #[arg(long, default_value = DEFAULT_PRIMARY_PROVIDER_URL)]
    pub nominatim_url: String,

    /// Base URL of the secondary reverse-geocoding provider (geocode.maps.co)
    #[arg(long, default_value = DEFAULT_SECONDARY_PROVIDER_URL)]
    pub geocode_maps_url: String,

    /// API key for the secondary provider.
    ///
    /// Falls back to the `GEOCODE_MAPS_API_KEY` environment variable. Without a
    /// key the resolver runs with the primary provider only; there is no
    /// built-in default.
    #[arg(long)]
    pub geocode_maps_api_key: Option<String>,

    /// Contact email sent with Nominatim requests.
    ///
    /// Nominatim's usage policy asks heavy users to identify themselves.
    /// Falls back to the `NOMINATIM_CONTACT_EMAIL` environment variable.
    #[arg(long)]
    pub contact_email: Option<String>,

    /// Default language tag for resolved addresses (e.g. ar, en, fr)
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Deployment environment label reported by the health endpoint.
    ///
    /// Falls back to the `APP_ENV` environment variable, then to "development".
    #[arg(long)]
    pub environment: Option<String>,
}

impl Config {
    /// API key for the secondary provider, from the CLI flag or the
    /// `GEOCODE_MAPS_API_KEY` environment variable. Blank values count as unset.
    pub fn fallback_api_key(&self) -> Option<String> {
        first_non_blank(self.geocode_maps_api_key.as_deref(), "GEOCODE_MAPS_API_KEY")
    }

    /// Contact email for Nominatim requests, from the CLI flag or the
    /// `NOMINATIM_CONTACT_EMAIL` environment variable.
    pub fn nominatim_contact(&self) -> Option<String> {
        first_non_blank(self.contact_email.as_deref(), "NOMINATIM_CONTACT_EMAIL")
    }

    /// Environment label for the health endpoint, from the CLI flag or the
    /// `APP_ENV` environment variable, defaulting to "development".
    pub fn environment_label(&self) -> String {
        first_non_blank(self.environment.as_deref(), "APP_ENV")
            .unwrap_or_else(|| "development".to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            nominatim_url: DEFAULT_PRIMARY_PROVIDER_URL.to_string(),
            geocode_maps_url: DEFAULT_SECONDARY_PROVIDER_URL.to_string(),
            geocode_maps_api_key: None,
            contact_email: None,
            language: DEFAULT_LANGUAGE.to_string(),
            environment: None,
        }
    }
}

/// Returns the flag value when it is non-blank, otherwise the environment
/// variable when that is non-blank.
fn first_non_blank(flag: Option<&str>, env_key: &str) -> Option<String> {
    flag.map(str::to_string)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| std::env::var(env_key).ok().filter(|v| !v.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        // Test Config default values
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.nominatim_url, DEFAULT_PRIMARY_PROVIDER_URL);
        assert_eq!(config.geocode_maps_url, DEFAULT_SECONDARY_PROVIDER_URL);
        assert_eq!(config.language, DEFAULT_LANGUAGE);
        assert!(config.geocode_maps_api_key.is_none());
        assert!(config.contact_email.is_none());
        assert!(config.environment.is_none());
    }

    #[test]
    fn test_flag_wins_over_env() {
        // A non-blank flag value is used without consulting the environment
        let value = first_non_blank(Some("from-flag"), "ADDRESS_AUTOFILL_UNSET_VAR_1");
        assert_eq!(value, Some("from-flag".to_string()));
    }

    #[test]
    fn test_blank_flag_counts_as_unset() {
        // Whitespace-only flag values fall through to the environment
        let value = first_non_blank(Some("   "), "ADDRESS_AUTOFILL_UNSET_VAR_2");
        assert_eq!(value, None);
    }

    #[test]
    fn test_env_fallback() {
        // Unique variable name avoids interference between parallel tests
        std::env::set_var("ADDRESS_AUTOFILL_TEST_FALLBACK_KEY", "from-env");
        let value = first_non_blank(None, "ADDRESS_AUTOFILL_TEST_FALLBACK_KEY");
        assert_eq!(value, Some("from-env".to_string()));
        std::env::remove_var("ADDRESS_AUTOFILL_TEST_FALLBACK_KEY");
    }

    #[test]
    fn test_environment_label_prefers_flag() {
        let config = Config {
            environment: Some("production".to_string()),
            ..Default::default()
        };
        assert_eq!(config.environment_label(), "production");
    }

    #[test]
    fn test_cli_parsing() {
        // Verify clap accepts the documented flags
        let config = Config::parse_from([
            "address_autofill",
            "--port",
            "8080",
            "--language",
            "fr",
            "--geocode-maps-api-key",
            "test-key",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.language, "fr");
        assert_eq!(config.fallback_api_key(), Some("test-key".to_string()));
    }
}
