use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub geocoding: GeocodingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingSettings {
    #[serde(default = "default_geocoding_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_geocoding_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_geocode_cache_size")]
    pub cache_size: u64,
    #[serde(default = "default_geocode_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            endpoint: default_geocoding_endpoint(),
            user_agent: default_geocoding_user_agent(),
            cache_size: default_geocode_cache_size(),
            cache_ttl_secs: default_geocode_cache_ttl(),
        }
    }
}

fn default_geocoding_endpoint() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}
fn default_geocoding_user_agent() -> String {
    "JobPortalApp/1.0".to_string()
}
fn default_geocode_cache_size() -> u64 { 1000 }
fn default_geocode_cache_ttl() -> u64 { 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with JOBS_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with JOBS_)
            // e.g., JOBS_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("JOBS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply the bare Supabase variables the hosting platform exports
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Prefer the conventional SUPABASE_URL / SUPABASE_ANON_KEY variables when
/// present, so the service picks up the same project credentials as the
/// frontend deployment
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL")
        .or_else(|_| env::var("JOBS_SUPABASE__URL"))
        .ok();
    let supabase_api_key = env::var("SUPABASE_ANON_KEY")
        .or_else(|_| env::var("JOBS_SUPABASE__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(api_key) = supabase_api_key {
        builder = builder.set_override("supabase.api_key", api_key)?;
    }

    builder.build()
}
