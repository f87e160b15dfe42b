use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub resolver: ResolverSettings,
    pub conversion: ConversionSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub max_wait_secs: u64,
    pub input_format: String,
    pub output_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub language: String,
    pub download_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub staging_dir: Option<PathBuf>,
}

impl ResolverSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConversionSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}

impl TranscriptionSettings {
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml`, then `APP__SECTION__KEY`
    /// variables, then the legacy credential variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .set_override_option(
                "conversion.api_key",
                std::env::var("FREECONVERT_API_KEY").ok(),
            )?
            .set_override_option(
                "transcription.api_key",
                std::env::var("OPENAI_API_KEY").ok(),
            )?
            .set_override_option("resolver.token", std::env::var("XIAZAITOOL_TOKEN").ok())?
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with an inline TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("resolver.base_url", "https://www.xiazaitool.com")?
            .set_default("resolver.timeout_secs", 30_i64)?
            .set_default("conversion.base_url", "https://api.freeconvert.com")?
            .set_default("conversion.request_timeout_secs", 30_i64)?
            .set_default("conversion.poll_interval_ms", 5000_i64)?
            .set_default("conversion.max_wait_secs", 300_i64)?
            .set_default("conversion.input_format", "mp4")?
            .set_default("conversion.output_format", "mp3")?
            .set_default("transcription.base_url", "https://api.openai.com/v1")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.language", "zh")?
            .set_default("transcription.download_timeout_secs", 60_i64)?
            .set_default("transcription.request_timeout_secs", 120_i64)
    }

    /// Names of required credentials that are absent or blank.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let required = [
            ("conversion.api_key", &self.conversion.api_key),
            ("transcription.api_key", &self.transcription.api_key),
            ("resolver.token", &self.resolver.token),
        ];

        required
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect()
    }
}
