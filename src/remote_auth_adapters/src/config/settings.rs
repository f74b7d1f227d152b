use std::time::Duration;

use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::Deserialize;

use super::constants::{CONFIG_FILE, defaults, env};

/// Settings for reaching the remote authentication API.
///
/// Sources, lowest precedence first: built-in defaults, the optional
/// `config/remote_auth.json` file, then `REMOTE_AUTH__*` environment
/// variables (e.g. `REMOTE_AUTH__API__BASE_URL`).
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAuthSetting {
    pub api: ApiSettings,
    pub http_client: HttpClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub login_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientSettings {
    pub timeout_in_millis: u64,
}

impl RemoteAuthSetting {
    pub fn load() -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }

    /// Load settings from a JSON document layered over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.base_url", defaults::API_BASE_URL)?
            .set_default("api.login_path", defaults::LOGIN_PATH)?
            .set_default("http_client.timeout_in_millis", defaults::TIMEOUT_IN_MILLIS)
    }
}

impl ApiSettings {
    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn login_url(&self) -> String {
        self.api_url(&self.login_path)
    }
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}
