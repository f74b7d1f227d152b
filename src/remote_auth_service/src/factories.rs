use remote_auth_adapters::{
    config::{HttpClientSettings, RemoteAuthSetting},
    http::ReqwestHttpClient,
};
use remote_auth_application::RemoteAuthentication;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build the `reqwest` collaborator with the configured timeout
///
/// # Arguments
/// * `settings` - HTTP client settings
///
/// # Returns
/// A ready-to-use client, or the builder error if TLS setup fails
pub fn make_reqwest_http_client(
    settings: &HttpClientSettings,
) -> Result<ReqwestHttpClient, ServiceError> {
    let http_client = reqwest::Client::builder()
        .timeout(settings.timeout())
        .build()?;

    Ok(ReqwestHttpClient::new(http_client))
}

/// Wire the login endpoint and the `reqwest` collaborator into a
/// [`RemoteAuthentication`] use case.
#[tracing::instrument(
    name = "Building remote authentication",
    skip_all,
    fields(url = tracing::field::Empty)
)]
pub fn make_remote_authentication(
    settings: &RemoteAuthSetting,
) -> Result<RemoteAuthentication<ReqwestHttpClient>, ServiceError> {
    let url = settings.api.login_url();
    tracing::Span::current().record("url", url.as_str());

    let http_client = make_reqwest_http_client(&settings.http_client)?;

    Ok(RemoteAuthentication::new(url, http_client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_comes_from_settings() {
        let settings = RemoteAuthSetting::from_json(
            r#"{ "api": { "base_url": "https://api.test", "login_path": "/login" } }"#,
        )
        .unwrap();

        let authentication = make_remote_authentication(&settings).unwrap();

        assert_eq!(authentication.url(), "https://api.test/login");
    }
}
