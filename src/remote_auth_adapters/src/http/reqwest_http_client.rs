use async_trait::async_trait;
use remote_auth_core::{HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// [`HttpPostClient`] backed by `reqwest`, sending bodies as JSON.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    http_client: Client,
}

impl ReqwestHttpClient {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl<T, R> HttpPostClient<T, R> for ReqwestHttpClient
where
    T: Serialize + Send + Sync + 'static,
    R: DeserializeOwned + Send + 'static,
{
    type Error = HttpClientError;

    #[tracing::instrument(name = "Posting request", skip_all, fields(url = %params.url))]
    async fn post(&self, params: HttpPostParams<T>) -> Result<HttpResponse<R>, HttpClientError> {
        let mut request = self.http_client.post(&params.url);
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        // Error statuses are still responses; only transport failures bail out here
        let response = request.send().await?;
        let status_code = HttpStatusCode::from(response.status().as_u16());
        let bytes = response.bytes().await?;

        tracing::debug!(status = status_code.code(), "Received response");

        let body = decode_body(status_code, &bytes)?;
        Ok(HttpResponse::new(status_code, body))
    }
}

fn decode_body<R>(status_code: HttpStatusCode, bytes: &[u8]) -> Result<Option<R>, HttpClientError>
where
    R: DeserializeOwned,
{
    if bytes.is_empty() {
        return Ok(None);
    }

    match serde_json::from_slice(bytes) {
        Ok(body) => Ok(Some(body)),
        // Only a 200 is expected to carry the success type
        Err(e) if status_code == HttpStatusCode::Ok => Err(e.into()),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring body with an unknown shape");
            Ok(None)
        }
    }
}
