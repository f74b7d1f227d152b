use async_trait::async_trait;

// ============================================================================
// Status codes
// ============================================================================

/// HTTP status codes the use cases recognise.
///
/// Any code without a dedicated variant is carried in [`HttpStatusCode::Other`]
/// and is treated the same way as every other unrecognised code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpStatusCode {
    Ok,
    BadRequest,
    Unauthorized,
    NotFound,
    ServerError,
    Other(u16),
}

impl HttpStatusCode {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::ServerError => 500,
            Self::Other(code) => code,
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => Self::Ok,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            500 => Self::ServerError,
            other => Self::Other(other),
        }
    }
}

// ============================================================================
// Request / response envelopes
// ============================================================================

/// A POST request: destination plus optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPostParams<T> {
    pub url: String,
    pub body: Option<T>,
}

impl<T> HttpPostParams<T> {
    pub fn new(url: impl Into<String>, body: Option<T>) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }
}

/// Transport-agnostic response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse<R> {
    pub status_code: HttpStatusCode,
    pub body: Option<R>,
}

impl<R> HttpResponse<R> {
    pub fn new(status_code: impl Into<HttpStatusCode>, body: Option<R>) -> Self {
        Self {
            status_code: status_code.into(),
            body,
        }
    }

    /// A response with a status code and no body.
    pub fn status(status_code: impl Into<HttpStatusCode>) -> Self {
        Self::new(status_code, None)
    }
}

// ============================================================================
// HttpPostClient port
// ============================================================================

/// Port trait for sending HTTP POST requests.
///
/// Implementations must return every response they receive, whatever its
/// status code. `Err` is reserved for requests that never produced a
/// response (connection refused, timeouts) or whose 200 body cannot be decoded.
#[async_trait]
pub trait HttpPostClient<T, R>: Send + Sync
where
    T: Send + 'static,
    R: Send + 'static,
{
    type Error: std::error::Error + Send + Sync + 'static;

    async fn post(&self, params: HttpPostParams<T>) -> Result<HttpResponse<R>, Self::Error>;
}
