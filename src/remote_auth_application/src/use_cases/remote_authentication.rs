use async_trait::async_trait;
use remote_auth_core::{
    AccountModel, Authentication, AuthenticationError, AuthenticationParams, HttpPostClient,
    HttpPostParams, HttpResponse, HttpStatusCode, InvalidCredentialsError, UnexpectedError,
};

/// Remote authentication use case - posts credentials to a login endpoint
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent `auth` calls.
pub struct RemoteAuthentication<C>
where
    C: HttpPostClient<AuthenticationParams, AccountModel>,
{
    url: String,
    http_post_client: C,
}

impl<C> RemoteAuthentication<C>
where
    C: HttpPostClient<AuthenticationParams, AccountModel>,
{
    pub fn new(url: impl Into<String>, http_post_client: C) -> Self {
        Self {
            url: url.into(),
            http_post_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<C> Authentication for RemoteAuthentication<C>
where
    C: HttpPostClient<AuthenticationParams, AccountModel>,
{
    type Error = AuthenticationError<C::Error>;

    /// Execute the remote authentication use case
    ///
    /// # Arguments
    /// * `params` - Credentials, sent unchanged as the request body
    ///
    /// # Returns
    /// The account on HTTP 200, `InvalidCredentials` on 401, `Unexpected` on
    /// any other status, or the client's own error if no response arrived
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, Self::Error> {
        let response = self
            .http_post_client
            .post(HttpPostParams::new(self.url.clone(), Some(params)))
            .await
            .map_err(AuthenticationError::Transport)?;

        map_response(response)
    }
}

fn map_response<E>(
    response: HttpResponse<AccountModel>,
) -> Result<AccountModel, AuthenticationError<E>> {
    match response.status_code {
        // A 200 without an account is as useless to the caller as a 5xx
        HttpStatusCode::Ok => response.body.ok_or_else(|| UnexpectedError.into()),
        HttpStatusCode::Unauthorized => Err(InvalidCredentialsError.into()),
        _ => Err(UnexpectedError.into()),
    }
}
