use async_trait::async_trait;

use crate::domain::{account::AccountModel, authentication_params::AuthenticationParams};

/// Port for the "authenticate credentials" use case.
///
/// Presentation layers depend on this trait rather than on a concrete
/// implementation, so they can be driven by a test double.
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Errors that can occur while authenticating
    type Error: std::error::Error + Send + Sync + 'static;

    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, Self::Error>;
}
