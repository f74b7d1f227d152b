pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::AccountModel,
    authentication_params::AuthenticationParams,
    errors::{AuthenticationError, InvalidCredentialsError, UnexpectedError},
};

pub use ports::{
    authentication::Authentication,
    http_client::{HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode},
};
