use thiserror::Error;

/// The server rejected the supplied credentials.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid credentials")]
pub struct InvalidCredentialsError;

/// Catch-all for any response the caller cannot act on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Something went wrong. Please try again soon")]
pub struct UnexpectedError;

/// Outcome of a failed authentication attempt.
///
/// `E` is the HTTP client's own error type. Transport failures are forwarded
/// as-is so callers can still match on the original error.
#[derive(Debug, Error)]
pub enum AuthenticationError<E> {
    #[error(transparent)]
    InvalidCredentials(#[from] InvalidCredentialsError),
    #[error(transparent)]
    Unexpected(#[from] UnexpectedError),
    #[error(transparent)]
    Transport(E),
}
