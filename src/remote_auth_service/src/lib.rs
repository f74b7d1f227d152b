mod factories;
mod tracing;

pub use crate::tracing::init_tracing;
pub use factories::{ServiceError, make_remote_authentication, make_reqwest_http_client};
