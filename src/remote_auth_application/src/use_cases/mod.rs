pub mod remote_authentication;

pub use remote_authentication::RemoteAuthentication;
