pub mod authentication;
pub mod http_client;
