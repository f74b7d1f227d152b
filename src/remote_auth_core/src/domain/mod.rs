pub mod account;
pub mod authentication_params;
pub mod errors;
