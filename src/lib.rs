//! # Remote Auth - Remote Authentication Library
//!
//! This is a facade crate that re-exports all public APIs from the remote authentication
//! components. Use this crate to get access to all functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! remote_auth = { path = "../remote_auth" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `AuthenticationParams`, `AccountModel`, error kinds
//! - **Ports**: `Authentication`, `HttpPostClient`
//! - **Use cases**: `RemoteAuthentication`
//! - **Adapters**: `ReqwestHttpClient`, `RemoteAuthSetting`
//! - **Service**: factories wiring the use case to its collaborators

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and ports
pub mod core {
    pub use remote_auth_core::*;
}

// Re-export most commonly used core types at the root level
pub use remote_auth_core::{
    AccountModel, AuthenticationError, AuthenticationParams, InvalidCredentialsError,
    UnexpectedError,
};

// ============================================================================
// Ports
// ============================================================================

pub use remote_auth_core::{
    Authentication, HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use remote_auth_application::*;
}

pub use remote_auth_application::RemoteAuthentication;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP client implementations
    pub mod http {
        pub use remote_auth_adapters::http::*;
    }

    /// Configuration
    pub mod config {
        pub use remote_auth_adapters::config::*;
    }
}

pub use remote_auth_adapters::{config::RemoteAuthSetting, http::ReqwestHttpClient};

// ============================================================================
// Service (Composition Root)
// ============================================================================

pub use remote_auth_service::{
    ServiceError, init_tracing, make_remote_authentication, make_reqwest_http_client,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for building credentials
pub use secrecy::{ExposeSecret, Secret};
