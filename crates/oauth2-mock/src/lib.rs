//! Mock OAuth2 Authorization Server
//!
//! A minimal authorization server for testing clients that consume an
//! OAuth2/JWT authorization-code flow. Instead of authenticating anyone,
//! `/authorize` renders an editable set of fabricated claims, `/submit`
//! redirects back to the client with the claim text riding in the `code`
//! parameter, and `/token` signs whatever claims come back as an HS512 JWT.
//!
//! Nothing is persisted; every request is handled in isolation.
//!
//! # Example
//!
//! ```no_run
//! use oauth2_mock::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new(0, "test-secret".to_string());
//!     server::run(config).await
//! }
//! ```

pub mod claims;
pub mod config;
pub mod error;
pub mod server;
pub mod token;

pub use config::Config;
pub use error::RequestError;
