//! Remote Adapters
//!
//! Implementations of the collaborator ports.
//!
//! - **ApiClient** - reqwest client for the wellness backend
//! - **mock** - configurable mocks for testing

mod api_client;
pub mod mock;

pub use api_client::ApiClient;
