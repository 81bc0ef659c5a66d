/// Remote collection adapter
///
/// Thin HTTP layer over the product endpoint:
/// - Client and the five operations (client.rs)
/// - Error taxonomy for failed round trips (error.rs)

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
