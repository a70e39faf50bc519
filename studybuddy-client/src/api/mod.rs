//! Authenticated access to the Study Buddy HTTP API.
//!
//! Every call made through [`ApiClient`] carries the session's bearer token.
//! A 401 from any guarded call tears the session down and redirects to the
//! login page before the error reaches the caller.

mod auth;
mod cancel;
mod client;
mod messages;

pub use cancel::CancellationToken;
pub use client::ApiClient;
pub use messages::error_message;
