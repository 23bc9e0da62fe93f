//! HTTP client construction
//!
//! One shared reqwest::Client with a request timeout; system proxy env vars
//! are honored by reqwest's default proxy handling.

use reqwest::Client;
use std::time::Duration;

/// Default per-request timeout for API calls.
///
/// The search path has no retry logic, so a hung request would otherwise
/// stall its category until the caller gives up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a reqwest Client with the given timeout
pub fn client_with_timeout(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("loadlens/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        let _client = client_with_timeout(DEFAULT_TIMEOUT);
    }
}
