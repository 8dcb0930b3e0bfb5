//! Classification of benign network failures
//!
//! Version validation must not block users working offline or behind a
//! flaky proxy: errors that only say "the CDN could not be reached" are
//! treated as benign, everything else as a real failure.

/// Substrings identifying network-level failures, matched against every
/// message in the error's source chain.
const OFFLINE_ERROR_SIGNATURES: &[&str] = &[
    "fetch failed",
    "ENOTFOUND",
    "ECONNREFUSED",
    "ECONNRESET",
    "ETIMEDOUT",
    "ENETUNREACH",
    "EAI_AGAIN",
    "getaddrinfo",
    "dns error",
    "connection refused",
    "connection reset",
    "network is unreachable",
    "timed out",
];

/// Whether the error looks like a connectivity problem rather than a
/// definitive answer from the remote side.
pub fn is_offline_error(error: &reqwest::Error) -> bool {
    if error.is_connect() || error.is_timeout() {
        return true;
    }

    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = current {
        let message = err.to_string();
        if OFFLINE_ERROR_SIGNATURES
            .iter()
            .any(|signature| message.contains(signature))
        {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn connection_refused_is_offline() {
        // Nothing listens on this port.
        let error = reqwest::get("http://127.0.0.1:9/version.json")
            .await
            .unwrap_err();

        assert!(is_offline_error(&error));
    }

    #[tokio::test]
    async fn decode_failure_is_not_offline() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let error = reqwest::get(format!("{}/version.json", server.url()))
            .await
            .unwrap()
            .json::<serde_json::Value>()
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(!is_offline_error(&error));
    }
}
