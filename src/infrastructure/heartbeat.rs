//! Client-side liveness check against a running server.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct Heartbeat {
    ok: bool,
}

/// Calls `GET {base_url}/heartbeat` and succeeds only on a 2xx with `"ok": true`.
///
/// # Errors
///
/// Returns an error if the server cannot be reached within `timeout`, answers
/// with a non-success status, or reports `ok: false`.
pub async fn check_heartbeat(base_url: &str, timeout: Duration) -> Result<()> {
    let endpoint = format!("{}/heartbeat", base_url.trim_end_matches('/'));

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(&endpoint)
        .send()
        .await
        .with_context(|| format!("Failed to reach {endpoint}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Received status code {}", status.as_u16());
    }

    let body: Heartbeat = response
        .json()
        .await
        .context("Heartbeat response is not the expected JSON")?;

    if !body.ok {
        anyhow::bail!("Server reported ok: false");
    }

    Ok(())
}
