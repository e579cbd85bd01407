// src/core/net.rs
// One blocking GET per seat-map page. Browser-like User-Agent, fixed timeout,
// non-2xx is an error. No retries; the runner decides what a failure means.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Build the shared client. Called once per run.
pub fn client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Fetch one page and return the body text.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(resp.text()?)
}
