// src/core/net.rs

// HTTP GET with the crawler's patience: up to MAX_ATTEMPTS tries,
// TIMEOUT_SECS per request. Timeouts and 5xx responses are retried;
// other HTTP errors fail fast.

use std::time::Duration;

use log::warn;
use reqwest::blocking::Client;

use crate::config::consts::{MAX_ATTEMPTS, TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

pub fn client() -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?)
}

pub fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    for attempt in 1..=MAX_ATTEMPTS {
        match client.get(url).send() {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    return Ok(resp.text()?);
                }
                if !status.is_server_error() {
                    return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
                }
                warn!("attempt {attempt}/{MAX_ATTEMPTS} for {url}: HTTP {}", status.as_u16());
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                warn!("attempt {attempt}/{MAX_ATTEMPTS} for {url}: waited {TIMEOUT_SECS}s ({e})");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(FetchError::RetriesExhausted { url: s!(url), attempts: MAX_ATTEMPTS })
}
