//! Scheme-dispatched retrieval.
//!
//! - `data:` payloads are decoded locally and never fail.
//! - `file://` failures come back as an HTML error page, not an `Err`.
//! - `http://` / `https://` speak HTTP/1.1 directly over TCP (and rustls);
//!   transport and protocol failures are returned as `FetchError`.

pub mod data;
pub mod file;
pub mod http;
pub mod transport;

use std::sync::Arc;

use rustls::ClientConfig;

use crate::error::FetchError;
use crate::locator::Locator;

/// Retrieves bodies for parsed locators.
///
/// Holds the TLS client configuration so it is built once per process, not
/// once per request. Connections are never reused.
#[derive(Clone)]
pub struct Fetcher {
    tls: Arc<ClientConfig>,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            tls: transport::tls_client_config(),
        }
    }

    /// Returns the body text for `locator`.
    pub fn retrieve(&self, locator: &Locator) -> Result<String, FetchError> {
        let body = match locator {
            Locator::Data {
                media_and_encoding: None,
                payload,
            } => data::decode(payload),
            Locator::Data {
                media_and_encoding: Some(_),
                payload,
            } => data::unescape(payload),
            Locator::File { path } => file::read_page(path),
            Locator::Http { host, port, path } => http::get(host, *port, path, None)?.body,
            Locator::Https { host, port, path } => {
                http::get(host, *port, path, Some(Arc::clone(&self.tls)))?.body
            }
        };
        tracing::info!("retrieved {} ({} bytes)", locator, body.len());
        Ok(body)
    }
}

/// One-shot retrieval with a fresh `Fetcher`.
pub fn retrieve(locator: &Locator) -> Result<String, FetchError> {
    Fetcher::new().retrieve(locator)
}
