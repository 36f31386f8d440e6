//! HTTP/1.1 GET over a single `Connection: close` connection.
//!
//! The exchange is written once against `Read + Write` and shared by the
//! plain and TLS transports.

mod request;
mod response;

use std::collections::HashMap;
use std::io::{self, BufReader, Read, Write};
use std::sync::Arc;

use rustls::ClientConfig;

use crate::error::FetchError;
use crate::fetch::transport::Connection;

pub use request::{build_get, USER_AGENT};
pub use response::{
    parse_header_line, parse_status_line, read_head, read_line, reject_encodings, StatusLine,
};

/// Parsed response. Header names are lowercase.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusLine,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Sends the GET request for `path` on `stream` and reads the whole response.
///
/// The body runs to end of stream; the server is expected to close since
/// `Connection: close` was requested.
pub fn exchange<S: Read + Write>(
    mut stream: S,
    host: &str,
    path: &str,
) -> Result<Response, FetchError> {
    let request = build_get(host, path);
    tracing::debug!("GET {} (host {})", path, host);
    stream.write_all(request.as_bytes())?;
    stream.flush()?;

    let mut reader = BufReader::new(stream);
    let (status, headers) = read_head(&mut reader)?;
    tracing::debug!(
        "response {} {} {} with {} headers",
        status.version,
        status.status,
        status.explanation,
        headers.len()
    );

    if let Err(violation) = reject_encodings(&headers) {
        tracing::warn!("rejecting response from {}: {}", host, violation);
        return Err(violation.into());
    }

    let body = read_body(&mut reader)?;
    Ok(Response {
        status,
        headers,
        body,
    })
}

/// Reads to end of stream. A TLS peer closing without `close_notify` shows
/// up as `UnexpectedEof` and still ends the body.
fn read_body<R: Read>(reader: &mut R) -> Result<String, FetchError> {
    let mut bytes = Vec::new();
    match reader.read_to_end(&mut bytes) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::debug!("peer closed without close_notify after {} bytes", bytes.len());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(String::from_utf8(bytes)?)
}

/// Connects (plain, or TLS when `tls` is given), runs the exchange, and
/// drops the connection before returning.
pub fn get(
    host: &str,
    port: u16,
    path: &str,
    tls: Option<Arc<ClientConfig>>,
) -> Result<Response, FetchError> {
    let conn = match tls {
        Some(config) => Connection::connect_tls(host, port, config)?,
        None => Connection::connect_plain(host, port)?,
    };
    tracing::debug!("connected to {}:{} (tls: {})", host, port, conn.is_tls());
    exchange(conn, host, path)
}
