//! Error types for locator parsing and retrieval.
//!
//! File-scheme failures never show up here: they are rendered as an HTML
//! error page and returned as a normal body (see `fetch::file`).

use std::io;
use std::string::FromUtf8Error;

/// Construction-time failure of `locator::parse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Scheme token is not one of `http`, `https`, `file` (or `data:` prefix).
    #[error("unknown scheme: {0:?}")]
    UnknownScheme(String),
    /// Text after `host:` is not a decimal u16.
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
}

/// The server's response does not fit the subset of HTTP/1.1 this client speaks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    #[error("malformed status line: {0:?}")]
    MalformedStatusLine(String),
    #[error("malformed header line: {0:?}")]
    MalformedHeader(String),
    /// `transfer-encoding` / `content-encoding` are not supported.
    #[error("unsupported {header}: {value}")]
    UnsupportedEncoding { header: String, value: String },
    #[error("connection closed before end of headers")]
    UnexpectedEof,
}

/// Retrieval-time failure of an Http/Https locator.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connect, name resolution, or TLS handshake failed.
    #[error("connect to {host}:{port} failed: {source}")]
    Transport {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
    /// TLS setup failed before any bytes were exchanged.
    #[error("tls: {0}")]
    Tls(String),
    /// Send/receive failed on an established connection.
    #[error("i/o: {0}")]
    Io(#[from] io::Error),
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),
    /// Body is not valid UTF-8 text.
    #[error("response body is not UTF-8: {0}")]
    InvalidBody(#[from] FromUtf8Error),
}

impl FetchError {
    /// True when the server answered but broke the wire format.
    pub fn is_protocol(&self) -> bool {
        matches!(self, FetchError::Protocol(_))
    }
}
