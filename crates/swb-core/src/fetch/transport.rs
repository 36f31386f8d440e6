//! TCP and TLS connections for http:// and https://.
//!
//! The connection is owned by a single retrieval and closed on drop.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use crate::error::FetchError;

/// Builds the rustls client configuration with Mozilla's root certificates.
pub fn tls_client_config() -> Arc<ClientConfig> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Arc::new(config)
}

/// Blocking byte stream to the origin server, plain or TLS-wrapped.
pub enum Connection {
    Plain(TcpStream),
    Tls(Box<StreamOwned<ClientConnection, TcpStream>>),
}

impl Connection {
    /// Opens a plain TCP connection.
    pub fn connect_plain(host: &str, port: u16) -> Result<Self, FetchError> {
        tcp_connect(host, port).map(Connection::Plain)
    }

    /// Opens a TCP connection and completes a TLS handshake verifying `host`.
    pub fn connect_tls(
        host: &str,
        port: u16,
        config: Arc<ClientConfig>,
    ) -> Result<Self, FetchError> {
        let server_name = ServerName::try_from(host.to_string())
            .map_err(|e| FetchError::Tls(format!("invalid server name {:?}: {}", host, e)))?;
        let mut conn = ClientConnection::new(config, server_name)
            .map_err(|e| FetchError::Tls(e.to_string()))?;
        let mut tcp = tcp_connect(host, port)?;

        // Drive the handshake now so certificate errors surface before the request.
        while conn.is_handshaking() {
            conn.complete_io(&mut tcp)
                .map_err(|source| FetchError::Transport {
                    host: host.to_string(),
                    port,
                    source,
                })?;
        }
        tracing::debug!(
            "tls handshake with {} done ({:?})",
            host,
            conn.protocol_version()
        );

        Ok(Connection::Tls(Box::new(StreamOwned::new(conn, tcp))))
    }

    pub fn is_tls(&self) -> bool {
        matches!(self, Connection::Tls(_))
    }
}

fn tcp_connect(host: &str, port: u16) -> Result<TcpStream, FetchError> {
    tracing::debug!("connecting to {}:{}", host, port);
    TcpStream::connect((host, port)).map_err(|source| FetchError::Transport {
        host: host.to_string(),
        port,
        source,
    })
}

impl Read for Connection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Connection::Plain(s) => s.read(buf),
            Connection::Tls(s) => s.read(buf),
        }
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Connection::Plain(s) => s.write(buf),
            Connection::Tls(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Connection::Plain(s) => s.flush(),
            Connection::Tls(s) => s.flush(),
        }
    }
}
