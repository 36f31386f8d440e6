//! `host[:port]` splitting.

use crate::error::ParseError;

/// Splits a host-spec on its first `:` into host and decimal port.
///
/// Without a colon the whole spec is the host and `default_port` applies.
pub fn split_host_port(host_spec: &str, default_port: u16) -> Result<(&str, u16), ParseError> {
    match host_spec.split_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| ParseError::InvalidPort(port.to_string()))?;
            Ok((host, port))
        }
        None => Ok((host_spec, default_port)),
    }
}
