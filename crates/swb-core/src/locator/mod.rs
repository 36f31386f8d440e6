//! Locator parsing.
//!
//! Turns a raw locator string into one of four scheme-specific variants.
//! Parsing is purely structural: no percent-decoding, no normalization
//! beyond defaulting the port and the `/` path.

mod authority;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub use authority::split_host_port;

const DATA_PREFIX: &str = "data:";
const SCHEME_SEPARATOR: &str = "://";

pub const HTTP_DEFAULT_PORT: u16 = 80;
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Retrieval method tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
    File,
    Data,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::File => "file",
            Scheme::Data => "data",
        };
        f.write_str(s)
    }
}

/// A parsed resource locator. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Http {
        host: String,
        port: u16,
        path: String,
    },
    Https {
        host: String,
        port: u16,
        path: String,
    },
    File {
        path: String,
    },
    /// `payload` is everything after `data:`; the header/payload split at the
    /// first comma happens at retrieval time, so `media_and_encoding` is only
    /// set when a caller builds the variant by hand (and `payload` then holds
    /// just the escaped content).
    Data {
        media_and_encoding: Option<String>,
        payload: String,
    },
}

impl Locator {
    pub fn scheme(&self) -> Scheme {
        match self {
            Locator::Http { .. } => Scheme::Http,
            Locator::Https { .. } => Scheme::Https,
            Locator::File { .. } => Scheme::File,
            Locator::Data { .. } => Scheme::Data,
        }
    }
}

/// Parses a locator string.
///
/// # Examples
///
/// - `parse("http://example.com")` → `Http { host: "example.com", port: 80, path: "/" }`
/// - `parse("https://example.com:8443/a")` → `Https { host: "example.com", port: 8443, path: "/a" }`
/// - `parse("file:///tmp/x.html")` → `File { path: "/tmp/x.html" }`
pub fn parse(raw: &str) -> Result<Locator, ParseError> {
    if let Some(rest) = raw.strip_prefix(DATA_PREFIX) {
        return Ok(Locator::Data {
            media_and_encoding: None,
            payload: rest.to_string(),
        });
    }

    let (scheme, rest) = raw
        .split_once(SCHEME_SEPARATOR)
        .ok_or_else(|| ParseError::UnknownScheme(raw.to_string()))?;

    match scheme {
        "file" => Ok(Locator::File {
            path: rest.to_string(),
        }),
        "http" => {
            let (host, port, path) = split_network(rest, HTTP_DEFAULT_PORT)?;
            Ok(Locator::Http { host, port, path })
        }
        "https" => {
            let (host, port, path) = split_network(rest, HTTPS_DEFAULT_PORT)?;
            Ok(Locator::Https { host, port, path })
        }
        other => Err(ParseError::UnknownScheme(other.to_string())),
    }
}

/// Splits `host[:port][/path]` into its parts, defaulting path to `/`.
fn split_network(rest: &str, default_port: u16) -> Result<(String, u16, String), ParseError> {
    let (host_spec, path) = match rest.split_once('/') {
        Some((host_spec, path)) => (host_spec, path),
        None => (rest, ""),
    };
    let (host, port) = split_host_port(host_spec, default_port)?;
    Ok((host.to_string(), port, format!("/{}", path)))
}

impl FromStr for Locator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Http { host, port, path } => {
                write_network(f, Scheme::Http, host, *port, HTTP_DEFAULT_PORT, path)
            }
            Locator::Https { host, port, path } => {
                write_network(f, Scheme::Https, host, *port, HTTPS_DEFAULT_PORT, path)
            }
            Locator::File { path } => write!(f, "file://{}", path),
            Locator::Data {
                media_and_encoding: Some(header),
                payload,
            } => write!(f, "data:{},{}", header, payload),
            Locator::Data {
                media_and_encoding: None,
                payload,
            } => write!(f, "data:{}", payload),
        }
    }
}

fn write_network(
    f: &mut fmt::Formatter<'_>,
    scheme: Scheme,
    host: &str,
    port: u16,
    default_port: u16,
    path: &str,
) -> fmt::Result {
    if port == default_port {
        write!(f, "{}://{}{}", scheme, host, path)
    } else {
        write!(f, "{}://{}:{}{}", scheme, host, port, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(host: &str, port: u16, path: &str) -> Locator {
        Locator::Http {
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    #[test]
    fn http_default_port() {
        assert_eq!(
            parse("http://example.com/path").unwrap(),
            http("example.com", 80, "/path")
        );
    }

    #[test]
    fn https_default_port() {
        assert_eq!(
            parse("https://secure.example.com/secure/path").unwrap(),
            Locator::Https {
                host: "secure.example.com".into(),
                port: 443,
                path: "/secure/path".into(),
            }
        );
    }

    #[test]
    fn explicit_port_stripped_from_host() {
        assert_eq!(
            parse("http://example.com:8080/api").unwrap(),
            http("example.com", 8080, "/api")
        );
        match parse("https://localhost:8443").unwrap() {
            Locator::Https { host, port, path } => {
                assert_eq!(host, "localhost");
                assert_eq!(port, 8443);
                assert_eq!(path, "/");
            }
            other => panic!("expected Https, got {:?}", other),
        }
    }

    #[test]
    fn bare_host_gets_root_path() {
        assert_eq!(parse("http://example.com").unwrap(), http("example.com", 80, "/"));
        assert_eq!(parse("http://example.com/").unwrap(), http("example.com", 80, "/"));
    }

    #[test]
    fn path_keeps_later_slashes_and_query() {
        assert_eq!(
            parse("http://example.com/a/b/c.html?q=1").unwrap(),
            http("example.com", 80, "/a/b/c.html?q=1")
        );
    }

    #[test]
    fn file_path_is_unmodified() {
        assert_eq!(
            parse("file:///a/b.html").unwrap(),
            Locator::File {
                path: "/a/b.html".into()
            }
        );
        assert_eq!(
            parse("file://relative/x.html").unwrap(),
            Locator::File {
                path: "relative/x.html".into()
            }
        );
    }

    #[test]
    fn data_payload_is_unsplit() {
        assert_eq!(
            parse("data:text/plain,Hello%20World").unwrap(),
            Locator::Data {
                media_and_encoding: None,
                payload: "text/plain,Hello%20World".into(),
            }
        );
    }

    #[test]
    fn unknown_scheme_rejected() {
        assert_eq!(
            parse("ftp://example.com/file"),
            Err(ParseError::UnknownScheme("ftp".into()))
        );
        assert_eq!(
            parse("example.com"),
            Err(ParseError::UnknownScheme("example.com".into()))
        );
        // Case-sensitive, like the scheme table itself.
        assert!(parse("HTTP://example.com").is_err());
    }

    #[test]
    fn invalid_port_rejected() {
        assert_eq!(
            parse("http://example.com:http/"),
            Err(ParseError::InvalidPort("http".into()))
        );
        assert_eq!(
            parse("http://example.com:70000/"),
            Err(ParseError::InvalidPort("70000".into()))
        );
        assert_eq!(
            parse("http://example.com:/"),
            Err(ParseError::InvalidPort("".into()))
        );
    }

    #[test]
    fn scheme_tags() {
        assert_eq!(parse("http://a").unwrap().scheme(), Scheme::Http);
        assert_eq!(parse("https://a").unwrap().scheme(), Scheme::Https);
        assert_eq!(parse("file:///a").unwrap().scheme(), Scheme::File);
        assert_eq!(parse("data:,a").unwrap().scheme(), Scheme::Data);
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn display_reproduces_input() {
        for raw in [
            "http://example.com/",
            "http://example.com:8080/api",
            "https://example.com/x?y=z",
            "file:///tmp/page.html",
            "data:text/plain,hi",
        ] {
            let loc: Locator = raw.parse().unwrap();
            assert_eq!(loc.to_string(), raw);
        }
        // Default port is elided, bare host gains its path.
        assert_eq!(
            parse("https://example.com:443").unwrap().to_string(),
            "https://example.com/"
        );
    }
}
