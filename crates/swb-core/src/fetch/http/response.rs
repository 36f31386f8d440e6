//! Response head parsing: status line, `Name: Value` headers, blank line.

use std::collections::HashMap;
use std::io::{self, BufRead};

use crate::error::{FetchError, ProtocolViolation};

const CRLF: &str = "\r\n";

/// Headers this client refuses, since it can only read identity bodies.
const UNSUPPORTED_HEADERS: [&str; 2] = ["transfer-encoding", "content-encoding"];

/// `HTTP/1.1 200 OK` split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub status: u16,
    pub explanation: String,
}

/// Reads one line terminated by `\r\n`, terminator included.
///
/// A bare `\n` does not end the line. Returns `None` at end of stream; a
/// final unterminated fragment is returned as-is.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    loop {
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 || buf.ends_with(b"\r\n") {
            break;
        }
    }
    if buf.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Splits a status line on its first two spaces.
pub fn parse_status_line(line: &str) -> Result<StatusLine, ProtocolViolation> {
    let trimmed = line.strip_suffix(CRLF).unwrap_or(line);
    let malformed = || ProtocolViolation::MalformedStatusLine(trimmed.to_string());

    let mut parts = trimmed.splitn(3, ' ');
    let (version, status, explanation) = match (parts.next(), parts.next(), parts.next()) {
        (Some(v), Some(s), Some(e)) => (v, s, e),
        _ => return Err(malformed()),
    };
    let status = status.parse::<u16>().map_err(|_| malformed())?;

    Ok(StatusLine {
        version: version.to_string(),
        status,
        explanation: explanation.to_string(),
    })
}

/// Splits a header line on its first colon into (lowercased name, trimmed value).
pub fn parse_header_line(line: &str) -> Result<(String, String), ProtocolViolation> {
    let trimmed = line.strip_suffix(CRLF).unwrap_or(line);
    match trimmed.split_once(':') {
        Some((name, value)) => Ok((name.to_ascii_lowercase(), value.trim().to_string())),
        None => Err(ProtocolViolation::MalformedHeader(trimmed.to_string())),
    }
}

/// Reads the status line and header block, stopping after the blank line.
///
/// Later duplicates of a header replace earlier ones.
pub fn read_head<R: BufRead>(
    reader: &mut R,
) -> Result<(StatusLine, HashMap<String, String>), FetchError> {
    let status_line = read_line(reader)?.ok_or(ProtocolViolation::UnexpectedEof)?;
    let status = parse_status_line(&status_line)?;

    let mut headers = HashMap::new();
    loop {
        let line = read_line(reader)?.ok_or(ProtocolViolation::UnexpectedEof)?;
        if line == CRLF {
            break;
        }
        let (name, value) = parse_header_line(&line)?;
        headers.insert(name, value);
    }

    Ok((status, headers))
}

/// Fails if the response uses a transfer or content coding.
pub fn reject_encodings(headers: &HashMap<String, String>) -> Result<(), ProtocolViolation> {
    for name in UNSUPPORTED_HEADERS {
        if let Some(value) = headers.get(name) {
            return Err(ProtocolViolation::UnsupportedEncoding {
                header: name.to_string(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}
