//! GET request serialization.

pub const USER_AGENT: &str = "SimpleWebBrowser/1.0";

/// Builds the full request: request line, `Host`, `Connection: close`,
/// `User-Agent`, then the blank line ending the header block.
pub fn build_get(host: &str, path: &str) -> String {
    let headers = [
        ("Host", host),
        ("Connection", "close"),
        ("User-Agent", USER_AGENT),
    ];

    let mut request = format!("GET {} HTTP/1.1\r\n", path);
    for (name, value) in headers {
        request.push_str(name);
        request.push_str(": ");
        request.push_str(value);
        request.push_str("\r\n");
    }
    request.push_str("\r\n");
    request
}
