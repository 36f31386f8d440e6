//! `file://` retrieval with in-band HTML error pages.

use std::fs;
use std::io;

/// Reads `path` as UTF-8 text.
///
/// Never fails: a missing file yields a 404 page naming the path, any other
/// I/O error (permissions, directory, invalid UTF-8) yields a generic error page.
pub fn read_page(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!("read {} bytes from {}", contents.len(), path);
            contents
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("file not found: {}", path);
            not_found_page(path)
        }
        Err(e) => {
            tracing::warn!("error reading {}: {}", path, e);
            error_page(&e)
        }
    }
}

fn not_found_page(path: &str) -> String {
    format!(
        "<html><body><h1>404 Not Found</h1><p>File not found: {}</p></body></html>",
        path
    )
}

fn error_page(err: &io::Error) -> String {
    format!(
        "<html><body><h1>Error</h1><p>Error reading file: {}</p></body></html>",
        err
    )
}
