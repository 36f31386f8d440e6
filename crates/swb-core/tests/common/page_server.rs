//! Minimal HTTP/1.1 server for integration tests.
//!
//! Accepts one connection per canned response, captures the raw request head,
//! writes the response verbatim, then closes the socket so the client sees
//! end of body.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct PageServer {
    pub port: u16,
    requests: mpsc::Receiver<String>,
}

impl PageServer {
    /// Waits for the request head the server received.
    pub fn request(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw no request")
    }

    pub fn locator(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

/// Starts a server that answers the first request with `response`.
pub fn start(response: impl Into<Vec<u8>>) -> PageServer {
    let response = response.into();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Some(stream) = listener.incoming().flatten().next() {
            let head = handle(stream, &response);
            let _ = tx.send(head);
        }
    });
    PageServer { port, requests: rx }
}

fn handle(mut stream: TcpStream, response: &[u8]) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let head = read_head(&mut stream);
    let _ = stream.write_all(response);
    let _ = stream.flush();
    head
}

/// Reads until the blank line ending the request head (or timeout/EOF).
fn read_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
