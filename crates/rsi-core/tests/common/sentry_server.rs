//! Minimal HTTP/1.1 server standing in for the Sentry API in integration tests.
//!
//! Records every request (method, path, headers, body) and answers with a
//! status line and body chosen by the test. One request per connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Protocol from the request line, e.g. "HTTP/1.1".
    pub version: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status line (without the `HTTP/1.1 ` prefix) and body to send back.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: String,
    pub body: String,
    /// Sent as a `Location` header when set.
    pub location: Option<String>,
}

impl Reply {
    pub fn new(status: &str, body: &str) -> Self {
        Self {
            status: status.to_string(),
            body: body.to_string(),
            location: None,
        }
    }

    pub fn redirect(status: &str, location: &str) -> Self {
        Self {
            location: Some(location.to_string()),
            ..Self::new(status, "")
        }
    }
}

pub struct SentryServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl SentryServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server that answers every request with `200 OK`.
pub fn start() -> SentryServer {
    start_with(|_| Reply::new("200 OK", r#"{"status":"resolved"}"#))
}

/// Starts a server in a background thread; `reply` picks the response per request.
/// The server runs until the process exits.
pub fn start_with<F>(reply: F) -> SentryServer
where
    F: Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let reply = Arc::new(reply);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &recorded, reply.as_ref());
        }
    });
    SentryServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle<F>(mut stream: TcpStream, recorded: &Mutex<Vec<RecordedRequest>>, reply: &F)
where
    F: Fn(&RecordedRequest) -> Reply,
{
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let Reply {
        status,
        body,
        location,
    } = reply(&request);
    recorded.lock().unwrap().push(request);
    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        location,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = std::str::from_utf8(&data[..header_end]).ok()?.to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let version = request_line.next().unwrap_or("").to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    while data.len() < header_end + content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    let end = (header_end + content_length).min(data.len());
    let body = String::from_utf8_lossy(&data[header_end..end]).into_owned();
    Some(RecordedRequest {
        method,
        path,
        version,
        headers,
        body,
    })
}
