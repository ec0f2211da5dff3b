//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers GET requests from a script of replies, one per connection, in
//! order; once the script is exhausted the last reply is repeated. Every
//! request target and its `Authorization` header are recorded.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: format!("status {status}").into_bytes(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query, e.g. `/pkgs/tool.tgz?time=1700000000`.
    pub target: String,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    pub fn query_param(&self, key: &str) -> Option<String> {
        let (_, query) = self.target.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then(|| v.to_string())
        })
    }
}

pub struct CdnServer {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl CdnServer {
    /// Absolute URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(replies: Vec<Reply>) -> CdnServer {
    assert!(!replies.is_empty(), "script at least one reply");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        let mut next = 0usize;
        for stream in listener.incoming().flatten() {
            let reply = &replies[next.min(replies.len() - 1)];
            if handle(stream, reply, &recorded) {
                next += 1;
            }
        }
    });
    CdnServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Returns false when no complete request was read.
fn handle(mut stream: TcpStream, reply: &Reply, recorded: &Mutex<Vec<RecordedRequest>>) -> bool {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return false,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf).into_owned();
    let Some(parsed) = parse_request(&request) else {
        return false;
    };
    // Recorded before the response is written.
    recorded.lock().unwrap().push(parsed);

    let reason = match reply.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        reply.status,
        reason,
        reply.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
    true
}

fn parse_request(request: &str) -> Option<RecordedRequest> {
    let mut lines = request.lines();
    let mut first = lines.next()?.split_whitespace();
    let method = first.next()?.to_string();
    let target = first.next()?.to_string();
    let authorization = lines
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("authorization"))
        .map(|(_, value)| value.trim().to_string());
    Some(RecordedRequest {
        method,
        target,
        authorization,
    })
}
