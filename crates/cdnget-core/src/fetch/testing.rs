//! Scripted in-memory transport for unit tests.

use super::transport::{Request, Transport, TransportError};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Write;

/// One scripted response.
pub(crate) enum Reply {
    Response { status: u32, body: Vec<u8> },
    Fail(String),
}

impl Reply {
    pub(crate) fn ok(body: Vec<u8>) -> Self {
        Reply::Response { status: 200, body }
    }

    pub(crate) fn status(status: u32, body: Vec<u8>) -> Self {
        Reply::Response { status, body }
    }

    pub(crate) fn fail(msg: &str) -> Self {
        Reply::Fail(msg.to_string())
    }
}

/// Answers requests from a queue of replies and records every request.
/// Panics when asked for more responses than were scripted.
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, request: &Request, body: &mut dyn Write) -> Result<u32, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {}", request.url));
        match reply {
            Reply::Response { status, body: data } => {
                body.write_all(&data).map_err(TransportError::Body)?;
                Ok(status)
            }
            Reply::Fail(msg) => Err(TransportError::Other(msg)),
        }
    }
}
