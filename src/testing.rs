//! Scripted transport and virtual clock for exercising checks without network
//! access or real waiting.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use crate::clock::Clock;
use crate::error::Result;
use crate::transport::{Response, Transport};

#[derive(Default)]
pub struct VirtualClock {
    now: Cell<Duration>,
    sleeps: RefCell<Vec<Duration>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Clock for VirtualClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        self.now.set(self.now.get() + duration);
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    pub api_key: String,
    pub at: Duration,
}

/// Replays canned responses in order and records each request with the
/// virtual time it was issued at.
pub struct ScriptedTransport<'c> {
    clock: &'c VirtualClock,
    responses: RefCell<VecDeque<Response>>,
    requests: RefCell<Vec<Request>>,
}

impl<'c> ScriptedTransport<'c> {
    pub fn new(clock: &'c VirtualClock, responses: Vec<Response>) -> Self {
        Self {
            clock,
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport<'_> {
    fn get(&self, url: &str, api_key: &str) -> Result<Response> {
        self.requests.borrow_mut().push(Request {
            url: url.to_string(),
            api_key: api_key.to_string(),
            at: self.clock.now(),
        });
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {url}"));
        Ok(response)
    }
}
