//! In-memory transport for tests: canned replies per `METHOD path`, optional
//! holds to control completion order, and a log of what was sent.

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use super::{RawResponse, Transport};
use crate::client::{CSRF_PATH, LOGOUT_PATH};
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub csrf: bool,
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<HashMap<String, VecDeque<Result<RawResponse, ApiError>>>>,
    holds: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    calls: RefCell<Vec<Call>>,
    csrf: Cell<bool>,
}

fn key(method: &str, path: &str) -> String {
    format!("{method} {path}")
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: &str, path: &str, reply: Result<RawResponse, ApiError>) -> Self {
        self.replies
            .borrow_mut()
            .entry(key(method, path))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn reply_json(self, method: &str, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.reply(method, path, Ok(RawResponse::new(status, body.to_string())))
    }

    /// The next `method path` request will not complete until the returned
    /// sender fires (or is dropped).
    pub fn hold(&self, method: &str, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.holds.borrow_mut().insert(key(method, path), rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| key(c.method, &c.path))
            .collect()
    }

    async fn respond(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let k = key(method, path);
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
            csrf: method == "POST" && self.csrf.get(),
        });

        let hold = self.holds.borrow_mut().remove(&k);
        if let Some(rx) = hold {
            let _ = rx.await;
        }

        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&k)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no scripted reply for {k}"))));

        // Mirror the backend's cookie handling
        if let Ok(resp) = &reply {
            if resp.is_success() && k == key("GET", CSRF_PATH) {
                self.csrf.set(true);
            }
            if resp.is_success() && k == key("POST", LOGOUT_PATH) {
                self.csrf.set(false);
            }
        }
        reply
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, ApiError> {
        self.respond("GET", path, None).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        self.respond("POST", path, body).await
    }

    fn has_csrf_token(&self) -> bool {
        self.csrf.get()
    }
}
