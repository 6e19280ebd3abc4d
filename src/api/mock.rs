//! Scripted transport for tests

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use tokio::sync::oneshot;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, Method, Transport};

enum Reply {
    Ready(ApiResult<Value>),
    Gated(oneshot::Receiver<ApiResult<Value>>),
}

#[derive(Default)]
struct Inner {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<ApiRequest>>,
    on_send: RefCell<Option<Box<dyn Fn(&ApiRequest)>>>,
}

/// Transport answering from a per-route script.
///
/// Unscripted routes fail with a network error. A route's last reply is
/// reused once its queue runs down to one entry.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<Inner>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method path`
    pub fn respond(&self, method: Method, path: &str, reply: ApiResult<Value>) {
        self.push(method, path, Reply::Ready(reply));
    }

    /// Queue a reply the test releases later through the returned sender
    pub fn respond_later(
        &self,
        method: Method,
        path: &str,
    ) -> oneshot::Sender<ApiResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Reply::Gated(rx));
        tx
    }

    /// Run `hook` synchronously as each request is sent
    pub fn on_send(&self, hook: impl Fn(&ApiRequest) + 'static) {
        *self.inner.on_send.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.inner.calls.borrow().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.inner
            .calls
            .borrow()
            .iter()
            .filter(|c| c.path == path)
            .count()
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.inner
            .replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, method: Method, path: &str) -> Option<Reply> {
        let mut replies = self.inner.replies.borrow_mut();
        let queue = replies.get_mut(&(method, path.to_string()))?;
        if queue.len() > 1 {
            return queue.pop_front();
        }
        if let Some(Reply::Ready(result)) = queue.front() {
            return Some(Reply::Ready(result.clone()));
        }
        queue.pop_front()
    }
}

pub fn status(code: u16, body: Value) -> ApiResult<Value> {
    Err(ApiError::from_status(code, &body.to_string()))
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        if let Some(hook) = self.inner.on_send.borrow().as_ref() {
            hook(&request);
        }

        let method = request.method;
        let path = request.path.clone();
        self.inner.calls.borrow_mut().push(request);

        match self.next_reply(method, &path) {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".into()))),
            None => Err(ApiError::Network(format!("no route for {} {}", method, path))),
        }
    }
}
