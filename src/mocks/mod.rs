//! Mock implementations for testing.
//!
//! [`MockTransport`] records every request the client would have sent and
//! replays queued responses, so service behaviour can be checked without a
//! network.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, Payload, TransportError};

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request payload.
    pub payload: Payload,
}

impl RecordedRequest {
    /// Returns the query/form parameters as a map.
    ///
    /// Empty for JSON or empty payloads.
    pub fn params(&self) -> HashMap<String, String> {
        match &self.payload {
            Payload::Params(params) => params.iter().cloned().collect(),
            _ => HashMap::new(),
        }
    }

    /// Returns a single query/form parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.payload.param(key)
    }

    /// Decodes a JSON payload.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        match &self.payload {
            Payload::Json(body) => serde_json::from_slice(body).ok(),
            _ => None,
        }
    }

    /// Returns a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a successful JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Self {
            status: 200,
            headers,
            body,
        }
    }

    /// Creates a plain-text response.
    pub fn text(status: u16, body: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());

        Self {
            status,
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    /// Creates a response with a status and no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a response with custom status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

enum Outcome {
    Response(MockResponse),
    Failure(TransportError),
}

/// Mock HTTP transport for testing.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_response: Mutex<Option<MockResponse>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a new mock transport.
    ///
    /// Without queued responses, every request is answered with `200 {}`.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            default_response: Mutex::new(None),
        }
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        lock(&self.outcomes).push_back(Outcome::Response(response));
    }

    /// Queues a JSON response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) {
        self.queue(MockResponse::json(value));
    }

    /// Queues a transport failure, such as a timeout.
    pub fn queue_failure(&self, error: TransportError) {
        lock(&self.outcomes).push_back(Outcome::Failure(error));
    }

    /// Sets the response used once the queue is empty.
    pub fn set_default(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn next_outcome(&self) -> Outcome {
        if let Some(outcome) = lock(&self.outcomes).pop_front() {
            return outcome;
        }
        let response = lock(&self.default_response)
            .clone()
            .unwrap_or_else(|| MockResponse::json(&serde_json::json!({})));
        Outcome::Response(response)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            method: request.method,
            path: request.path,
            headers: request.headers,
            payload: request.payload,
        });

        match self.next_outcome() {
            Outcome::Response(response) => Ok(HttpResponse {
                status: response.status,
                headers: response.headers,
                body: response.body,
            }),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}
