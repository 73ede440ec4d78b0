//! HTTP transport implementation.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use super::TransportError;
use crate::errors::ZeusError;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ZeusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(ZeusError::UnknownMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

/// Request payload.
///
/// Where the payload goes depends on the method: GET sends `Params` as the
/// query string, POST and PUT send it as the body, DELETE sends nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No payload.
    #[default]
    Empty,
    /// Key/value pairs, sent as query parameters or form data.
    Params(Vec<(String, String)>),
    /// Pre-encoded JSON body.
    Json(Vec<u8>),
}

impl Payload {
    /// Returns true if there is nothing to send.
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// Returns the value of a parameter, if this is a `Params` payload.
    pub fn param(&self, key: &str) -> Option<&str> {
        match self {
            Payload::Params(params) => params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// HTTP request representation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path, resolved against the base endpoint.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request payload.
    pub payload: Payload,
}

impl HttpRequest {
    /// Creates a request with the given method and path.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            payload: Payload::Empty,
        }
    }

    /// Creates a new GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a new POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a new PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a new DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Sets the payload.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Sets a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// HTTP response representation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Parses the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// HTTP transport trait.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

fn force_https(url: &mut Url) -> Result<(), TransportError> {
    if url.scheme() != "https" {
        url.set_scheme("https")
            .map_err(|()| TransportError::InvalidUrl {
                message: format!("cannot use https for '{}'", url),
            })?;
    }
    Ok(())
}

/// Parses a configured endpoint into an `https` base URL.
///
/// A bare host gets `https://` prepended and an `http://` endpoint is
/// upgraded; an `https://` endpoint is kept as is.
///
/// # Example
///
/// ```
/// use zeus_client::transport::normalize_endpoint;
///
/// assert_eq!(normalize_endpoint("zeus.rocks").unwrap().as_str(), "https://zeus.rocks/");
/// assert_eq!(normalize_endpoint("http://zeus.rocks").unwrap().as_str(), "https://zeus.rocks/");
/// assert_eq!(normalize_endpoint("https://zeus.rocks").unwrap().as_str(), "https://zeus.rocks/");
/// ```
pub fn normalize_endpoint(endpoint: &str) -> Result<Url, TransportError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(TransportError::InvalidUrl {
            message: "endpoint cannot be empty".to_string(),
        });
    }

    let mut url = if endpoint.contains("://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("https://{}", endpoint))?
    };
    force_https(&mut url)?;
    Ok(url)
}

/// Resolves a request path against the base URL.
///
/// Uses standard URL-join semantics, then forces the `https` scheme on the
/// result so an absolute URL in `path` cannot downgrade the connection.
pub fn resolve_url(base: &Url, path: &str) -> Result<Url, TransportError> {
    let mut url = base.join(path)?;
    force_https(&mut url)?;
    Ok(url)
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransportImpl {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTransportImpl {
    /// Creates a new HTTP transport.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .https_only(true)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| TransportError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Builds the reqwest request, placing the payload according to the method.
    ///
    /// GET sends `Params` as the query string. POST and PUT send `Params` as
    /// form data and `Json` as the raw body. Any other combination drops the
    /// payload with a warning.
    pub fn build(&self, request: HttpRequest) -> Result<reqwest::Request, TransportError> {
        let url = resolve_url(&self.base_url, &request.path)?;
        let mut req_builder = self.client.request(request.method.into(), url);

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }

        req_builder = match (request.method, request.payload) {
            (HttpMethod::Get, Payload::Params(params)) => req_builder.query(&params),
            (HttpMethod::Post | HttpMethod::Put, Payload::Params(params)) => {
                req_builder.form(&params)
            }
            (HttpMethod::Post | HttpMethod::Put, Payload::Json(body)) => req_builder.body(body),
            (_, Payload::Empty) => req_builder,
            (method, _) => {
                tracing::warn!(%method, "Payload dropped: method does not carry one");
                req_builder
            }
        };

        req_builder
            .build()
            .map_err(|e| TransportError::InvalidRequest {
                message: e.without_url().to_string(),
            })
    }
}

// reqwest errors print the full URL, which carries the account token.
fn map_send_error(e: reqwest::Error, timeout: Duration) -> TransportError {
    if e.is_timeout() {
        return TransportError::Timeout { timeout };
    }
    let connect = e.is_connect();
    let message = e.without_url().to_string();
    if connect {
        TransportError::Connection { message }
    } else {
        TransportError::InvalidResponse { message }
    }
}

#[async_trait]
impl HttpTransport for HttpTransportImpl {
    #[instrument(skip(self, request), fields(method = %request.method))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = self.build(request)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| map_send_error(e, self.timeout))?;

        // Extract response
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_send_error(e, self.timeout))?
            .to_vec();

        tracing::debug!(status, bytes = body.len(), "Response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for HttpTransportImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportImpl")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
