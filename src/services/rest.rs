//! Request plumbing shared by every resource service.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::errors::{ZeusError, ZeusResult};
use crate::observability::{redact, MetricsCollector, RequestTimer};
use crate::transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, Payload, TransportError,
};
use crate::types::ApiResponse;

/// Header carrying the target bucket of a send-logs or send-metrics call.
pub const BUCKET_HEADER: &str = "Bucket-Name";

/// Characters left as-is in a path segment.
const PATH_SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_SET).to_string()
}

/// Sends requests on behalf of the resource services.
///
/// Attaches authentication and custom headers, then applies the response
/// contract: HTTP 500 becomes [`ZeusError::RemoteServerError`], any other
/// status is returned with its JSON body, or without a body if it is not JSON.
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
    metrics: Arc<dyn MetricsCollector>,
    token: SecretString,
    custom_headers: Vec<(String, String)>,
}

impl RestClient {
    /// Creates a new REST client.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: Arc<dyn AuthProvider>,
        metrics: Arc<dyn MetricsCollector>,
        token: SecretString,
        custom_headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            transport,
            auth,
            metrics,
            token,
            custom_headers,
        }
    }

    /// Account token, as embedded in paths and alert bodies.
    pub(crate) fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Builds `/{prefix}/{token}` followed by the given segments.
    ///
    /// The token and every segment are percent-encoded.
    pub(crate) fn resource_path(&self, prefix: &str, segments: &[&str]) -> String {
        let mut path = format!("/{}/{}", prefix, encode_segment(self.token()));
        for segment in segments {
            path.push('/');
            path.push_str(&encode_segment(segment));
        }
        path
    }

    /// Strips the token, raw or percent-encoded, from `text`.
    fn scrub(&self, text: &str) -> String {
        let text = redact(text, self.token());
        redact(&text, &encode_segment(self.token()))
    }

    fn scrub_transport_error(&self, err: TransportError) -> TransportError {
        match err {
            TransportError::Connection { message } => TransportError::Connection {
                message: self.scrub(&message),
            },
            TransportError::InvalidResponse { message } => TransportError::InvalidResponse {
                message: self.scrub(&message),
            },
            TransportError::InvalidRequest { message } => TransportError::InvalidRequest {
                message: self.scrub(&message),
            },
            TransportError::InvalidUrl { message } => TransportError::InvalidUrl {
                message: self.scrub(&message),
            },
            timeout @ TransportError::Timeout { .. } => timeout,
        }
    }

    /// Sends a GET with query parameters.
    pub(crate) async fn get(
        &self,
        operation: &'static str,
        path: String,
        params: Vec<(String, String)>,
    ) -> ZeusResult<ApiResponse> {
        let payload = if params.is_empty() {
            Payload::Empty
        } else {
            Payload::Params(params)
        };
        self.send(operation, HttpMethod::Get, path, payload, HashMap::new())
            .await
    }

    /// Sends a POST with form-encoded fields.
    pub(crate) async fn post_form(
        &self,
        operation: &'static str,
        path: String,
        fields: Vec<(String, String)>,
        headers: HashMap<String, String>,
    ) -> ZeusResult<ApiResponse> {
        self.send(operation, HttpMethod::Post, path, Payload::Params(fields), headers)
            .await
    }

    /// Sends a POST with a JSON body.
    pub(crate) async fn post_json<T: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: String,
        body: &T,
    ) -> ZeusResult<ApiResponse> {
        let (payload, headers) = json_payload(body)?;
        self.send(operation, HttpMethod::Post, path, payload, headers)
            .await
    }

    /// Sends a PUT with a JSON body.
    pub(crate) async fn put_json<T: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: String,
        body: &T,
    ) -> ZeusResult<ApiResponse> {
        let (payload, headers) = json_payload(body)?;
        self.send(operation, HttpMethod::Put, path, payload, headers)
            .await
    }

    /// Sends a DELETE.
    pub(crate) async fn delete(
        &self,
        operation: &'static str,
        path: String,
    ) -> ZeusResult<ApiResponse> {
        self.send(operation, HttpMethod::Delete, path, Payload::Empty, HashMap::new())
            .await
    }

    /// Sends one request and applies the response contract.
    pub async fn send(
        &self,
        operation: &'static str,
        method: HttpMethod,
        path: String,
        payload: Payload,
        extra_headers: HashMap<String, String>,
    ) -> ZeusResult<ApiResponse> {
        let timer = RequestTimer::new(operation);

        let mut headers: HashMap<String, String> = self.custom_headers.iter().cloned().collect();
        self.auth.apply_auth(&mut headers);
        headers.extend(extra_headers);

        tracing::debug!(
            operation,
            %method,
            path = %self.scrub(&path),
            "Sending request"
        );

        let request = HttpRequest {
            method,
            path,
            headers,
            payload,
        };

        let result = match self.transport.send(request).await {
            Ok(response) => interpret_response(response),
            Err(err) => Err(ZeusError::from(self.scrub_transport_error(err))),
        };

        match &result {
            Ok(response) => {
                self.metrics.record_status(response.status);
                self.metrics
                    .record_request(operation, response.is_success(), timer.elapsed());
                tracing::debug!(operation, status = response.status, "Request completed");
            }
            Err(err) => {
                self.metrics.record_error(err.kind());
                self.metrics
                    .record_request(operation, false, timer.elapsed());
                tracing::warn!(
                    operation,
                    error = %err,
                    "Request failed"
                );
            }
        }

        result
    }
}

fn json_payload<T: Serialize + ?Sized>(
    body: &T,
) -> ZeusResult<(Payload, HashMap<String, String>)> {
    let encoded = serde_json::to_vec(body)?;
    let mut headers = HashMap::new();
    headers.insert(
        "content-type".to_string(),
        mime::APPLICATION_JSON.as_ref().to_string(),
    );
    Ok((Payload::Json(encoded), headers))
}

/// Maps a raw HTTP response onto the client's result type.
pub(crate) fn interpret_response(response: HttpResponse) -> ZeusResult<ApiResponse> {
    if response.status == 500 {
        let body = (!response.body.is_empty())
            .then(|| String::from_utf8_lossy(&response.body).into_owned());
        return Err(ZeusError::RemoteServerError {
            message: "the Zeus API answered HTTP 500".to_string(),
            body,
        });
    }

    let body = response.json::<Value>().ok();
    Ok(ApiResponse::new(response.status, body))
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("token", &"[REDACTED]")
            .field("auth_scheme", &self.auth.scheme())
            .finish()
    }
}
