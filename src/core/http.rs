// File: core/http.rs
// The shared HTTP client: base-URL prefixing, JSON defaults, per-request
// timeout and normalized error shaping.

use super::config::ClientConfig;
use super::error::{ApiError, CoreError};
use super::json;
use log::{debug, warn};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client, Method, Url,
};
use serde::{de::DeserializeOwned, Serialize};
use std::str::FromStr;
use std::time::Duration;

const APP_USER_AGENT: &str = concat!("academy-registration/", env!("CARGO_PKG_VERSION"));

// --- Request options ---

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
    /// Overrides the client's configured timeout for this call.
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds every header in `headers`, replacing earlier values of the same name.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        for name in headers.keys() {
            self.headers.remove(name);
            for value in headers.get_all(name) {
                self.headers.append(name.clone(), value.clone());
            }
        }
        self
    }

    /// Same as [`RequestOptions::header`] for untyped input.
    pub fn header_str(self, name: &str, value: &str) -> Result<Self, CoreError> {
        let name = HeaderName::from_str(name)
            .map_err(|e| CoreError::InvalidHeader(format!("invalid header name ({}): {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| CoreError::InvalidHeader(format!("invalid header value for {}: {}", name, e)))?;
        Ok(self.header(name, value))
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// `Content-Type: application/json`, then the caller's headers on top.
fn merge_headers(caller: HeaderMap) -> HeaderMap {
    let mut defaults = HeaderMap::new();
    defaults.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    RequestOptions {
        headers: defaults,
        ..RequestOptions::default()
    }
    .headers(caller)
    .headers
}

/// `base_url` followed by `path`, collapsing a doubled `/` at the seam.
fn join_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base_url, &path[1..])
    } else {
        format!("{}{}", base_url, path)
    }
}

// --- Client ---

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(APP_USER_AGENT),
        );

        // No client-wide timeout: it is applied per request in `request`.
        let client = Client::builder()
            .default_headers(headers)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one request to `{base_url}{path}` and decodes the 2xx body into `T`.
    ///
    /// Failures:
    /// - timeout: `CoreError::Api` with [`ApiError::timeout`],
    /// - non-2xx status: `CoreError::Api` built by [`ApiError::from_response`],
    /// - anything the transport raises: `CoreError::Network`, untouched.
    ///
    /// The timer covers sending and reading the body. When it fires the
    /// in-flight exchange is dropped, which aborts the connection.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, CoreError> {
        let url = Url::parse(&join_url(self.config.base_url(), path))?;
        let RequestOptions {
            method,
            headers,
            body,
            timeout,
        } = options;
        let timeout = timeout.unwrap_or_else(|| self.config.timeout());

        debug!("Sending {} {} (timeout {:?})", method, url, timeout);

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .headers(merge_headers(headers));
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let text = response.text().await?;
            Ok::<_, CoreError>((status, content_type, text))
        };

        let (status, content_type, text) = match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("{} {} timed out after {:?}", method, url, timeout);
                return Err(ApiError::timeout().into());
            }
        };

        let body = json::decode_body(content_type.as_deref(), text)?;

        if !status.is_success() {
            warn!("{} {} returned non-success status: {}", method, url, status);
            return Err(ApiError::from_response(status.as_u16(), body).into());
        }

        debug!("{} {} completed with {}", method, url, status);
        Ok(serde_json::from_value(body)?)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, CoreError> {
        self.request(path, options.method(Method::GET)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, CoreError> {
        self.request(path, options.method(Method::DELETE)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body, options).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body, options).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PATCH, path, body, options).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        self.request(path, options.method(method).body(body)).await
    }
}
