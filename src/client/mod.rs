//! Client layer: owns configuration and the connector, exposes resource façades.

mod analytic;
mod dispatcher;
#[cfg(test)]
mod fake;
mod message;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::connector::{BoxError, Connector, Method, Params, ReqwestConnector};
use crate::domain::{ApiToken, ValidationError};

pub use analytic::Analytic;
use dispatcher::Dispatcher;
pub use message::Message;

const DEFAULT_BASE_URL: &str = "https://api.beepsend.com";
const DEFAULT_API_VERSION: &str = "2";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BeepsendClient`].
///
/// Each call either succeeds or fails with exactly one of these; nothing is retried.
pub enum BeepsendError {
    /// The connector could not complete the call (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Beepsend answered with an HTTP status outside `200..=299`.
    ///
    /// `body` is the raw response body; it is not decoded.
    #[error("API error: HTTP {status}")]
    Api { status: u16, body: String },

    /// A successful response whose body is not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL parsed, but is not `http` or `https`.
    #[error("unsupported base URL scheme: {0}")]
    UnsupportedScheme(String),
}

impl BeepsendError {
    /// HTTP status of an [`BeepsendError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 4xx responses, i.e. the request itself was rejected.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..=499).contains(&status))
    }
}

#[derive(Clone)]
/// Builder for [`BeepsendClient`].
///
/// Use this to target another endpoint or API version, tune the default HTTP
/// connector, or inject a custom [`Connector`].
pub struct BeepsendClientBuilder {
    token: ApiToken,
    base_url: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    connector: Option<Arc<dyn Connector>>,
}

impl BeepsendClientBuilder {
    /// Create a builder with the default endpoint and API version.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout: None,
            user_agent: None,
            connector: None,
        }
    }

    /// Override the API base URL (default `https://api.beepsend.com`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API version path segment (default `2`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Request timeout for the default connector. Ignored with a custom connector.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `User-Agent` for the default connector. Ignored with a custom connector.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use `connector` instead of the default [`ReqwestConnector`].
    pub fn connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Build a [`BeepsendClient`].
    pub fn build(self) -> Result<BeepsendClient, BeepsendError> {
        let base_url = url::Url::parse(&self.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(BeepsendError::UnsupportedScheme(
                base_url.scheme().to_owned(),
            ));
        }
        let api_version = self.api_version.trim_matches('/');
        if api_version.is_empty() {
            return Err(ValidationError::Empty {
                field: "api_version",
            }
            .into());
        }

        let connector = match self.connector {
            Some(connector) => connector,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| BeepsendError::Transport(Box::new(err)))?;
                Arc::new(ReqwestConnector::from_client(client))
            }
        };

        Ok(BeepsendClient {
            dispatcher: Dispatcher::new(
                base_url.as_str(),
                api_version,
                self.token,
                connector,
            ),
        })
    }
}

#[derive(Clone)]
/// High-level Beepsend client.
///
/// Resources are reached through [`BeepsendClient::message`] and
/// [`BeepsendClient::analytic`]. Every call performs exactly one HTTP request and returns
/// the decoded JSON body as-is.
///
/// Clones share the connector. Sharing one client across tasks is fine as long as the
/// connector is; the default one is.
pub struct BeepsendClient {
    dispatcher: Dispatcher,
}

impl BeepsendClient {
    /// Create a client using the default endpoint and HTTP connector.
    ///
    /// For more customization, use [`BeepsendClient::builder`].
    pub fn new(token: ApiToken) -> Self {
        Self::with_connector(token, Arc::new(ReqwestConnector::new()))
    }

    /// Create a client on the default endpoint that sends through `connector`.
    pub fn with_connector(token: ApiToken, connector: Arc<dyn Connector>) -> Self {
        Self {
            dispatcher: Dispatcher::new(DEFAULT_BASE_URL, DEFAULT_API_VERSION, token, connector),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: ApiToken) -> BeepsendClientBuilder {
        BeepsendClientBuilder::new(token)
    }

    /// Message operations: sending, sendouts, lookups, cost estimates, conversations.
    pub fn message(&self) -> Message<'_> {
        Message::new(&self.dispatcher)
    }

    /// Analytics operations.
    pub fn analytic(&self) -> Analytic<'_> {
        Analytic::new(&self.dispatcher)
    }

    /// Call an arbitrary API path (relative to base URL and version).
    ///
    /// Errors:
    /// - [`BeepsendError::Transport`] when the connector fails,
    /// - [`BeepsendError::Api`] for non-2xx responses,
    /// - [`BeepsendError::Decode`] when a 2xx body is not JSON.
    pub async fn execute(
        &self,
        path: &str,
        method: Method,
        params: Params,
    ) -> Result<Value, BeepsendError> {
        self.dispatcher.execute(path, method, params).await
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    pub fn api_version(&self) -> &str {
        self.dispatcher.api_version()
    }
}
