//! Connector seam: the only place where the crate touches the network.
//!
//! The client never performs I/O itself. It hands a [`ConnectorRequest`] to a
//! [`Connector`] and gets an [`Envelope`] back. [`ReqwestConnector`] is the default;
//! tests and custom stacks can plug in their own implementation.

mod http;
mod params;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::domain::ApiToken;

pub use self::http::ReqwestConnector;
pub use self::params::Params;

/// Boxed error returned by connectors.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Boxed future returned by [`Connector::call`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// `true` when parameters travel in the request body rather than the query string.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound call, fully resolved by the dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorRequest<'a> {
    pub url: &'a str,
    pub method: Method,
    pub token: &'a ApiToken,
    pub params: &'a Params,
}

/// Status information about a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    pub http_code: u16,
    pub content_type: Option<String>,
}

/// Raw response as produced by a connector: status info plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub info: ResponseInfo,
    pub response: String,
}

impl Envelope {
    /// Envelope with a JSON content type.
    pub fn json(http_code: u16, response: impl Into<String>) -> Self {
        Self {
            info: ResponseInfo {
                http_code,
                content_type: Some("application/json".to_owned()),
            },
            response: response.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.info.http_code)
    }
}

/// Performs the network call for a [`ConnectorRequest`].
///
/// Implementations decide how parameters are serialized (see [`ReqwestConnector`] for the
/// wire format the Beepsend API expects) and own timeouts and connection reuse.
/// A client shared between tasks calls its connector concurrently; implementations must
/// be safe to use that way.
pub trait Connector: Send + Sync {
    fn call<'a>(
        &'a self,
        request: ConnectorRequest<'a>,
    ) -> BoxFuture<'a, Result<Envelope, BoxError>>;
}
