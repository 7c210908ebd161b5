use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use super::{BoxError, BoxFuture, Connector, ConnectorRequest, Envelope, Method, ResponseInfo};

/// Default [`Connector`] backed by [`reqwest::Client`].
///
/// Wire format:
/// - `Authorization: Token <api token>`,
/// - GET/DELETE parameters in the query string (see [`super::Params::to_query_pairs`]),
/// - POST/PUT parameters as a JSON body, keys in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReqwestConnector {
    client: reqwest::Client,
}

impl ReqwestConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse a preconfigured [`reqwest::Client`] (timeouts, proxies, TLS settings).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Connector for ReqwestConnector {
    fn call<'a>(
        &'a self,
        request: ConnectorRequest<'a>,
    ) -> BoxFuture<'a, Result<Envelope, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.into(), request.url)
                .header(AUTHORIZATION, format!("Token {}", request.token.as_str()))
                .header(ACCEPT, "application/json");

            if request.method.has_body() {
                builder = builder.json(request.params);
            } else if !request.params.is_empty() {
                builder = builder.query(&request.params.to_query_pairs());
            }

            let response = builder.send().await?;
            let http_code = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;

            Ok(Envelope {
                info: ResponseInfo {
                    http_code,
                    content_type,
                },
                response: body,
            })
        })
    }
}
