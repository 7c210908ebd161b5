use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::BeepsendError;
use crate::connector::{Connector, ConnectorRequest, Envelope, Method, Params};
use crate::domain::ApiToken;

/// Resolves action paths into URLs, calls the connector once and decodes the envelope.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    base_url: String,
    api_version: String,
    token: ApiToken,
    connector: Arc<dyn Connector>,
}

impl Dispatcher {
    pub(crate) fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        token: ApiToken,
        connector: Arc<dyn Connector>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            api_version: api_version.into(),
            token,
            connector,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_version(&self) -> &str {
        &self.api_version
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.api_version, path)
    }

    pub(crate) async fn execute(
        &self,
        path: &str,
        method: Method,
        params: Params,
    ) -> Result<Value, BeepsendError> {
        let url = self.url(path);
        debug!(%method, %url, params = params.len(), "dispatching Beepsend request");

        let envelope = self
            .connector
            .call(ConnectorRequest {
                url: &url,
                method,
                token: &self.token,
                params: &params,
            })
            .await
            .map_err(BeepsendError::Transport)?;

        debug!(
            %method,
            %url,
            status = envelope.info.http_code,
            "received Beepsend response"
        );
        decode_envelope(envelope)
    }
}

fn decode_envelope(envelope: Envelope) -> Result<Value, BeepsendError> {
    let status = envelope.info.http_code;
    if !envelope.is_success() {
        return Err(BeepsendError::Api {
            status,
            body: envelope.response,
        });
    }

    // 204 carries no body at all.
    if status == 204 && envelope.response.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&envelope.response).map_err(BeepsendError::Decode)
}
