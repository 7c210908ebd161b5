//! Recording connector used by the client tests.

use std::io;
use std::sync::{Arc, Mutex};

use super::BeepsendClient;
use crate::connector::{
    BoxError, BoxFuture, Connector, ConnectorRequest, Envelope, Method, Params,
};
use crate::domain::ApiToken;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub(crate) url: String,
    pub(crate) method: Method,
    pub(crate) token: String,
    pub(crate) params: Params,
}

#[derive(Debug)]
struct FakeConnectorState {
    calls: Vec<RecordedCall>,
    response: Result<Envelope, String>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeConnector {
    state: Arc<Mutex<FakeConnectorState>>,
}

impl FakeConnector {
    pub(crate) fn new(http_code: u16, body: impl Into<String>) -> Self {
        Self::with_response(Ok(Envelope::json(http_code, body)))
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<Envelope, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeConnectorState {
                calls: Vec::new(),
                response,
            })),
        }
    }

    pub(crate) fn last_call(&self) -> RecordedCall {
        let state = self.state.lock().unwrap();
        state.calls.last().cloned().expect("no call recorded")
    }

    pub(crate) fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Client pointed at `https://example.invalid`, API version `2`.
    pub(crate) fn client(&self) -> BeepsendClient {
        BeepsendClient::builder(ApiToken::new("abc123").unwrap())
            .base_url("https://example.invalid")
            .api_version("2")
            .connector(Arc::new(self.clone()))
            .build()
            .unwrap()
    }
}

impl Connector for FakeConnector {
    fn call<'a>(
        &'a self,
        request: ConnectorRequest<'a>,
    ) -> BoxFuture<'a, Result<Envelope, BoxError>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.calls.push(RecordedCall {
                    url: request.url.to_owned(),
                    method: request.method,
                    token: request.token.as_str().to_owned(),
                    params: request.params.clone(),
                });
                state.response.clone()
            };
            response.map_err(|message| Box::new(io::Error::other(message)) as BoxError)
        })
    }
}
