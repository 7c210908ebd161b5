use serde_json::Value;

use super::BeepsendError;
use super::dispatcher::Dispatcher;
use crate::connector::{Method, Params};
use crate::domain::{BatchId, ConnectionId, NetworkQuery, SummaryQuery};
use crate::transport::{
    AnalyticAction, action_path, encode_network_params, encode_summary_params,
};

/// Analytics resource: delivery statistics.
#[derive(Clone, Copy)]
pub struct Analytic<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Analytic<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Accumulated statistics, for one connection when `query.connection` is set.
    ///
    /// `GET /analytics/summary/{connection}`
    pub async fn summary(&self, query: SummaryQuery) -> Result<Value, BeepsendError> {
        let path = action_path(
            AnalyticAction::Summary.template(),
            query.connection.as_ref().map(ConnectionId::as_str),
        );
        self.dispatcher
            .execute(&path, Method::Get, encode_summary_params(&query))
            .await
    }

    /// Delivery statistics per recipient network between two dates.
    ///
    /// `GET /analytics/network/{connection}`
    pub async fn network(&self, query: NetworkQuery) -> Result<Value, BeepsendError> {
        let path = action_path(
            AnalyticAction::Network.template(),
            query.connection.as_ref().map(ConnectionId::as_str),
        );
        self.dispatcher
            .execute(&path, Method::Get, encode_network_params(&query))
            .await
    }

    /// Delivery statistics for a whole batch. `GET /analytics/batches/{batch_id}`.
    pub async fn batch(&self, batch_id: Option<BatchId>) -> Result<Value, BeepsendError> {
        let id = batch_id.map(|id| id.value().to_string());
        let path = action_path(AnalyticAction::Batch.template(), id.as_deref());
        self.dispatcher
            .execute(&path, Method::Get, Params::new())
            .await
    }
}
