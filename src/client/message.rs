use serde_json::Value;

use super::BeepsendError;
use super::dispatcher::Dispatcher;
use crate::connector::{Method, Params};
use crate::domain::{
    BatchId, BinaryMessage, ConnectionId, ConversationId, CostEstimate, GroupCostEstimate,
    LookupFilter, MessageId, Page, SendMessage, Sendout,
};
use crate::transport::{
    MessageAction, action_path, encode_binary_params, encode_cost_estimate_params,
    encode_group_cost_estimate_params, encode_lookup_filter, encode_page_params,
    encode_send_params, encode_sendout_params, two_way_batch_path,
};

/// Message resource: sending, sendouts, lookups, cost estimates and conversations.
///
/// Every method returns the decoded JSON body exactly as Beepsend sent it.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Message<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Send a text message. `POST /send/{connection}`.
    pub async fn send(&self, request: SendMessage) -> Result<Value, BeepsendError> {
        let path = connection_path(MessageAction::Send, request.options.connection.as_ref());
        self.dispatcher
            .execute(&path, Method::Post, encode_send_params(&request))
            .await
    }

    /// Send a binary message. `POST /send/{connection}` with `message_type=binary`.
    pub async fn binary(&self, request: BinaryMessage) -> Result<Value, BeepsendError> {
        let path = connection_path(MessageAction::Send, request.options.connection.as_ref());
        self.dispatcher
            .execute(&path, Method::Post, encode_binary_params(&request))
            .await
    }

    /// Send to contact groups. `POST /sendouts/{connection}`.
    ///
    /// Same call as [`Message::sendouts`]; build the request with [`Sendout::to_groups`]
    /// to leave recipients out.
    pub async fn group(&self, request: Sendout) -> Result<Value, BeepsendError> {
        self.sendouts(request).await
    }

    /// Send to contact groups and explicit recipients. `POST /sendouts/{connection}`.
    pub async fn sendouts(&self, request: Sendout) -> Result<Value, BeepsendError> {
        let path = connection_path(MessageAction::Sendouts, request.connection());
        self.dispatcher
            .execute(&path, Method::Post, encode_sendout_params(&request))
            .await
    }

    /// Details of one sent message. `GET /sms/{id}`.
    pub async fn lookup(&self, id: MessageId) -> Result<Value, BeepsendError> {
        let path = action_path(MessageAction::Sms.template(), Some(id.as_str()));
        self.dispatcher
            .execute(&path, Method::Get, Params::new())
            .await
    }

    /// Details of several sent messages. `GET /sms/`.
    pub async fn multiple_lookup(&self, filter: LookupFilter) -> Result<Value, BeepsendError> {
        self.dispatcher
            .execute(
                MessageAction::Sms.template(),
                Method::Get,
                encode_lookup_filter(&filter),
            )
            .await
    }

    /// List batches (sendouts). `GET /sendouts/`.
    pub async fn batches(&self) -> Result<Value, BeepsendError> {
        self.dispatcher
            .execute(MessageAction::Sendouts.template(), Method::Get, Params::new())
            .await
    }

    /// Sent and received messages of a two-way batch. `GET /batches/{id}/messages/`.
    pub async fn two_way_batch(
        &self,
        batch_id: BatchId,
        page: Page,
    ) -> Result<Value, BeepsendError> {
        let path = two_way_batch_path(batch_id.value());
        self.dispatcher
            .execute(&path, Method::Get, encode_page_params(page))
            .await
    }

    /// Estimate the cost of a message. `POST /sms/costestimate/{connection}`.
    pub async fn estimate_cost(&self, request: CostEstimate) -> Result<Value, BeepsendError> {
        let path = connection_path(MessageAction::CostEstimate, request.connection.as_ref());
        self.dispatcher
            .execute(&path, Method::Post, encode_cost_estimate_params(&request))
            .await
    }

    /// Estimate the cost of a message to contact groups. `POST /sms/costestimate/{connection}`.
    pub async fn estimate_cost_group(
        &self,
        request: GroupCostEstimate,
    ) -> Result<Value, BeepsendError> {
        let path = connection_path(MessageAction::CostEstimate, request.connection());
        self.dispatcher
            .execute(
                &path,
                Method::Post,
                encode_group_cost_estimate_params(&request),
            )
            .await
    }

    /// Latest message of each conversation. `GET /conversations/`.
    pub async fn conversations(&self) -> Result<Value, BeepsendError> {
        self.dispatcher
            .execute(
                MessageAction::Conversations.template(),
                Method::Get,
                Params::new(),
            )
            .await
    }

    /// Every message exchanged with one contact or number. `GET /conversations/{id}`.
    pub async fn full_conversation(&self, id: ConversationId) -> Result<Value, BeepsendError> {
        let path = action_path(MessageAction::Conversations.template(), Some(id.as_str()));
        self.dispatcher
            .execute(&path, Method::Get, Params::new())
            .await
    }
}

fn connection_path(action: MessageAction, connection: Option<&ConnectionId>) -> String {
    action_path(action.template(), connection.map(ConnectionId::as_str))
}
