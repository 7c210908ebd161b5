//! Typed Rust client for the Beepsend messaging HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport layer that
//! maps requests onto Beepsend's wire format, a pluggable [`Connector`] doing the actual
//! HTTP call, and a small client layer orchestrating requests. Responses come back as
//! [`serde_json::Value`], exactly as Beepsend sent them.
//!
//! ```rust,no_run
//! use beepsend::{ApiToken, BeepsendClient, MessageText, Recipient, SendMessage, SenderId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), beepsend::BeepsendError> {
//!     let client = BeepsendClient::new(ApiToken::new("...")?);
//!     let request = SendMessage::new(
//!         Recipient::new("46736007518")?,
//!         SenderId::new("Beepsend")?,
//!         MessageText::new("Hello World!")?,
//!     );
//!     let response = client.message().send(request).await?;
//!     println!("{}", response["id"]);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod connector;
pub mod domain;
mod transport;

pub use client::{Analytic, BeepsendClient, BeepsendClientBuilder, BeepsendError, Message};
pub use connector::{
    BoxError, BoxFuture, Connector, ConnectorRequest, Envelope, Method, Params,
    ReqwestConnector, ResponseInfo,
};
pub use domain::{
    ApiToken, BatchId, BinaryMessage, ConnectionId, ConversationId, CostEstimate,
    DeliveryOptions, Encoding, GroupCostEstimate, GroupId, LookupFilter, MessageId,
    MessageText, NetworkQuery, Page, PhoneNumber, Recipient, SendMessage, SenderId, Sendout,
    SummaryQuery, UnixTimestamp, ValidationError,
};
