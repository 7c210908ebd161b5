use crate::domain::validation::ValidationError;
use crate::domain::value::{
    BatchId, ConnectionId, Encoding, GroupId, MessageId, MessageText, Recipient, SenderId,
    UnixTimestamp,
};

/// Default page size for two-way batch listings.
pub const TWO_WAY_BATCH_DEFAULT_COUNT: u32 = 200;

/// Optional delivery settings shared by text and binary sends.
///
/// Every `None` field is left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryOptions {
    /// Send through a specific connection instead of the token's default one.
    pub connection: Option<ConnectionId>,
    pub receive_dlr: Option<bool>,
    pub dlr_url: Option<String>,
    /// Schedule the message instead of sending it immediately.
    pub send_time: Option<UnixTimestamp>,
    /// Validity period in seconds.
    pub validity_period: Option<u32>,
    pub batch_label: Option<String>,
    /// Free-form reference echoed back in delivery reports.
    pub usr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub to: Recipient,
    pub from: SenderId,
    pub message: MessageText,
    pub encoding: Encoding,
    pub options: DeliveryOptions,
}

impl SendMessage {
    /// A UTF-8 text message with no delivery options.
    pub fn new(to: Recipient, from: SenderId, message: MessageText) -> Self {
        Self {
            to,
            from,
            message,
            encoding: Encoding::default(),
            options: DeliveryOptions::default(),
        }
    }
}

/// A binary message. `message` carries the payload exactly as the API expects it
/// (hex-encoded); no `encoding` is sent for binary messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMessage {
    pub to: Recipient,
    pub from: SenderId,
    pub message: MessageText,
    pub options: DeliveryOptions,
}

impl BinaryMessage {
    pub fn new(to: Recipient, from: SenderId, message: MessageText) -> Self {
        Self {
            to,
            from,
            message,
            options: DeliveryOptions::default(),
        }
    }
}

/// A sendout to contact groups and/or explicit recipients.
///
/// Invariant: at least one group or recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sendout {
    groups: Vec<GroupId>,
    to: Vec<Recipient>,
    from: SenderId,
    body: MessageText,
    encoding: Encoding,
    connection: Option<ConnectionId>,
}

impl Sendout {
    /// Sendout to contact groups only; `to` is left out of the request.
    pub fn to_groups(
        groups: Vec<GroupId>,
        from: SenderId,
        body: MessageText,
    ) -> Result<Self, ValidationError> {
        Self::new(groups, Vec::new(), from, body)
    }

    /// Sendout to contact groups plus explicit recipients.
    pub fn new(
        groups: Vec<GroupId>,
        to: Vec<Recipient>,
        from: SenderId,
        body: MessageText,
    ) -> Result<Self, ValidationError> {
        if groups.is_empty() && to.is_empty() {
            return Err(ValidationError::NoRecipients);
        }
        Ok(Self {
            groups,
            to,
            from,
            body,
            encoding: Encoding::default(),
            connection: None,
        })
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_connection(mut self, connection: ConnectionId) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    pub fn to(&self) -> &[Recipient] {
        &self.to
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn body(&self) -> &MessageText {
        &self.body
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn connection(&self) -> Option<&ConnectionId> {
        self.connection.as_ref()
    }
}

/// Filters for listing sent messages. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupFilter {
    pub since_id: Option<MessageId>,
    pub max_id: Option<MessageId>,
    pub count: Option<u32>,
    pub to: Option<Recipient>,
    pub from: Option<SenderId>,
    pub batch_id: Option<BatchId>,
}

/// Pagination for two-way batch listings. Both fields are always sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub count: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            count: TWO_WAY_BATCH_DEFAULT_COUNT,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEstimate {
    pub to: Recipient,
    pub message: MessageText,
    pub encoding: Encoding,
    pub connection: Option<ConnectionId>,
}

impl CostEstimate {
    pub fn new(to: Recipient, message: MessageText) -> Self {
        Self {
            to,
            message,
            encoding: Encoding::default(),
            connection: None,
        }
    }
}

/// Cost estimate for a message sent to whole contact groups.
///
/// Invariant: at least one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCostEstimate {
    groups: Vec<GroupId>,
    message: MessageText,
    encoding: Encoding,
    connection: Option<ConnectionId>,
}

impl GroupCostEstimate {
    pub fn new(groups: Vec<GroupId>, message: MessageText) -> Result<Self, ValidationError> {
        if groups.is_empty() {
            return Err(ValidationError::Empty {
                field: GroupId::FIELD,
            });
        }
        Ok(Self {
            groups,
            message,
            encoding: Encoding::default(),
            connection: None,
        })
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_connection(mut self, connection: ConnectionId) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn connection(&self) -> Option<&ConnectionId> {
        self.connection.as_ref()
    }
}

/// Accumulated statistics, optionally scoped to one connection and a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryQuery {
    pub connection: Option<ConnectionId>,
    pub from_date: Option<UnixTimestamp>,
    pub to_date: Option<UnixTimestamp>,
}

/// Delivery statistics per recipient network.
///
/// `mcc`/`mnc` are passed through as given; an empty string is still sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkQuery {
    pub connection: Option<ConnectionId>,
    pub from_date: Option<UnixTimestamp>,
    pub to_date: Option<UnixTimestamp>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
}
