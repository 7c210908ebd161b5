use crate::connector::Params;
use crate::domain::{
    BinaryMessage, CostEstimate, DeliveryOptions, Encoding, GroupCostEstimate, GroupId,
    LookupFilter, MessageId, MessageText, Page, Recipient, SendMessage, SenderId, Sendout,
};

/// Path templates for the message resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Send,
    Sendouts,
    Sms,
    CostEstimate,
    Batches,
    Conversations,
}

impl MessageAction {
    pub fn template(self) -> &'static str {
        match self {
            Self::Send => "/send/",
            Self::Sendouts => "/sendouts/",
            Self::Sms => "/sms/",
            Self::CostEstimate => "/sms/costestimate/",
            Self::Batches => "/batches/",
            Self::Conversations => "/conversations/",
        }
    }
}

pub fn two_way_batch_path(batch_id: u64) -> String {
    format!("{}{batch_id}/messages/", MessageAction::Batches.template())
}

pub fn encode_send_params(request: &SendMessage) -> Params {
    let mut params = Params::new();
    params.insert(SenderId::FIELD, request.from.as_str());
    params.insert(Recipient::FIELD, request.to.raw());
    params.insert(MessageText::FIELD, request.message.as_str());
    params.insert(Encoding::FIELD, request.encoding.as_str());
    push_delivery_options(&mut params, &request.options);
    params
}

pub fn encode_binary_params(request: &BinaryMessage) -> Params {
    let mut params = Params::new();
    params.insert(SenderId::FIELD, request.from.as_str());
    params.insert(Recipient::FIELD, request.to.raw());
    params.insert(MessageText::FIELD, request.message.as_str());
    params.insert("message_type", "binary");
    push_delivery_options(&mut params, &request.options);
    params
}

fn push_delivery_options(params: &mut Params, options: &DeliveryOptions) {
    params.insert_opt("receive_dlr", options.receive_dlr.map(u8::from));
    params.insert_opt("dlr_url", options.dlr_url.as_deref());
    params.insert_opt("send_time", options.send_time.map(|time| time.value()));
    params.insert_opt("validity_period", options.validity_period);
    params.insert_opt("batch_label", options.batch_label.as_deref());
    params.insert_opt("usr", options.usr.as_deref());
}

/// Sendouts nest everything under `sms`; `to` is left out for group-only sendouts.
pub fn encode_sendout_params(request: &Sendout) -> Params {
    let mut sms = Params::new();
    sms.insert(SenderId::FIELD, request.from().as_str());
    sms.insert(GroupId::FIELD, group_values(request.groups()));
    if !request.to().is_empty() {
        let to = request
            .to()
            .iter()
            .map(|recipient| recipient.raw().to_owned())
            .collect::<Vec<_>>();
        sms.insert(Recipient::FIELD, to);
    }
    sms.insert("body", request.body().as_str());
    sms.insert(Encoding::FIELD, request.encoding().as_str());

    let mut params = Params::new();
    params.insert("sms", sms.into_value());
    params
}

pub fn encode_lookup_filter(filter: &LookupFilter) -> Params {
    let mut params = Params::new();
    params.insert_opt("since_id", filter.since_id.as_ref().map(MessageId::as_str));
    params.insert_opt("max_id", filter.max_id.as_ref().map(MessageId::as_str));
    params.insert_opt("count", filter.count);
    params.insert_opt(Recipient::FIELD, filter.to.as_ref().map(Recipient::raw));
    params.insert_opt(SenderId::FIELD, filter.from.as_ref().map(SenderId::as_str));
    params.insert_opt("batch_id", filter.batch_id.map(|id| id.value()));
    params
}

pub fn encode_page_params(page: Page) -> Params {
    let mut params = Params::new();
    params.insert("count", page.count);
    params.insert("offset", page.offset);
    params
}

pub fn encode_cost_estimate_params(request: &CostEstimate) -> Params {
    let mut params = Params::new();
    params.insert(Recipient::FIELD, request.to.raw());
    params.insert(MessageText::FIELD, request.message.as_str());
    params.insert(Encoding::FIELD, request.encoding.as_str());
    params
}

pub fn encode_group_cost_estimate_params(request: &GroupCostEstimate) -> Params {
    let mut params = Params::new();
    params.insert(GroupId::FIELD, group_values(request.groups()));
    params.insert(MessageText::FIELD, request.message().as_str());
    params.insert(Encoding::FIELD, request.encoding().as_str());
    params
}

fn group_values(groups: &[GroupId]) -> Vec<u64> {
    groups.iter().map(|group| group.value()).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{BatchId, ConnectionId, UnixTimestamp};

    fn send_request() -> SendMessage {
        SendMessage::new(
            Recipient::new("46736007518").unwrap(),
            SenderId::new("Beepsend").unwrap(),
            MessageText::new("Hello World! 你好世界!").unwrap(),
        )
    }

    #[test]
    fn encode_send_params_in_wire_order() {
        let params = encode_send_params(&send_request());

        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["from", "to", "message", "encoding"]
        );
        assert_eq!(
            params.into_value(),
            json!({
                "from": "Beepsend",
                "to": "46736007518",
                "message": "Hello World! 你好世界!",
                "encoding": "UTF-8"
            })
        );
    }

    #[test]
    fn encode_send_params_appends_only_set_delivery_options() {
        let mut request = send_request();
        request.options = DeliveryOptions {
            connection: Some(ConnectionId::new("42").unwrap()),
            receive_dlr: Some(false),
            send_time: Some(UnixTimestamp::new(0)),
            usr: Some(String::new()),
            ..Default::default()
        };

        let params = encode_send_params(&request);
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["from", "to", "message", "encoding", "receive_dlr", "send_time", "usr"]
        );
        assert_eq!(params.get("receive_dlr"), Some(&json!(0)));
        assert_eq!(params.get("send_time"), Some(&json!(0)));
        assert_eq!(params.get("usr"), Some(&json!("")));
        assert!(!params.contains_key("connection"));
        assert!(!params.contains_key("dlr_url"));
    }

    #[test]
    fn encode_binary_params_marks_message_type_without_encoding() {
        let request = BinaryMessage::new(
            Recipient::new("46736007518").unwrap(),
            SenderId::new("Beepsend").unwrap(),
            MessageText::new("Binaryworld").unwrap(),
        );

        let params = encode_binary_params(&request);
        assert_eq!(
            params.into_value(),
            json!({
                "from": "Beepsend",
                "to": "46736007518",
                "message": "Binaryworld",
                "message_type": "binary"
            })
        );
    }

    #[test]
    fn encode_group_sendout_omits_to() {
        let request = Sendout::to_groups(
            vec![GroupId::new(1), GroupId::new(2)],
            SenderId::new("beepsend").unwrap(),
            MessageText::new("you rock!").unwrap(),
        )
        .unwrap();

        assert_eq!(
            encode_sendout_params(&request).into_value(),
            json!({
                "sms": {
                    "from": "beepsend",
                    "groups": [1, 2],
                    "body": "you rock!",
                    "encoding": "UTF-8"
                }
            })
        );
    }

    #[test]
    fn encode_sendout_with_recipients() {
        let request = Sendout::new(
            vec![GroupId::new(1), GroupId::new(2)],
            vec![
                Recipient::new("46702123456").unwrap(),
                Recipient::new("46702789456").unwrap(),
            ],
            SenderId::new("beepsend").unwrap(),
            MessageText::new("Lets talk about honey badgers!").unwrap(),
        )
        .unwrap();

        let params = encode_sendout_params(&request);
        let sms = params.get("sms").and_then(|sms| sms.as_object()).unwrap();
        assert_eq!(
            sms.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["from", "groups", "to", "body", "encoding"]
        );
        assert_eq!(sms["to"], json!(["46702123456", "46702789456"]));
    }

    #[test]
    fn encode_lookup_filter_only_includes_set_fields() {
        assert!(encode_lookup_filter(&LookupFilter::default()).is_empty());

        let filter = LookupFilter {
            since_id: Some(MessageId::from(100_u64)),
            count: Some(0),
            batch_id: Some(BatchId::new(3)),
            ..Default::default()
        };
        assert_eq!(
            encode_lookup_filter(&filter).into_value(),
            json!({"since_id": "100", "count": 0, "batch_id": 3})
        );
    }

    #[test]
    fn encode_page_params_always_sends_both_fields() {
        assert_eq!(
            encode_page_params(Page::default()).into_value(),
            json!({"count": 200, "offset": 0})
        );
    }

    #[test]
    fn encode_cost_estimates() {
        let single = CostEstimate::new(
            Recipient::new("46736007518").unwrap(),
            MessageText::new("Hello").unwrap(),
        );
        assert_eq!(
            encode_cost_estimate_params(&single).into_value(),
            json!({"to": "46736007518", "message": "Hello", "encoding": "UTF-8"})
        );

        let group = GroupCostEstimate::new(
            vec![GroupId::new(11), GroupId::new(34)],
            MessageText::new("Hello").unwrap(),
        )
        .unwrap();
        assert_eq!(
            encode_group_cost_estimate_params(&group).into_value(),
            json!({"groups": [11, 34], "message": "Hello", "encoding": "UTF-8"})
        );
    }

    #[test]
    fn two_way_batch_path_nests_messages() {
        assert_eq!(two_way_batch_path(123), "/batches/123/messages/");
    }
}
