//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::{
    BinaryMessage, CostEstimate, DeliveryOptions, GroupCostEstimate, LookupFilter,
    NetworkQuery, Page, SendMessage, Sendout, SummaryQuery, TWO_WAY_BATCH_DEFAULT_COUNT,
};
pub use validation::ValidationError;
pub use value::{
    ApiToken, BatchId, ConnectionId, ConversationId, Encoding, GroupId, MessageId, MessageText,
    PhoneNumber, Recipient, SenderId, UnixTimestamp,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_token_rejects_empty_and_trims() {
        assert!(matches!(
            ApiToken::new("   "),
            Err(ValidationError::Empty {
                field: ApiToken::FIELD
            })
        ));
        assert_eq!(ApiToken::new(" abc123 ").unwrap().as_str(), "abc123");
    }

    #[test]
    fn api_token_debug_is_redacted() {
        let token = ApiToken::new("abc123").unwrap();
        assert_eq!(format!("{token:?}"), "ApiToken(***)");
    }

    #[test]
    fn message_text_preserves_whitespace_but_rejects_blank() {
        assert!(MessageText::new(" \n ").is_err());
        assert_eq!(MessageText::new(" hi ").unwrap().as_str(), " hi ");
    }

    #[test]
    fn recipient_from_phone_number_drops_plus() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::SE), " 0736007518 ").unwrap();
        assert_eq!(pn.raw(), "0736007518");
        assert_eq!(pn.e164(), "+46736007518");

        let recipient: Recipient = pn.into();
        assert_eq!(recipient.raw(), "46736007518");
    }

    #[test]
    fn phone_number_rejects_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "not a number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            PhoneNumber::parse(None, "  "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn encoding_defaults_to_utf8() {
        assert_eq!(Encoding::default().as_str(), "UTF-8");
        assert!(Encoding::new("").is_err());
    }

    #[test]
    fn message_id_from_integer() {
        assert_eq!(MessageId::from(12345_u64).as_str(), "12345");
    }

    #[test]
    fn sendout_requires_a_group_or_recipient() {
        let err = Sendout::new(
            Vec::new(),
            Vec::new(),
            SenderId::new("beepsend").unwrap(),
            MessageText::new("hi").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::NoRecipients);

        let sendout = Sendout::new(
            Vec::new(),
            vec![Recipient::new("46702123456").unwrap()],
            SenderId::new("beepsend").unwrap(),
            MessageText::new("hi").unwrap(),
        )
        .unwrap();
        assert!(sendout.groups().is_empty());
        assert_eq!(sendout.encoding().as_str(), "UTF-8");
    }

    #[test]
    fn group_cost_estimate_requires_groups() {
        let err =
            GroupCostEstimate::new(Vec::new(), MessageText::new("hi").unwrap()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: GroupId::FIELD
            }
        );
    }

    #[test]
    fn page_defaults_match_api_defaults() {
        let page = Page::default();
        assert_eq!(page.count, TWO_WAY_BATCH_DEFAULT_COUNT);
        assert_eq!(page.offset, 0);
    }
}
