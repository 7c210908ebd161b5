//! Transport layer: action maps and wire-format encoding of requests.

mod analytic;
mod message;

pub use analytic::{AnalyticAction, encode_network_params, encode_summary_params};
pub use message::{
    MessageAction, encode_binary_params, encode_cost_estimate_params,
    encode_group_cost_estimate_params, encode_lookup_filter, encode_page_params,
    encode_send_params, encode_sendout_params, two_way_batch_path,
};

/// Concatenate an action template with an optional trailing identifier.
///
/// A missing identifier leaves the bare template (`/analytics/summary/`).
pub fn action_path(template: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{template}{id}"),
        None => template.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_path_appends_identifier() {
        assert_eq!(
            action_path(AnalyticAction::Summary.template(), Some("123")),
            "/analytics/summary/123"
        );
        assert_eq!(
            action_path(AnalyticAction::Summary.template(), None),
            "/analytics/summary/"
        );
        assert_eq!(
            action_path(MessageAction::Sms.template(), Some("12345")),
            "/sms/12345"
        );
    }
}
