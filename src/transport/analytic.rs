use crate::connector::Params;
use crate::domain::{NetworkQuery, SummaryQuery, UnixTimestamp};

/// Path templates for the analytics resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticAction {
    Summary,
    Network,
    Batch,
}

impl AnalyticAction {
    pub fn template(self) -> &'static str {
        match self {
            Self::Summary => "/analytics/summary/",
            Self::Network => "/analytics/network/",
            Self::Batch => "/analytics/batches/",
        }
    }
}

pub fn encode_summary_params(query: &SummaryQuery) -> Params {
    let mut params = Params::new();
    push_date_range(&mut params, query.from_date, query.to_date);
    params
}

pub fn encode_network_params(query: &NetworkQuery) -> Params {
    let mut params = Params::new();
    push_date_range(&mut params, query.from_date, query.to_date);
    params.insert_opt("MCC", query.mcc.as_deref());
    params.insert_opt("MNC", query.mnc.as_deref());
    params
}

fn push_date_range(
    params: &mut Params,
    from_date: Option<UnixTimestamp>,
    to_date: Option<UnixTimestamp>,
) {
    params.insert_opt("from_date", from_date.map(UnixTimestamp::value));
    params.insert_opt("to_date", to_date.map(UnixTimestamp::value));
}
