use std::io;

use beepsend::{ApiToken, BeepsendClient, ConnectionId, SummaryQuery, UnixTimestamp};

fn parse_timestamp(name: &str) -> Result<Option<UnixTimestamp>, Box<dyn std::error::Error>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(UnixTimestamp::new(value.parse()?))),
        Err(_) => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("BEEPSEND_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_API_TOKEN environment variable is required",
        )
    })?;
    let connection = std::env::var("BEEPSEND_CONNECTION")
        .ok()
        .map(ConnectionId::new)
        .transpose()?;

    let query = SummaryQuery {
        connection,
        from_date: parse_timestamp("BEEPSEND_FROM_DATE")?,
        to_date: parse_timestamp("BEEPSEND_TO_DATE")?,
    };

    let client = BeepsendClient::new(ApiToken::new(token)?);
    let summary = client.analytic().summary(query).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
