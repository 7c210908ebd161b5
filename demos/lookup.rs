use std::io;

use beepsend::{ApiToken, BeepsendClient, LookupFilter, MessageId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("BEEPSEND_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_API_TOKEN environment variable is required",
        )
    })?;
    let client = BeepsendClient::new(ApiToken::new(token)?);

    let response = match std::env::var("BEEPSEND_MESSAGE_ID") {
        Ok(id) => client.message().lookup(MessageId::new(id)?).await?,
        Err(_) => {
            let filter = LookupFilter {
                count: Some(10),
                ..Default::default()
            };
            client.message().multiple_lookup(filter).await?
        }
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
