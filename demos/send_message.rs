use std::io;

use beepsend::{ApiToken, BeepsendClient, MessageText, Recipient, SendMessage, SenderId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("BEEPSEND_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_API_TOKEN environment variable is required",
        )
    })?;
    let to = std::env::var("BEEPSEND_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_TO environment variable is required",
        )
    })?;
    let from = std::env::var("BEEPSEND_FROM").unwrap_or_else(|_| "Beepsend".to_owned());
    let message = std::env::var("BEEPSEND_MESSAGE")
        .unwrap_or_else(|_| "Hello from the beepsend demo.".to_owned());

    let client = BeepsendClient::new(ApiToken::new(token)?);
    let request = SendMessage::new(
        Recipient::new(to)?,
        SenderId::new(from)?,
        MessageText::new(message)?,
    );

    let response = client.message().send(request).await?;
    println!("ids: {}, to: {}", response["id"], response["to"]);

    Ok(())
}
