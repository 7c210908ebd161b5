use std::io;

use beepsend::{ApiToken, BeepsendClient, ConversationId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("BEEPSEND_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_API_TOKEN environment variable is required",
        )
    })?;
    let client = BeepsendClient::new(ApiToken::new(token)?);

    let conversations = match std::env::var("BEEPSEND_CONVERSATION_ID") {
        Ok(id) => {
            client
                .message()
                .full_conversation(ConversationId::new(id)?)
                .await?
        }
        Err(_) => client.message().conversations().await?,
    };

    for conversation in conversations.as_array().into_iter().flatten() {
        println!("{}: {}", conversation["id"], conversation["body"]);
    }

    Ok(())
}
