use std::io;

use beepsend::{ApiToken, BeepsendClient, CostEstimate, MessageText, PhoneNumber, Recipient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("BEEPSEND_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_API_TOKEN environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("BEEPSEND_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BEEPSEND_TO environment variable is required",
        )
    })?;
    let message = std::env::var("BEEPSEND_MESSAGE").unwrap_or_else(|_| "How much?".to_owned());

    // Accepts local Swedish numbers as well as +46... input.
    let phone = PhoneNumber::parse(Some(phonenumber::country::Id::SE), phone_raw)?;
    let request = CostEstimate::new(Recipient::from(phone), MessageText::new(message)?);

    let client = BeepsendClient::new(ApiToken::new(token)?);
    let estimate = client.message().estimate_cost(request).await?;
    println!("total cost: {}", estimate["total_cost"]);

    Ok(())
}
