//! Walk through the provider and consumer APIs.
//!
//! Start both services first:
//!
//! ```text
//! cargo run -p cep-server --bin cep-provider
//! cargo run -p cep-server --bin cep-consumer
//! ```

use reqwest::Client;
use serde_json::json;

const PROVIDER_URL: &str = "http://localhost:8081";
const CONSUMER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Provider health:");
    let resp = client.get(format!("{PROVIDER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. Available addresses:");
    let resp = client
        .get(format!("{PROVIDER_URL}/addresses/available"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("3. Create an address:");
    let resp = client
        .post(format!("{PROVIDER_URL}/addresses"))
        .json(&json!({
            "cep": "14808-564",
            "logradouro": "Rua Professor Doutor Edmundo Juarez",
            "bairro": "Jardim Residencial Iedda",
            "localidade": "Araraquara",
            "uf": "SP",
            "ordem": 9
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!();

    println!("4. Create without a cep (expect 400):");
    let resp = client
        .post(format!("{PROVIDER_URL}/addresses"))
        .json(&json!({ "logradouro": "Avenida Bento de Abreu" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!();

    println!("5. Suggestions for address 0:");
    let resp = client
        .get(format!("{CONSUMER_URL}/suggestions/0"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("6. Suggestions for an unknown address (expect 404):");
    let resp = client
        .get(format!("{CONSUMER_URL}/suggestions/100"))
        .send()
        .await?;
    println!("Status: {}", resp.status());

    Ok(())
}
