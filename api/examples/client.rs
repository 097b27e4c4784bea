use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = "http://127.0.0.1:8000";

    println!("Testing /generate");

    let payload = json!({
        "texts": ["The sky is blue.", "Grass is green."],
        "question": "What color is the sky?"
    });

    let response = client
        .post(format!("{}/generate", base_url))
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    println!("Status: {}", response.status());
    let body: serde_json::Value = response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&body)?);

    println!("\nTesting missing key");

    let bad_payload = json!({ "question": "What color is the sky?" });
    let response = client
        .post(format!("{}/generate", base_url))
        .json(&bad_payload)
        .send()
        .await?;

    println!("Status: {}", response.status());
    let body: serde_json::Value = response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
