use serde::Deserialize;

#[derive(Deserialize)]
pub struct GeneratePayload {
    pub texts: Vec<String>,
    pub question: String,
}
