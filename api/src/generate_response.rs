use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[derive(Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
