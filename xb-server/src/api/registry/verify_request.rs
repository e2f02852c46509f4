use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub email_address: String,
    pub token: String,
}
