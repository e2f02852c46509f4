use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub email_address: String,
}
