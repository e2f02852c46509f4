use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterEntryRequest {
    pub email_address: String,
}
