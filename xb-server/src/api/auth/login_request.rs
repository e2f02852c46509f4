use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Provider-issued ID token obtained by the browser during its
    /// client-side OAuth handshake
    pub id_token: String,
}
