use xb_core::{ClientPortal, ExternalIdentity, VirtualStudio};

use uuid::Uuid;

/// Creates a test ExternalIdentity
pub fn create_test_identity(external_id: &str) -> ExternalIdentity {
    ExternalIdentity {
        external_id: external_id.to_string(),
        email: format!("{}@example.com", external_id),
        display_name: Some("Test Client".to_string()),
        avatar_url: Some("https://cdn.example/avatar.png".to_string()),
    }
}

/// Creates a test ClientPortal with sensible defaults
pub fn create_test_portal(user_id: Uuid, portal_type: &str) -> ClientPortal {
    ClientPortal::new(user_id, portal_type.to_string())
}

/// Creates a test VirtualStudio
pub fn create_test_studio(studio_name: &str) -> VirtualStudio {
    let mut studio = VirtualStudio::new(studio_name.to_string(), "animation".to_string());
    studio.description = Some("Test studio description".to_string());
    studio
}
