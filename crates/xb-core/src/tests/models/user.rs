use crate::{ExternalIdentity, User};

fn identity() -> ExternalIdentity {
    ExternalIdentity {
        external_id: "google-oauth2|1001".to_string(),
        email: "client@xibalba.example".to_string(),
        display_name: Some("Test Client".to_string()),
        avatar_url: Some("https://cdn.example/avatar.png".to_string()),
    }
}

#[test]
fn test_user_from_identity_copies_profile() {
    let user = User::from_identity(&identity());

    assert_eq!(user.external_id, "google-oauth2|1001");
    assert_eq!(user.email, "client@xibalba.example");
    assert_eq!(user.display_name.as_deref(), Some("Test Client"));
    assert_eq!(user.created_at, user.last_login_at);
}

#[test]
fn test_projection_is_the_session_shape() {
    let user = User::from_identity(&identity());
    let projection = user.projection();

    assert_eq!(projection.external_id, user.external_id);
    assert_eq!(projection.email, user.email);
    assert_eq!(projection.display_name, user.display_name);
}
