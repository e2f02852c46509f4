use crate::{EmailRecord, EmailStatus};

#[test]
fn test_floater_has_no_claimant() {
    let record = EmailRecord::floater("ghost@xibalba.example".to_string());

    assert_eq!(record.status, EmailStatus::Floater);
    assert!(record.is_floater());
    assert!(record.claimed_by.is_none());
    assert!(record.claimed_at.is_none());
    assert!(record.verification_token.is_none());
    assert!(record.verification_expires.is_none());
}

#[test]
fn test_floater_timestamps_match_at_creation() {
    let record = EmailRecord::floater("ghost@xibalba.example".to_string());

    assert_eq!(record.created_at, record.updated_at);
}
