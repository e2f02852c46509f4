use crate::{ClaimOutcome, EmailStatus, VerificationOutcome};

use std::str::FromStr;

#[test]
fn test_email_status_as_str() {
    assert_eq!(EmailStatus::Floater.as_str(), "floater");
    assert_eq!(EmailStatus::Claimed.as_str(), "claimed");
    assert_eq!(EmailStatus::Verified.as_str(), "verified");
    assert_eq!(EmailStatus::Suspended.as_str(), "suspended");
}

#[test]
fn test_email_status_from_str() {
    assert_eq!(
        EmailStatus::from_str("floater").unwrap(),
        EmailStatus::Floater
    );
    assert_eq!(
        EmailStatus::from_str("claimed").unwrap(),
        EmailStatus::Claimed
    );
    assert_eq!(
        EmailStatus::from_str("verified").unwrap(),
        EmailStatus::Verified
    );
    assert_eq!(
        EmailStatus::from_str("suspended").unwrap(),
        EmailStatus::Suspended
    );
    assert!(EmailStatus::from_str("pending").is_err());
}

#[test]
fn test_email_status_default_is_floater() {
    assert_eq!(EmailStatus::default(), EmailStatus::Floater);
}

#[test]
fn test_only_floater_is_claimable() {
    assert!(EmailStatus::Floater.is_claimable());
    assert!(!EmailStatus::Claimed.is_claimable());
    assert!(!EmailStatus::Verified.is_claimable());
    assert!(!EmailStatus::Suspended.is_claimable());
}

#[test]
fn test_terminal_states() {
    assert!(!EmailStatus::Floater.is_terminal());
    assert!(!EmailStatus::Claimed.is_terminal());
    assert!(EmailStatus::Verified.is_terminal());
    assert!(EmailStatus::Suspended.is_terminal());
}

#[test]
fn test_claim_outcome_wire_strings() {
    assert_eq!(ClaimOutcome::Claimed.as_str(), "claimed");
    assert_eq!(ClaimOutcome::AlreadyClaimed.as_str(), "already_claimed");
    assert_eq!(ClaimOutcome::NotFound.as_str(), "not_found");
    assert!(ClaimOutcome::Claimed.succeeded());
    assert!(!ClaimOutcome::AlreadyClaimed.succeeded());
}

#[test]
fn test_verification_outcome_wire_strings() {
    assert_eq!(VerificationOutcome::Verified.as_str(), "verified");
    assert_eq!(VerificationOutcome::Expired.as_str(), "expired");
    assert_eq!(VerificationOutcome::TokenMismatch.as_str(), "token_mismatch");
    assert!(VerificationOutcome::Verified.succeeded());
    assert!(!VerificationOutcome::Expired.succeeded());
}
