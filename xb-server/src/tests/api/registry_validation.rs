use crate::api::registry::registry::validate_email_address;

#[test]
fn test_plain_addresses_pass() {
    assert!(validate_email_address("a@x.com").is_ok());
    assert!(validate_email_address("first.last@mail.example.org").is_ok());
    assert!(validate_email_address("user+tag@example.co").is_ok());
}

#[test]
fn test_missing_at_rejected() {
    assert!(validate_email_address("not-an-address").is_err());
    assert!(validate_email_address("").is_err());
}

#[test]
fn test_empty_local_part_rejected() {
    assert!(validate_email_address("@example.com").is_err());
}

#[test]
fn test_bare_domain_rejected() {
    assert!(validate_email_address("user@localhost").is_err());
    assert!(validate_email_address("user@.com").is_err());
    assert!(validate_email_address("user@example.").is_err());
}

#[test]
fn test_whitespace_rejected() {
    assert!(validate_email_address("user name@example.com").is_err());
    assert!(validate_email_address(" user@example.com").is_err());
}

#[test]
fn test_double_at_rejected() {
    assert!(validate_email_address("user@host@example.com").is_err());
}

#[test]
fn test_overlong_address_rejected() {
    let address = format!("{}@example.com", "a".repeat(250));
    assert!(validate_email_address(&address).is_err());
}
