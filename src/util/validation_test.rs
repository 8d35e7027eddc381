use super::*;

#[test]
fn email_error_requires_value() {
    assert_eq!(email_error(""), Some(EMAIL_REQUIRED));
}

#[test]
fn email_error_treats_whitespace_as_a_malformed_value() {
    assert_eq!(email_error("   "), Some(INVALID_EMAIL));
    assert_eq!(email_error(" a@b.com "), Some(INVALID_EMAIL));
    assert_eq!(email_error("  padded@example.com  "), Some(INVALID_EMAIL));
}

#[test]
fn email_error_rejects_malformed_addresses() {
    for raw in ["not-an-email", "user@", "@example.com", "a b@example.com", "two@@example.com"] {
        assert_eq!(email_error(raw), Some(INVALID_EMAIL), "{raw}");
    }
}

#[test]
fn email_error_accepts_valid_addresses() {
    for raw in ["a@b.com", "first.last+tag@couchcat.dev"] {
        assert_eq!(email_error(raw), None, "{raw}");
    }
}

#[test]
fn password_error_only_checks_presence() {
    assert_eq!(password_error(""), Some(PASSWORD_REQUIRED));
    assert_eq!(password_error("x"), None);
    assert_eq!(password_error("  "), None);
}

#[test]
fn validate_credentials_returns_values_as_typed() {
    assert_eq!(
        validate_credentials("a@b.com", " pw "),
        Ok(Credentials { email: "a@b.com".to_owned(), password: " pw ".to_owned() })
    );
    assert_eq!(
        validate_credentials(" a@b.com", "pw"),
        Err(FieldErrors { email: Some(INVALID_EMAIL), password: None })
    );
}

#[test]
fn validate_credentials_reports_every_failing_field() {
    assert_eq!(
        validate_credentials("", ""),
        Err(FieldErrors { email: Some(EMAIL_REQUIRED), password: Some(PASSWORD_REQUIRED) })
    );
    assert_eq!(
        validate_credentials("nope", "pw"),
        Err(FieldErrors { email: Some(INVALID_EMAIL), password: None })
    );
    assert_eq!(
        validate_credentials("a@b.com", ""),
        Err(FieldErrors { email: None, password: Some(PASSWORD_REQUIRED) })
    );
}
