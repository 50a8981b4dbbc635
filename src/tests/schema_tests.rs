use crate::core::errors::AionError;
use crate::core::schemas::CreateUserInput;

fn input(email: &str, name: &str) -> CreateUserInput {
    CreateUserInput {
        email: email.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_parse_valid_input() {
    let new_user = input("test@example.com", "John Doe").parse().unwrap();
    assert_eq!(new_user.email, "test@example.com");
    assert_eq!(new_user.name, "John Doe");
}

#[test]
fn test_parse_rejects_invalid_email() {
    for email in ["invalid", "no-at.com", "spaces in@mail.com", "a@b", ""] {
        let result = input(email, "John Doe").parse();
        match result {
            Err(AionError::InvalidInput(fields)) => {
                assert_eq!(fields[0].field, "email", "email `{}` should be rejected", email);
            }
            other => panic!("email `{}` should be rejected, got {:?}", email, other),
        }
    }
}

#[test]
fn test_parse_name_length_bounds() {
    assert!(input("a@b.com", "Jo").parse().is_ok());
    assert!(input("a@b.com", &"x".repeat(100)).parse().is_ok());
    assert!(input("a@b.com", "x").parse().is_err());
    assert!(input("a@b.com", &"x".repeat(101)).parse().is_err());
}

#[test]
fn test_parse_reports_all_violated_fields() {
    let result = input("invalid", "x").parse();
    match result {
        Err(AionError::InvalidInput(fields)) => {
            let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
            assert_eq!(names, vec!["email", "name"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_parse_is_idempotent() {
    let valid = input("a@b.com", "John");
    assert_eq!(valid.parse().unwrap(), valid.parse().unwrap());

    let invalid = input("invalid", "John");
    assert!(invalid.parse().is_err());
    assert!(invalid.parse().is_err());
}
