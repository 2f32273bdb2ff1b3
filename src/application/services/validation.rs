use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{errors::ValidationErrors, models::normalize_email};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 200;
pub const AGE_MIN: i64 = 0;
pub const AGE_MAX: i64 = 130;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern compiles"));

/// Submitted user fields, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

/// A payload that passed validation, with name trimmed and email normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Checks every constraint on `payload` and reports all violations at once.
pub fn validate_user(payload: &UserPayload) -> Result<ValidUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.add("name", "The name field is required.");
    } else {
        let chars = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            errors.add(
                "name",
                format!(
                    "The name field must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters."
                ),
            );
        }
    }

    let email = payload.email.as_deref().map(str::trim).unwrap_or_default();
    if email.is_empty() {
        errors.add("email", "The email field is required.");
    } else {
        if email.chars().count() > EMAIL_MAX_CHARS {
            errors.add(
                "email",
                format!("The email field must be {EMAIL_MAX_CHARS} characters or fewer."),
            );
        }
        if !EMAIL_RE.is_match(email) {
            errors.add("email", "The email field is not a valid e-mail address.");
        }
    }

    // absent age binds to zero
    let age = payload.age.unwrap_or(0);
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        errors.add(
            "age",
            format!("The field age must be between {AGE_MIN} and {AGE_MAX}."),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidUser {
        name: name.to_string(),
        email: normalize_email(email),
        // range-checked above
        age: age as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, age: i64) -> UserPayload {
        UserPayload {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            age: Some(age),
        }
    }

    #[test]
    fn accepts_and_normalizes_a_valid_payload() {
        let valid = validate_user(&payload("  Ada Lovelace ", "ADA@Example.com ", 28)).unwrap();

        assert_eq!(
            valid,
            ValidUser {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                age: 28,
            }
        );
    }

    #[test]
    fn reports_every_violated_field() {
        let errors = validate_user(&payload("", "ada@example.com", 200)).unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["age", "name"]);
        assert_eq!(
            errors.get("name").unwrap(),
            ["The name field is required.".to_string()]
        );
        assert_eq!(
            errors.get("age").unwrap(),
            ["The field age must be between 0 and 130.".to_string()]
        );
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = validate_user(&UserPayload::default()).unwrap_err();

        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("age").is_none());
    }

    #[test]
    fn name_length_is_measured_after_trimming() {
        assert!(validate_user(&payload("  A  ", "a@example.com", 1)).is_err());
        assert!(validate_user(&payload("Al", "a@example.com", 1)).is_ok());
        assert!(validate_user(&payload(&"x".repeat(100), "a@example.com", 1)).is_ok());
        assert!(validate_user(&payload(&"x".repeat(101), "a@example.com", 1)).is_err());
    }

    #[test]
    fn email_can_collect_several_messages() {
        let long_local = "a b".repeat(70);
        let errors = validate_user(&payload("Ada", &format!("{long_local}@example.com"), 1))
            .unwrap_err();

        assert_eq!(errors.get("email").unwrap().len(), 2);
    }

    #[test]
    fn email_length_limit_is_inclusive() {
        let domain = "@example.com";
        let at_limit = format!("{}{domain}", "a".repeat(EMAIL_MAX_CHARS - domain.len()));
        let over_limit = format!("{}{domain}", "a".repeat(EMAIL_MAX_CHARS + 1 - domain.len()));
        assert_eq!(at_limit.chars().count(), 200);

        assert!(validate_user(&payload("Ada", &at_limit, 1)).is_ok());
        let errors = validate_user(&payload("Ada", &over_limit, 1)).unwrap_err();
        assert_eq!(
            errors.get("email").unwrap(),
            ["The email field must be 200 characters or fewer.".to_string()]
        );
    }

    #[test]
    fn email_syntax() {
        for bad in ["plainaddress", "@example.com", "ada@", "ada lovelace@example.com", "a@b@c"] {
            assert!(
                validate_user(&payload("Ada", bad, 1)).is_err(),
                "{bad} should be rejected"
            );
        }
        assert!(validate_user(&payload("Ada", "ada@localhost", 1)).is_ok());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(validate_user(&payload("Ada", "a@example.com", 0)).is_ok());
        assert!(validate_user(&payload("Ada", "a@example.com", 130)).is_ok());
        assert!(validate_user(&payload("Ada", "a@example.com", -1)).is_err());
        assert!(validate_user(&payload("Ada", "a@example.com", 131)).is_err());
    }

    #[test]
    fn absent_age_defaults_to_zero() {
        let valid = validate_user(&UserPayload {
            age: None,
            ..payload("Ada", "a@example.com", 0)
        })
        .unwrap();

        assert_eq!(valid.age, 0);
    }
}
