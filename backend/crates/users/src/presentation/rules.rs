//! Request Rule Tables
//!
//! Declarative validation for every `/api/users` route. The name, email
//! and password field rules are shared with registration.

use kernel::role::UserRole;
use kernel::validation::{Check, FieldRule, Location, Rule, RuleSet, Sanitizer};
use platform::password::{MIN_PASSWORD_LENGTH, meets_complexity};

const NAME_LENGTH: Rule = Rule {
    check: Check::Length {
        min: 2,
        max: Some(50),
    },
    message: "Name must be between 2 and 50 characters",
};

const VALID_EMAIL: Rule = Rule {
    check: Check::Email,
    message: "Valid email is required",
};

const NUMERIC_ID: Rule = Rule {
    check: Check::Int {
        min: None,
        max: None,
    },
    message: "User ID must be a number",
};

pub const NAME: FieldRule = FieldRule {
    location: Location::Body,
    field: "name",
    optional: false,
    sanitizers: &[Sanitizer::Trim],
    rules: &[
        Rule {
            check: Check::NotEmpty,
            message: "Name is required",
        },
        NAME_LENGTH,
    ],
};

pub const EMAIL: FieldRule = FieldRule {
    location: Location::Body,
    field: "email",
    optional: false,
    sanitizers: &[Sanitizer::NormalizeEmail],
    rules: &[VALID_EMAIL],
};

/// Password strength (create and register)
pub const NEW_PASSWORD: FieldRule = FieldRule {
    location: Location::Body,
    field: "password",
    optional: false,
    sanitizers: &[],
    rules: &[
        Rule {
            check: Check::Length {
                min: MIN_PASSWORD_LENGTH,
                max: None,
            },
            message: "Password must be at least 6 characters long",
        },
        Rule {
            check: Check::Pattern(meets_complexity),
            message: "Password must contain at least one lowercase letter, one uppercase letter, and one number",
        },
    ],
};

const ROLE: FieldRule = FieldRule {
    location: Location::Body,
    field: "role",
    optional: true,
    sanitizers: &[],
    rules: &[Rule {
        check: Check::OneOf(UserRole::CODES),
        message: "Invalid role",
    }],
};

const PATH_ID: FieldRule = FieldRule {
    location: Location::Path,
    field: "id",
    optional: false,
    sanitizers: &[],
    rules: &[NUMERIC_ID],
};

/// `GET /api/users`
pub const LIST_USERS: &RuleSet = &[
    FieldRule {
        location: Location::Query,
        field: "page",
        optional: true,
        sanitizers: &[],
        rules: &[Rule {
            check: Check::Int {
                min: Some(1),
                max: Some(u32::MAX as i64),
            },
            message: "Page must be a positive integer",
        }],
    },
    FieldRule {
        location: Location::Query,
        field: "limit",
        optional: true,
        sanitizers: &[],
        rules: &[Rule {
            check: Check::Int {
                min: Some(1),
                max: Some(100),
            },
            message: "Limit must be between 1 and 100",
        }],
    },
    FieldRule {
        location: Location::Query,
        field: "role",
        optional: true,
        sanitizers: &[],
        rules: &[Rule {
            check: Check::OneOf(UserRole::CODES),
            message: "Invalid role filter",
        }],
    },
];

/// `GET /api/users/{id}` and `DELETE /api/users/{id}`
pub const USER_BY_ID: &RuleSet = &[PATH_ID];

/// `POST /api/users`
pub const CREATE_USER: &RuleSet = &[NAME, EMAIL, NEW_PASSWORD, ROLE];

/// `PUT /api/users/{id}`
pub const UPDATE_USER: &RuleSet = &[
    PATH_ID,
    FieldRule {
        location: Location::Body,
        field: "name",
        optional: true,
        sanitizers: &[Sanitizer::Trim],
        rules: &[NAME_LENGTH],
    },
    FieldRule {
        optional: true,
        ..EMAIL
    },
    ROLE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::{RequestInput, validate};
    use serde_json::json;

    fn body(value: serde_json::Value) -> RequestInput {
        RequestInput {
            body: value,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_user_collects_every_field() {
        let mut input = body(json!({"name": "", "email": "bad", "password": "abc"}));
        let errors = validate(CREATE_USER, &mut input).unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[2].message, "Password must be at least 6 characters long");
    }

    #[test]
    fn test_password_complexity() {
        let mut input = body(json!({"name": "Ann", "email": "a@x.com", "password": "abcdefg"}));
        let errors = validate(CREATE_USER, &mut input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Password must contain"));
    }

    #[test]
    fn test_invalid_role() {
        let mut input = body(json!({
            "name": "Ann", "email": "a@x.com", "password": "Abcdef1", "role": "root"
        }));
        let errors = validate(CREATE_USER, &mut input).unwrap_err();
        assert_eq!(errors[0].field, "role");
        assert_eq!(errors[0].message, "Invalid role");
        assert_eq!(errors[0].value, json!("root"));
    }

    #[test]
    fn test_update_fields_are_optional() {
        let mut input = body(json!({}));
        input.path.insert("id".into(), "3".into());
        assert!(validate(UPDATE_USER, &mut input).is_ok());

        let mut input = body(json!({"name": " A "}));
        input.path.insert("id".into(), "x".into());
        let errors = validate(UPDATE_USER, &mut input).unwrap_err();
        assert_eq!(errors[0].message, "User ID must be a number");
        assert_eq!(errors[1].message, "Name must be between 2 and 50 characters");
    }

    #[test]
    fn test_list_query_bounds() {
        let mut input = RequestInput::default();
        input.query.insert("page".into(), "0".into());
        input.query.insert("limit".into(), "101".into());
        input.query.insert("role".into(), "root".into());

        let errors = validate(LIST_USERS, &mut input).unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Page must be a positive integer",
                "Limit must be between 1 and 100",
                "Invalid role filter"
            ]
        );
    }

    #[test]
    fn test_page_fits_the_query_type() {
        let mut input = RequestInput::default();
        input.query.insert("page".into(), u32::MAX.to_string());
        assert!(validate(LIST_USERS, &mut input).is_ok());

        input.query.insert("page".into(), "5000000000".into());
        let errors = validate(LIST_USERS, &mut input).unwrap_err();
        assert_eq!(errors[0].field, "page");
    }
}
