//! Request Rule Tables
//!
//! Registration shares its field rules with user creation.

use kernel::validation::{Check, FieldRule, Location, Rule, RuleSet};
use users::rules::{EMAIL, NAME, NEW_PASSWORD};

/// `POST /api/auth/login`
pub const LOGIN: &RuleSet = &[
    EMAIL,
    FieldRule {
        location: Location::Body,
        field: "password",
        optional: false,
        sanitizers: &[],
        rules: &[Rule {
            check: Check::NotEmpty,
            message: "Password is required",
        }],
    },
];

/// `POST /api/auth/register`
pub const REGISTER: &RuleSet = &[NAME, EMAIL, NEW_PASSWORD];

/// `POST /api/auth/refresh-token`
pub const REFRESH_TOKEN: &RuleSet = &[FieldRule {
    location: Location::Body,
    field: "refreshToken",
    optional: false,
    sanitizers: &[],
    rules: &[Rule {
        check: Check::NotEmpty,
        message: "Refresh token is required",
    }],
}];
