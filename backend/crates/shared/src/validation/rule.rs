//! Rule table vocabulary
//!
//! Rule tables are plain `const` data. A table is a slice of [`FieldRule`]s,
//! each naming where the value lives, how it is sanitized, and the ordered
//! [`Rule`]s it must pass.

/// Maximum email length (per RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Where a field is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
    Path,
}

/// Value rewrites applied before any check runs
///
/// Body sanitizers are written back, so the handler sees the sanitized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    Trim,
    /// Trim and lowercase
    NormalizeEmail,
}

impl Sanitizer {
    pub fn apply(&self, value: &str) -> String {
        match self {
            Sanitizer::Trim => value.trim().to_string(),
            Sanitizer::NormalizeEmail => value.trim().to_lowercase(),
        }
    }
}

/// A single predicate over the textual form of a value
#[derive(Debug, Clone, Copy)]
pub enum Check {
    NotEmpty,
    /// Character count within `min..=max` (`max: None` = unbounded)
    Length { min: usize, max: Option<usize> },
    Email,
    /// Base-10 integer within the optional bounds
    Int { min: Option<i64>, max: Option<i64> },
    OneOf(&'static [&'static str]),
    Pattern(fn(&str) -> bool),
}

impl Check {
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Check::NotEmpty => !value.is_empty(),
            Check::Length { min, max } => {
                let len = value.chars().count();
                len >= *min && max.is_none_or(|max| len <= max)
            }
            Check::Email => is_email(value),
            Check::Int { min, max } => match value.parse::<i64>() {
                Ok(n) => min.is_none_or(|min| n >= min) && max.is_none_or(|max| n <= max),
                Err(_) => false,
            },
            Check::OneOf(allowed) => allowed.contains(&value),
            Check::Pattern(matches) => matches(value),
        }
    }
}

/// A check paired with the message reported when it fails
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// All rules for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub location: Location,
    pub field: &'static str,
    /// Optional fields skip every rule when absent (missing or `null`)
    pub optional: bool,
    pub sanitizers: &'static [Sanitizer],
    pub rules: &'static [Rule],
}

impl FieldRule {
    /// Whether the handler expects this field as a string
    ///
    /// Purely numeric fields (only `Int` checks, no sanitizers) keep their
    /// JSON type.
    pub fn reads_text(&self) -> bool {
        !self.sanitizers.is_empty()
            || self
                .rules
                .iter()
                .any(|rule| !matches!(rule.check, Check::Int { .. }))
    }
}

/// A route's full rule table
pub type RuleSet = [FieldRule];

/// Basic email format validation
///
/// Exactly one `@`, a non-empty local part of at most 64 characters, and a
/// dotted domain made of ASCII alphanumerics and hyphens.
pub fn is_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    // Domain shouldn't start or end with dot or hyphen
    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return false;
    }

    !domain.contains("..")
}
