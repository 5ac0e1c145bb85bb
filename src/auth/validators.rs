//! Input Validators
//!
//! Pure predicates over registration input. Each returns a [`Validation`]
//! with a human-readable message and never panics. Handlers run these before
//! any hashing or store access, so a rejected request has no side effects.
//!
//! # Rules
//!
//! - **Email**: conservative `local@domain.tld` shape - no whitespace,
//!   exactly one `@`, at least one `.` after it with non-empty labels
//! - **Password**: 8-100 characters, at least 2 of {letter, digit, symbol}
//! - **Name**: 2-50 characters after trimming
//! - **Phone**: optional; digits and hyphens only, 10 or 11 digits

/// Symbols counted toward password complexity
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Result of a single validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validate email shape
///
/// Accepts `local@domain.tld`: non-empty local part, exactly one `@`, and a
/// domain containing at least one `.` with non-empty labels on both sides.
/// This is deliberately conservative rather than RFC-complete.
pub fn validate_email(email: &str) -> Validation {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Validation::fail("Invalid email format");
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Validation::fail("Invalid email format"),
    };

    if local.is_empty() || domain.is_empty() {
        return Validation::fail("Invalid email format");
    }

    // The domain needs a dot with non-empty labels around the last one.
    let has_tld = domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if !has_tld {
        return Validation::fail("Invalid email format");
    }

    Validation::ok()
}

/// Validate password strength
///
/// Length must be in [8, 100] and the password must contain at least two of:
/// an ASCII letter, a digit, a symbol from [`PASSWORD_SYMBOLS`]. Length is
/// counted in characters, not bytes, so multibyte passwords get the same
/// bounds as ASCII ones.
pub fn validate_password(password: &str) -> Validation {
    let length = password.chars().count();
    if length < 8 {
        return Validation::fail("Password must be at least 8 characters");
    }
    if length > 100 {
        return Validation::fail("Password must be at most 100 characters");
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    let complexity = [has_letter, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count();

    if complexity < 2 {
        return Validation::fail(
            "Password must contain at least 2 of: letters, digits, symbols",
        );
    }

    Validation::ok()
}

/// Validate display name: trimmed length in [2, 50]
pub fn validate_name(name: &str) -> Validation {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Validation::fail("Name is required");
    }
    if trimmed.chars().count() < 2 {
        return Validation::fail("Name must be at least 2 characters");
    }
    if trimmed.chars().count() > 50 {
        return Validation::fail("Name must be at most 50 characters");
    }
    Validation::ok()
}

/// Validate optional phone number
///
/// Absent or blank phone is valid. When present: digits and hyphens only,
/// with a digit-only length of 10 or 11.
pub fn validate_phone(phone: Option<&str>) -> Validation {
    let phone = match phone {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Validation::ok(),
    };

    if !phone.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Validation::fail("Phone number may only contain digits and hyphens");
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(10..=11).contains(&digits) {
        return Validation::fail("Phone number must contain 10 or 11 digits");
    }

    Validation::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("t@x.com").valid);
        assert!(validate_email("teacher.kim@school.ac.kr").valid);
        assert!(validate_email("a+b@sub.domain.org").valid);
        // Odd but accepted: only the label around the last dot must be
        // non-empty.
        assert!(validate_email("a@b..com").valid);
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email("").valid);
        assert!(!validate_email("no-at-sign").valid);
        assert!(!validate_email("two@@x.com").valid);
        assert!(!validate_email("a@b@c.com").valid);
        assert!(!validate_email("@x.com").valid);
        assert!(!validate_email("a@").valid);
        assert!(!validate_email("a@nodot").valid);
        assert!(!validate_email("a@x.").valid);
        assert!(!validate_email("a@.com").valid);
        assert!(!validate_email("a b@x.com").valid);
        assert!(!validate_email("a@x .com").valid);
    }

    #[test]
    fn test_password_too_short() {
        // Length 7 rejected regardless of character variety.
        assert!(!validate_password("a1!b2@c").valid);
        // Still 7 characters when some of them are multibyte.
        assert!(!validate_password("가나다라1!a").valid);
    }

    #[test]
    fn test_password_too_long() {
        let long = "a1".repeat(51);
        assert!(!validate_password(&long).valid);
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // 8 characters, 20 bytes: passes the minimum.
        assert!(validate_password("가나다라마바1!").valid);
        // 100 characters of mostly multibyte text: well over 100 bytes but
        // exactly at the character cap.
        let at_cap = format!("{}a1", "가".repeat(98));
        assert_eq!(at_cap.chars().count(), 100);
        assert!(validate_password(&at_cap).valid);
        let over_cap = format!("{}a1", "가".repeat(99));
        assert!(!validate_password(&over_cap).valid);
    }

    #[test]
    fn test_password_needs_two_character_classes() {
        // Length 8, letters only: rejected.
        assert!(!validate_password("abcdefgh").valid);
        // Digits only: rejected.
        assert!(!validate_password("12345678").valid);
        // Letters + digits: accepted.
        assert!(validate_password("abc12345").valid);
        // Letters + symbols: accepted.
        assert!(validate_password("abcdefg!").valid);
        // Digits + symbols: accepted.
        assert!(validate_password("1234567!").valid);
    }

    #[test]
    fn test_name_bounds() {
        assert!(!validate_name("").valid);
        assert!(!validate_name("   ").valid);
        assert!(!validate_name("K").valid);
        assert!(validate_name("Kim").valid);
        assert!(validate_name("  Kim  ").valid);
        assert!(validate_name(&"가".repeat(50)).valid);
        assert!(!validate_name(&"가".repeat(51)).valid);
    }

    #[test]
    fn test_phone_optional() {
        assert!(validate_phone(None).valid);
        assert!(validate_phone(Some("")).valid);
        assert!(validate_phone(Some("   ")).valid);
    }

    #[test]
    fn test_phone_shapes() {
        assert!(validate_phone(Some("010-1234-5678")).valid);
        assert!(validate_phone(Some("0212345678")).valid);
        assert!(!validate_phone(Some("010-1234-567")).valid); // 9 digits
        assert!(!validate_phone(Some("010-1234-56789")).valid); // 12 digits
        assert!(!validate_phone(Some("010 1234 5678")).valid);
        assert!(!validate_phone(Some("010.1234.5678")).valid);
        assert!(!validate_phone(Some("+821012345678")).valid);
    }
}
