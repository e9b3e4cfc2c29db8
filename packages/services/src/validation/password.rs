use serde::Serialize;
use std::fmt;

/// Password checks used by the registration forms
#[derive(Debug, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// Password is shorter than the provider minimum
    TooShort,
    /// Password has no special character
    MissingSpecialChar,
    /// Password satisfies too few character classes
    TooWeak,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::TooShort => write!(f, "Min 8 characters"),
            PasswordValidationError::MissingSpecialChar => {
                write!(f, "At least one special character")
            }
            PasswordValidationError::TooWeak => {
                write!(f, "Min 8 chars, upper/lower, number or symbol")
            }
        }
    }
}

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_PATIENT_STRENGTH: u8 = 3;

const STRENGTH_LABELS: [&str; 6] = ["Too short", "Weak", "Fair", "Good", "Strong", "Excellent"];

/// Characters the provider special-character rule accepts.
pub const PROVIDER_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

fn has_provider_symbol(password: &str) -> bool {
    password.chars().any(|c| PROVIDER_SYMBOLS.contains(c))
}

/// Score and label for a password strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// Satisfied classes out of five
    pub score: u8,
    pub label: &'static str,
}

impl PasswordStrength {
    pub const MAX_SCORE: u8 = 5;

    pub fn of(password: &str) -> Self {
        let score = password_strength(password);
        PasswordStrength {
            score,
            label: STRENGTH_LABELS[score as usize],
        }
    }
}

/// Counts how many of these hold: length of at least 8, an uppercase letter,
/// a lowercase letter, a digit, a symbol.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        has_symbol(password),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

/// Patient registration accepts any password satisfying three classes.
pub fn validate_patient_password(password: &str) -> Result<(), PasswordValidationError> {
    if password_strength(password) < MIN_PATIENT_STRENGTH {
        return Err(PasswordValidationError::TooWeak);
    }
    Ok(())
}

/// Provider registration needs eight characters and one of [`PROVIDER_SYMBOLS`].
pub fn validate_provider_password(password: &str) -> Result<(), PasswordValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordValidationError::TooShort);
    }
    if !has_provider_symbol(password) {
        return Err(PasswordValidationError::MissingSpecialChar);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_class_adds_one() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("a"), 1);
        assert_eq!(password_strength("aA"), 2);
        assert_eq!(password_strength("aA1"), 3);
        assert_eq!(password_strength("aA1!"), 4);
        assert_eq!(password_strength("aA1!aaaa"), 5);
    }

    #[test]
    fn test_strength_is_monotonic() {
        // each step satisfies one more predicate than the last
        let ladder = ["", "abcdefgh", "Abcdefgh", "Abcdefg1", "Abcdef1!"];
        let scores: Vec<u8> = ladder.iter().map(|p| password_strength(p)).collect();
        assert!(scores.windows(2).all(|pair| pair[0] < pair[1]), "{scores:?}");

        // adding characters never lowers the score
        let mut password = String::new();
        let mut last = 0;
        for c in "xY7#longer".chars() {
            password.push(c);
            let score = password_strength(&password);
            assert!(score >= last);
            last = score;
        }
        assert_eq!(last, PasswordStrength::MAX_SCORE);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PasswordStrength::of("").label, "Too short");
        assert_eq!(PasswordStrength::of("abc").label, "Weak");
        assert_eq!(PasswordStrength::of("Abc1").label, "Good");
        assert_eq!(PasswordStrength::of("Abcdef1!").label, "Excellent");
    }

    #[test]
    fn test_patient_password() {
        assert_eq!(
            validate_patient_password("abc"),
            Err(PasswordValidationError::TooWeak)
        );
        assert!(validate_patient_password("abcdefg1").is_ok());
        assert!(validate_patient_password("Secur3pass").is_ok());
    }

    #[test]
    fn test_provider_password() {
        assert_eq!(
            validate_provider_password("Sh0rt!"),
            Err(PasswordValidationError::TooShort)
        );
        assert_eq!(
            validate_provider_password("LongEnough123"),
            Err(PasswordValidationError::MissingSpecialChar)
        );
        assert!(validate_provider_password("LongEnough123!").is_ok());
    }

    #[test]
    fn test_provider_password_symbol_set() {
        for password in ["long_enough", "long-enough", "long enough", "long~enough"] {
            assert_eq!(
                validate_provider_password(password),
                Err(PasswordValidationError::MissingSpecialChar),
                "{password}"
            );
        }
        for password in ["long\"enough", "long{enough}", "long|enough", "long<enough>"] {
            assert!(validate_provider_password(password).is_ok(), "{password}");
        }
        // the strength meter still counts any symbol
        assert_eq!(password_strength("a_"), 2);
    }

    #[test]
    fn test_messages() {
        assert_eq!(PasswordValidationError::TooShort.to_string(), "Min 8 characters");
        assert_eq!(
            PasswordValidationError::MissingSpecialChar.to_string(),
            "At least one special character"
        );
    }
}
