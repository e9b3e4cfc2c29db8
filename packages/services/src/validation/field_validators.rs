use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").expect("phone pattern"));
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-]{3,12}$").expect("postal code pattern"));
static LICENSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{6,20}$").expect("license pattern"));

pub const MINIMUM_PATIENT_AGE: u32 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOfBirthError {
    Unparseable,
    TooYoung,
}

pub struct FieldValidator;

impl FieldValidator {
    pub fn is_email(email: &str) -> bool {
        EMAIL.is_match(email.trim())
    }

    /// 10 to 15 digits with an optional leading `+`; spaces are ignored.
    pub fn is_phone(phone: &str) -> bool {
        let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        PHONE.is_match(&compact)
    }

    pub fn is_email_or_phone(identifier: &str) -> bool {
        Self::is_email(identifier) || Self::is_phone(identifier)
    }

    pub fn is_postal_code(zip: &str) -> bool {
        POSTAL_CODE.is_match(zip.trim())
    }

    pub fn is_license_number(license: &str) -> bool {
        LICENSE.is_match(license.trim())
    }

    /// Character count of the trimmed value lies within `min..=max`.
    pub fn has_length_between(value: &str, min: usize, max: usize) -> bool {
        let length = value.trim().chars().count();
        (min..=max).contains(&length)
    }

    pub fn has_length_at_most(value: &str, max: usize) -> bool {
        Self::has_length_between(value, 0, max)
    }

    pub fn is_years_of_experience(value: &str) -> bool {
        match value.trim().parse::<f64>() {
            Ok(years) => (0.0..=60.0).contains(&years),
            Err(_) => false,
        }
    }

    pub fn is_one_of(value: &str, options: &[&str]) -> bool {
        options.contains(&value.trim())
    }

    /// The latest birth date that still satisfies `min_age` on `today`.
    ///
    /// A Feb 29 that does not exist `min_age` years back rolls over to Mar 1.
    pub fn age_cutoff(today: NaiveDate, min_age: u32) -> NaiveDate {
        let year = i32::try_from(min_age)
            .ok()
            .and_then(|years| today.year().checked_sub(years));
        year.and_then(|year| {
            NaiveDate::from_ymd_opt(year, today.month(), today.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        })
        .unwrap_or(NaiveDate::MIN)
    }

    pub fn validate_date_of_birth(
        value: &str,
        today: NaiveDate,
        min_age: u32,
    ) -> Result<NaiveDate, DateOfBirthError> {
        let date_of_birth = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| DateOfBirthError::Unparseable)?;
        if date_of_birth > Self::age_cutoff(today, min_age) {
            return Err(DateOfBirthError::TooYoung);
        }
        Ok(date_of_birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(FieldValidator::is_email("jane@example.com"));
        assert!(FieldValidator::is_email("  jane@mail.example.org "));

        for malformed in [
            "",
            "jane",
            "jane.example.com",
            "jane@example",
            "jane@localhost",
            "@example.com",
            "jane doe@example.com",
            "jane@@example.com",
        ] {
            assert!(!FieldValidator::is_email(malformed), "{malformed}");
        }
    }

    #[test]
    fn test_phone_digit_count() {
        assert!(FieldValidator::is_phone("5551234567"));
        assert!(FieldValidator::is_phone("+15551234567"));
        assert!(FieldValidator::is_phone("555 123 4567"));
        assert!(FieldValidator::is_phone("+123456789012345"));

        for digits in (1..10).chain(16..20) {
            let phone = "5".repeat(digits);
            assert!(!FieldValidator::is_phone(&phone), "{digits} digits");
            assert!(!FieldValidator::is_phone(&format!("+{phone}")), "+{digits} digits");
        }

        assert!(!FieldValidator::is_phone("555-123-4567"));
        assert!(!FieldValidator::is_phone("++5551234567"));
        assert!(!FieldValidator::is_phone("555123456a"));
    }

    #[test]
    fn test_email_or_phone() {
        assert!(FieldValidator::is_email_or_phone("provider@example.com"));
        assert!(FieldValidator::is_email_or_phone("+442071234567"));
        assert!(!FieldValidator::is_email_or_phone("provider"));
    }

    #[test]
    fn test_postal_code() {
        assert!(FieldValidator::is_postal_code("12345"));
        assert!(FieldValidator::is_postal_code("SW1A 1AA"));
        assert!(FieldValidator::is_postal_code("12345-6789"));
        assert!(!FieldValidator::is_postal_code("12"));
        assert!(!FieldValidator::is_postal_code("1234567890123"));
        assert!(!FieldValidator::is_postal_code("123#45"));
    }

    #[test]
    fn test_length_bounds_use_trimmed_characters() {
        assert!(FieldValidator::has_length_between(" Al ", 2, 50));
        assert!(!FieldValidator::has_length_between(" A ", 2, 50));
        assert!(FieldValidator::has_length_between("Zoë", 2, 3));
        assert!(!FieldValidator::has_length_at_most(&"x".repeat(51), 50));
    }

    #[test]
    fn test_license_and_experience() {
        assert!(FieldValidator::is_license_number("MD-12345"));
        assert!(FieldValidator::is_license_number("abc123"));
        assert!(!FieldValidator::is_license_number("AB12"));
        assert!(!FieldValidator::is_license_number("MD 12345"));

        assert!(FieldValidator::is_years_of_experience("0"));
        assert!(FieldValidator::is_years_of_experience("60"));
        assert!(!FieldValidator::is_years_of_experience("61"));
        assert!(!FieldValidator::is_years_of_experience("-1"));
        assert!(!FieldValidator::is_years_of_experience("ten"));
    }

    #[test]
    fn test_minimum_age() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert_eq!(
            FieldValidator::age_cutoff(today, 13),
            NaiveDate::from_ymd_opt(2013, 10, 19).unwrap()
        );
        assert!(FieldValidator::validate_date_of_birth("2013-10-19", today, 13).is_ok());
        assert_eq!(
            FieldValidator::validate_date_of_birth("2013-10-20", today, 13),
            Err(DateOfBirthError::TooYoung)
        );
        assert_eq!(
            FieldValidator::validate_date_of_birth("19/10/2000", today, 13),
            Err(DateOfBirthError::Unparseable)
        );
    }

    #[test]
    fn test_minimum_age_on_leap_day() {
        let today = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        assert_eq!(
            FieldValidator::age_cutoff(today, 13),
            NaiveDate::from_ymd_opt(2015, 3, 1).unwrap()
        );
        assert!(FieldValidator::validate_date_of_birth("2015-03-01", today, 13).is_ok());
        assert_eq!(
            FieldValidator::validate_date_of_birth("2015-03-02", today, 13),
            Err(DateOfBirthError::TooYoung)
        );

        // a leap year back keeps the day as is
        assert_eq!(
            FieldValidator::age_cutoff(today, 12),
            NaiveDate::from_ymd_opt(2016, 2, 29).unwrap()
        );
    }
}
