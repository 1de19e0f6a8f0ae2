//! Local checks run before any request is sent.

use std::collections::BTreeMap;

use crate::services::auth::SignUpFormData;

pub const FULL_NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const EMAIL_MISSING: &str = "Please provide an email address.";
pub const INVALID_OTP: &str = "Please enter a valid 6-digit OTP.";
pub const DOCUMENT_MISSING: &str = "Please upload your identity document.";
pub const ROLE_MISSING: &str = "Please select a role to proceed.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Fields of the sign up form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Country,
    State,
    PhoneNumber,
    Gender,
    Password,
    ConfirmPassword,
}

/// Failing fields and their message. A field absent from the map is valid.
pub type Errors = BTreeMap<Field, &'static str>;

pub fn is_valid_email(email: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

/// E.164: a `+` followed by 10 to 15 digits.
pub fn is_valid_phone_number(phone: &str) -> bool {
    match phone.strip_prefix('+') {
        Some(digits) => {
            (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

pub fn validate_sign_up(form: &SignUpFormData) -> Errors {
    let mut errors = Errors::new();

    if form.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required.");
    } else if form.full_name.chars().count() < FULL_NAME_MIN_LENGTH {
        errors.insert(Field::FullName, "Full name must be at least 3 characters.");
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required.");
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Invalid email format.");
    }

    if form.phone_number.trim().is_empty() {
        errors.insert(Field::PhoneNumber, "Phone number is required.");
    } else if !is_valid_phone_number(&form.phone_number) {
        errors.insert(
            Field::PhoneNumber,
            "Phone number must be in E.164 format, e.g., +1234567890.",
        );
    }

    if form.country.trim().is_empty() {
        errors.insert(Field::Country, "Country is required.");
    }
    if form.state.trim().is_empty() {
        errors.insert(Field::State, "State is required.");
    }
    if form.gender.trim().is_empty() {
        errors.insert(Field::Gender, "Gender is required.");
    }

    if form.password.trim().is_empty() {
        errors.insert(Field::Password, "Password is required.");
    } else if form.password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.insert(Field::Password, PASSWORD_TOO_SHORT);
    }

    if form.confirm_password.trim().is_empty() {
        errors.insert(Field::ConfirmPassword, "Confirm password is required.");
    } else if form.password != form.confirm_password {
        errors.insert(Field::ConfirmPassword, PASSWORD_MISMATCH);
    }

    errors
}

pub fn validate_sign_in(email: &str, password: &str) -> Option<&'static str> {
    if email.is_empty() || password.is_empty() {
        Some(FILL_ALL_FIELDS)
    } else {
        None
    }
}

pub fn validate_forgot_password(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_MISSING)
    } else {
        None
    }
}

pub fn validate_reset_password(new_password: &str, confirm_password: &str) -> Option<&'static str> {
    if new_password.is_empty() || confirm_password.is_empty() {
        Some(FILL_ALL_FIELDS)
    } else if new_password.chars().count() < PASSWORD_MIN_LENGTH {
        Some(PASSWORD_TOO_SHORT)
    } else if new_password != confirm_password {
        Some(PASSWORD_MISMATCH)
    } else {
        None
    }
}

pub fn validate_otp(code: &str) -> Option<&'static str> {
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(INVALID_OTP)
    }
}

pub fn validate_kyc(
    residential_address: &str,
    work_address: &str,
    has_identity_type: bool,
    has_document: bool,
) -> Option<&'static str> {
    if residential_address.trim().is_empty() || work_address.trim().is_empty() || !has_identity_type
    {
        Some(FILL_ALL_FIELDS)
    } else if !has_document {
        Some(DOCUMENT_MISSING)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignUpFormData {
        SignUpFormData {
            full_name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            country: "Nigeria".to_string(),
            state: "Lagos".to_string(),
            phone_number: "+2348012345678".to_string(),
            gender: "Female".to_string(),
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
        }
    }

    #[test]
    fn valid_sign_up() {
        assert!(validate_sign_up(&valid_form()).is_empty());
    }

    #[test]
    fn empty_sign_up_flags_every_field() {
        let errors = validate_sign_up(&SignUpFormData::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![
                Field::FullName,
                Field::Email,
                Field::Country,
                Field::State,
                Field::PhoneNumber,
                Field::Gender,
                Field::Password,
                Field::ConfirmPassword,
            ]
        );
        assert_eq!(errors[&Field::FullName], "Full name is required.");
        assert_eq!(errors[&Field::Email], "Email is required.");
        assert_eq!(errors[&Field::PhoneNumber], "Phone number is required.");
        assert_eq!(errors[&Field::Country], "Country is required.");
        assert_eq!(errors[&Field::State], "State is required.");
        assert_eq!(errors[&Field::Gender], "Gender is required.");
        assert_eq!(errors[&Field::Password], "Password is required.");
        assert_eq!(
            errors[&Field::ConfirmPassword],
            "Confirm password is required."
        );
    }

    #[test]
    fn only_failing_fields_are_reported() {
        let mut form = valid_form();
        form.full_name = "ab".to_string();
        let errors = validate_sign_up(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[&Field::FullName],
            "Full name must be at least 3 characters."
        );

        let mut form = valid_form();
        form.full_name = "   ".to_string();
        form.email = "ada@example".to_string();
        let errors = validate_sign_up(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::FullName], "Full name is required.");
        assert_eq!(errors[&Field::Email], "Invalid email format.");
    }

    #[test]
    fn phone_number() {
        assert!(is_valid_phone_number("+1234567890"));
        assert!(is_valid_phone_number("+123456789012345"));
        assert!(!is_valid_phone_number("1234567890"));
        assert!(!is_valid_phone_number("+123"));
        assert!(!is_valid_phone_number("+1234567890123456"));
        assert!(!is_valid_phone_number("+12345 67890"));

        let mut form = valid_form();
        form.phone_number = "1234567890".to_string();
        assert_eq!(
            validate_sign_up(&form)[&Field::PhoneNumber],
            "Phone number must be in E.164 format, e.g., +1234567890."
        );
    }

    #[test]
    fn password_confirmation() {
        let mut form = valid_form();
        form.password = "abcdef".to_string();
        form.confirm_password = "abcdef".to_string();
        assert!(!validate_sign_up(&form).contains_key(&Field::ConfirmPassword));

        form.confirm_password = "abcdeg".to_string();
        assert_eq!(
            validate_sign_up(&form)[&Field::ConfirmPassword],
            "Passwords do not match."
        );

        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        let errors = validate_sign_up(&form);
        assert_eq!(errors[&Field::Password], PASSWORD_TOO_SHORT);
        assert!(!errors.contains_key(&Field::ConfirmPassword));
    }

    #[test]
    fn single_message_forms() {
        assert_eq!(validate_sign_in("", "secret"), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_sign_in("a@b.co", ""), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_sign_in("a@b.co", "secret"), None);

        assert_eq!(validate_forgot_password(""), Some(EMAIL_MISSING));
        assert_eq!(validate_forgot_password("a@b.co"), None);

        assert_eq!(validate_reset_password("", "abcdef"), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_reset_password("abc", "abc"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(
            validate_reset_password("abcdef", "abcdeg"),
            Some(PASSWORD_MISMATCH)
        );
        assert_eq!(validate_reset_password("abcdef", "abcdef"), None);

        assert_eq!(validate_otp("12345"), Some(INVALID_OTP));
        assert_eq!(validate_otp("12345a"), Some(INVALID_OTP));
        assert_eq!(validate_otp("123456"), None);

        assert_eq!(validate_kyc("", "work", true, true), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_kyc("home", "work", false, true), Some(FILL_ALL_FIELDS));
        assert_eq!(validate_kyc("home", "work", true, false), Some(DOCUMENT_MISSING));
        assert_eq!(validate_kyc("home", "work", true, true), None);
    }
}
