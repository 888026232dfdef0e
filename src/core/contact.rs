use urlencoding::encode;
use validator::Validate;

use crate::models::{ContactForm, FieldErrors};

/// Inline error copy, one message per field rule
pub mod messages {
    pub const NAME: &str = "Please enter your name.";
    pub const EMAIL_MISSING: &str = "Please enter your email address.";
    pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
    pub const SUBJECT: &str = "Please add a subject.";
    pub const MESSAGE: &str = "Please write a message.";
    pub const CONSENT: &str = "Please confirm you are happy to be contacted.";
}

/// Run every field rule independently and collect the results
///
/// String rules are checked on trimmed values. The email field reports a
/// missing-address message when empty and a format message otherwise.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let trimmed = form.trimmed();
    let mut errors = FieldErrors::default();

    if let Err(validation) = trimmed.validate() {
        let fields = validation.field_errors();

        if fields.contains_key("name") {
            errors.name = Some(messages::NAME.to_string());
        }
        if let Some(email_errors) = fields.get("email") {
            let missing = email_errors.iter().any(|e| e.code == "length");
            errors.email = Some(
                if missing {
                    messages::EMAIL_MISSING
                } else {
                    messages::EMAIL_INVALID
                }
                .to_string(),
            );
        }
        if fields.contains_key("subject") {
            errors.subject = Some(messages::SUBJECT.to_string());
        }
        if fields.contains_key("message") {
            errors.message = Some(messages::MESSAGE.to_string());
        }
    }

    if !form.consent {
        errors.consent = Some(messages::CONSENT.to_string());
    }

    errors
}

/// Extract the recipient address from the form's original action
///
/// A `mailto:` action contributes the address portion before any query
/// separator; anything else (including a bare `mailto:`) falls back to the
/// configured default address.
pub fn recipient_from_action(action: &str, fallback: &str) -> String {
    if let Some(rest) = action.trim().strip_prefix("mailto:") {
        let address = rest.split('?').next().unwrap_or_default();
        if !address.is_empty() {
            return address.to_string();
        }
    }

    fallback.to_string()
}

/// Build the form's submission target for the current validation outcome
///
/// Valid input yields a mailto URL carrying the trimmed fields as escaped
/// query parameters; invalid input resets the target to the bare recipient
/// link.
pub fn form_action(recipient: &str, form: &ContactForm, errors: &FieldErrors) -> String {
    if !errors.is_valid() {
        return format!("mailto:{}", recipient);
    }

    let trimmed = form.trimmed();
    format!(
        "mailto:{}?Subject={}&Name={}&Email={}&Message={}",
        recipient,
        encode(&trimmed.subject),
        encode(&trimmed.name),
        encode(&trimmed.email),
        encode(&trimmed.message),
    )
}
