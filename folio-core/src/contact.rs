//! Contact form validation and mailto link composition.
//!
//! Validation mirrors what the page shows inline under each field, so the
//! error display strings here are user-facing text, not developer messages.
//! A validated [`ContactMessage`] composes a `mailto:` URL that opens the
//! visitor's own mail client with subject and body prefilled.

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Per-field validation failures, worded as shown under the form fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least {MIN_MESSAGE_LEN} characters long")]
    MessageTooShort,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// Validate an email field value, returning the trimmed address.
pub fn validate_email(input: &str) -> Result<String, ContactFieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ContactFieldError::EmailRequired);
    }
    if !email_pattern().is_match(trimmed) {
        return Err(ContactFieldError::EmailInvalid);
    }
    Ok(trimmed.to_string())
}

/// Validate a message field value, returning the trimmed text.
pub fn validate_message(input: &str) -> Result<String, ContactFieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ContactFieldError::MessageRequired);
    }
    if trimmed.chars().count() < MIN_MESSAGE_LEN {
        return Err(ContactFieldError::MessageTooShort);
    }
    Ok(trimmed.to_string())
}

/// A contact form submission that already passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    email: String,
    message: String,
}

impl ContactMessage {
    /// Validate both fields (email first) and build the message.
    pub fn new(email: &str, message: &str) -> Result<Self, ContactFieldError> {
        let email = validate_email(email)?;
        let message = validate_message(message)?;
        Ok(ContactMessage { email, message })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Compose the `mailto:` URL handed to the browser.
    pub fn mailto_link(&self, recipient: &str) -> String {
        let subject = format!("Portfolio Contact Form - Message from {}", self.email);
        let body = format!("From: {}\n\nMessage:\n{}", self.email, self.message);
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&subject),
            encode_uri_component(&body)
        )
    }
}

// encodeURIComponent leaves these marks unescaped on top of alphanumerics.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way `encodeURIComponent` does.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_field_errors() {
        assert_eq!(validate_email(""), Err(ContactFieldError::EmailRequired));
        assert_eq!(validate_email("   "), Err(ContactFieldError::EmailRequired));
        assert_eq!(
            validate_email("not-an-email"),
            Err(ContactFieldError::EmailInvalid)
        );
        assert_eq!(
            validate_email("user@domain"),
            Err(ContactFieldError::EmailInvalid),
            "Domain must contain a dot"
        );
        assert_eq!(
            validate_email("user name@example.com"),
            Err(ContactFieldError::EmailInvalid)
        );
    }

    #[test]
    fn email_is_trimmed() {
        assert_eq!(
            validate_email("  jordan@example.com  ").unwrap(),
            "jordan@example.com"
        );
    }

    #[test]
    fn message_field_errors() {
        assert_eq!(validate_message(""), Err(ContactFieldError::MessageRequired));
        assert_eq!(
            validate_message("\n  \n"),
            Err(ContactFieldError::MessageRequired)
        );
        assert_eq!(
            validate_message("too short"),
            Err(ContactFieldError::MessageTooShort)
        );
        assert_eq!(validate_message("exactly 10").unwrap(), "exactly 10");
    }

    #[test]
    fn field_errors_use_form_wording() {
        assert_eq!(
            ContactFieldError::EmailRequired.to_string(),
            "Email is required"
        );
        assert_eq!(
            ContactFieldError::EmailInvalid.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ContactFieldError::MessageRequired.to_string(),
            "Message is required"
        );
        assert_eq!(
            ContactFieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn encoding_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("From: a@b.c"), "From%3A%20a%40b.c");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("a,b"), "a%2Cb");
        assert_eq!(
            encode_uri_component("keep-these_chars.safe!~*'()"),
            "keep-these_chars.safe!~*'()",
            "encodeURIComponent's unreserved marks stay literal"
        );
    }

    #[test]
    fn mailto_link_prefills_subject_and_body() {
        let msg = ContactMessage::new(
            "jordan@example.com",
            "Interested in the fire risk model.",
        )
        .unwrap();
        let link = msg.mailto_link("hello@mlfolio.dev");
        assert!(link.starts_with("mailto:hello@mlfolio.dev?subject="));
        assert!(link.contains(
            "subject=Portfolio%20Contact%20Form%20-%20Message%20from%20jordan%40example.com"
        ));
        assert!(link.ends_with(
            "&body=From%3A%20jordan%40example.com%0A%0AMessage%3A%0AInterested%20in%20the%20fire%20risk%20model."
        ));
    }

    #[test]
    fn new_validates_email_before_message() {
        assert_eq!(
            ContactMessage::new("", "short"),
            Err(ContactFieldError::EmailRequired)
        );
        assert_eq!(
            ContactMessage::new("jordan@example.com", "short"),
            Err(ContactFieldError::MessageTooShort)
        );
        let msg = ContactMessage::new(" jordan@example.com ", " hello there ").unwrap();
        assert_eq!(msg.email(), "jordan@example.com");
        assert_eq!(msg.message(), "hello there");
    }
}
