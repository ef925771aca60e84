use thiserror::Error;

pub const CONTACT_EMAIL: &str = "hello@babjikilaru.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
    #[error("The message is empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(user, domain)| {
                !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            });
        if !valid || email.contains(char::is_whitespace) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }

    /// `mailto:` link that opens a draft addressed to `to`, with the sender's name
    /// in the subject and their address appended to the body.
    pub fn mailto_href(&self, to: &str) -> String {
        format!(
            "mailto:{to}?subject=Portfolio%20Contact%20from%20{}&body={}%0D%0A%0D%0AReply%20to:%20{}",
            encode_uri_component(&self.name),
            encode_uri_component(&self.message),
            encode_uri_component(&self.email),
        )
    }

    /// Validates, then builds the draft link.
    pub fn draft(&self, to: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(self.mailto_href(to))
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, byte by
/// byte over the UTF-8 encoding, like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// `tel:` link with everything but digits and `+` stripped.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-XYZ_0.9!~*'()"), "abc-XYZ_0.9!~*'()");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("line\r\nnext"), "line%0D%0Anext");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("a/b?c#d"), "a%2Fb%3Fc%23d");
    }

    #[test]
    fn test_mailto_href() {
        let f = form("Ada Lovelace", "ada@example.com", "Hi there!\nLet's talk.");
        assert_eq!(
            f.mailto_href(CONTACT_EMAIL),
            "mailto:hello@babjikilaru.com?subject=Portfolio%20Contact%20from%20Ada%20Lovelace\
             &body=Hi%20there!%0ALet's%20talk.%0D%0A%0D%0AReply%20to:%20ada%40example.com"
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(form("Ada", "ada@example.com", "hello").validate(), Ok(()));
        assert_eq!(
            form("  ", "ada@example.com", "hello").validate(),
            Err(ContactError::MissingName)
        );
        for bad in ["", "ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            assert!(
                matches!(form("Ada", bad, "hi").validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        assert_eq!(
            form("Ada", "ada@example.com", "\n").validate(),
            Err(ContactError::EmptyMessage)
        );
    }

    #[test]
    fn test_draft_requires_valid_form() {
        assert!(form("Ada", "ada@example.com", "hi").draft("me@example.com").is_ok());
        assert_eq!(
            form("", "ada@example.com", "hi").draft("me@example.com"),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn test_tel_href() {
        assert_eq!(tel_href(CONTACT_PHONE), "tel:+15551234567");
    }
}
