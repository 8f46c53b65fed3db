use nutype::nutype;
use thiserror::Error;

/// A contact form submission exactly as received. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact form submission. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessageAuthorName(String);

/// Only checks for an `@` and a `.` somewhere in the address.
#[nutype(
    sanitize(trim),
    validate(predicate = |email| email.contains('@') && email.contains('.')),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("All fields are required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactSubmission {
    /// Checks that every field is present before looking at the email syntax,
    /// so an empty email is reported as a missing field.
    pub fn validate(self) -> Result<ContactMessage, ContactValidationError> {
        let (Ok(name), Ok(subject), Ok(content)) = (
            ContactMessageAuthorName::try_new(self.name),
            ContactMessageSubject::try_new(self.subject),
            ContactMessageContent::try_new(self.message),
        ) else {
            return Err(ContactValidationError::Required);
        };

        if self.email.trim().is_empty() {
            return Err(ContactValidationError::Required);
        }

        let email = ContactMessageAuthorEmail::try_new(self.email)
            .map_err(|_| ContactValidationError::InvalidEmail)?;

        Ok(ContactMessage {
            author: ContactMessageAuthor { name, email },
            subject,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use portfolio_utils::assert_matches;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn valid() {
        let message = submission().validate().unwrap();

        assert_eq!(*message.author.name, "Ann");
        assert_eq!(*message.author.email, "ann@example.com");
        assert_eq!(*message.subject, "Hi");
        assert_eq!(*message.content, "Hello there");
    }

    #[test]
    fn fields_are_trimmed() {
        let message = ContactSubmission {
            name: "  Ann \n".into(),
            email: "\tann@example.com ".into(),
            subject: " Hi ".into(),
            message: "\n Hello there \n".into(),
        }
        .validate()
        .unwrap();

        assert_eq!(message, submission().validate().unwrap());
    }

    #[test]
    fn missing_field() {
        let fields: [fn(&mut ContactSubmission) -> &mut String; 4] = [
            |s| &mut s.name,
            |s| &mut s.email,
            |s| &mut s.subject,
            |s| &mut s.message,
        ];

        for field in fields {
            for value in ["", "   ", "\n\t"] {
                let mut submission = submission();
                *field(&mut submission) = value.into();
                assert_matches!(submission.validate(), Err(ContactValidationError::Required));
            }
        }
    }

    #[test]
    fn all_fields_missing() {
        assert_matches!(
            ContactSubmission::default().validate(),
            Err(ContactValidationError::Required)
        );
    }

    #[test]
    fn missing_field_reported_before_invalid_email() {
        let submission = ContactSubmission {
            email: "not-an-address".into(),
            subject: "".into(),
            ..submission()
        };
        assert_matches!(submission.validate(), Err(ContactValidationError::Required));
    }

    #[test]
    fn invalid_email() {
        for email in ["ann", "ann@example", "ann.example.com", "@", "."] {
            let submission = ContactSubmission {
                email: email.into(),
                ..submission()
            };
            assert_matches!(
                submission.validate(),
                Err(ContactValidationError::InvalidEmail)
            );
        }
    }

    #[test]
    fn weak_email_check() {
        for email in ["a@.", ".@", "x.y@z", "@."] {
            let submission = ContactSubmission {
                email: email.into(),
                ..submission()
            };
            let message = submission.validate().unwrap();
            assert_eq!(*message.author.email, email);
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ContactValidationError::Required.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ContactValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
