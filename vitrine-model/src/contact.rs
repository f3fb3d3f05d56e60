use crate::error::ModelError;

/// A contact form submission.
///
/// Transient by design: it exists for the duration of one relay request
/// and nothing persists it. All three fields are required and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Presence check for the required fields.
    ///
    /// Only emptiness is validated; the email format is deliberately not
    /// inspected beyond presence.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ModelError::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(ModelError::MissingField("message"));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Wire response shared by the relay endpoint and its clients.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_submission_validates() {
        let submission =
            ContactSubmission::new("Ada", "ada@example.com", "Hello there");
        assert!(submission.validate().is_ok());
        assert!(submission.is_complete());
    }

    #[test]
    fn empty_fields_are_rejected_in_declaration_order() {
        let missing_name = ContactSubmission::new("", "a@b.c", "hi");
        assert!(matches!(
            missing_name.validate(),
            Err(ModelError::MissingField("name"))
        ));

        let missing_email = ContactSubmission::new("Ada", "", "hi");
        assert!(matches!(
            missing_email.validate(),
            Err(ModelError::MissingField("email"))
        ));

        let missing_message = ContactSubmission::new("Ada", "a@b.c", "");
        assert!(matches!(
            missing_message.validate(),
            Err(ModelError::MissingField("message"))
        ));
    }
}
