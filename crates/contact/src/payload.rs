use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Field values assembled for one submission attempt.
#[derive(Validate, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct FormPayload {
    #[validate(
        custom(function = "not_blank", message = "El nombre es obligatorio"),
        length(max = 100, message = "El nombre es demasiado largo")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank", message = "El email es obligatorio"),
        email(message = "El email no es válido")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 150, message = "El asunto es demasiado largo"))]
    pub subject: Option<String>,
    #[validate(
        custom(function = "not_blank", message = "El mensaje es obligatorio"),
        length(max = 5000, message = "El mensaje es demasiado largo")
    )]
    pub message: String,
}

impl FormPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.message.is_empty()
            && self.subject.as_deref().unwrap_or_default().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Subject sent to the forms service, falling back to `default` when the
    /// visitor left it blank.
    pub fn subject_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.subject.as_deref().map(str::trim) {
            Some(subject) if !subject.is_empty() => subject,
            _ => default,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Opaque proof issued by the verification widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Returns `None` for blank values, which the widget submits when no
    /// challenge was completed.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }

        Some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Acknowledgment returned by the forms service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}
