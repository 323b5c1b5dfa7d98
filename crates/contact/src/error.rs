use crate::Notice;

pub const GENERIC_SEND_FAILURE: &str = "Hubo un problema al enviar tu mensaje. Inténtalo de nuevo.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("Completa la verificación antes de enviar el mensaje.")]
    MissingToken,

    #[error("{}", Notice::Expired.message())]
    VerificationExpired,

    #[error("{}", Notice::Error.message())]
    VerificationFailed,

    #[error("{}", GENERIC_SEND_FAILURE)]
    Transport(String),

    #[error("{}", .0.as_deref().unwrap_or(GENERIC_SEND_FAILURE))]
    Provider(Option<String>),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Failures detected locally, before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Validate(_)
                | Error::MissingToken
                | Error::VerificationExpired
                | Error::VerificationFailed
        )
    }

    /// Failures after which the current verification token must not be reused.
    pub fn is_token_related(&self) -> bool {
        match self {
            Error::MissingToken | Error::VerificationExpired | Error::VerificationFailed => true,
            Error::Provider(Some(message)) => {
                let message = message.to_lowercase();
                ["captcha", "verification", "verificación"]
                    .iter()
                    .any(|needle| message.contains(needle))
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
