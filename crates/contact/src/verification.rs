//! Token lifecycle of the bot-verification widget.
//!
//! The adapter never talks to a provider SDK. Callers forward widget
//! callbacks as [`WidgetEvent`]s (or through the dedicated methods), and the
//! only thing the adapter asks back from the widget is a [`Widget::reset`].

use strum::{AsRefStr, Display, EnumString};

use crate::{Error, VerificationToken};

/// Handle on the embedded widget.
pub trait Widget {
    /// Discards the current challenge and asks the widget for a new one.
    fn reset(&mut self);
}

/// Supported verification providers.
#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    #[default]
    HCaptcha,
    Turnstile,
}

impl Provider {
    /// Form field carrying the token.
    pub fn response_field(&self) -> &'static str {
        match self {
            Provider::HCaptcha => "h-captcha-response",
            Provider::Turnstile => "cf-turnstile-response",
        }
    }

    pub fn script_url(&self) -> &'static str {
        match self {
            Provider::HCaptcha => "https://js.hcaptcha.com/1/api.js",
            Provider::Turnstile => "https://challenges.cloudflare.com/turnstile/v0/api.js",
        }
    }

    /// CSS class the provider script scans for.
    pub fn widget_class(&self) -> &'static str {
        match self {
            Provider::HCaptcha => "h-captcha",
            Provider::Turnstile => "cf-turnstile",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    Verified(VerificationToken),
    Expired,
    ChallengeError,
}

/// User-visible notice left behind by an expiry or a failed challenge.
#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Notice {
    Expired,
    Error,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Expired => "La verificación ha caducado, vuelve a verificar.",
            Notice::Error => "La verificación ha fallado, inténtalo de nuevo.",
        }
    }
}

pub struct Verification<W> {
    widget: W,
    token: Option<VerificationToken>,
    notice: Option<Notice>,
}

impl<W: Widget> Verification<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            token: None,
            notice: None,
        }
    }

    pub fn handle(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Verified(token) => self.on_verified(token),
            WidgetEvent::Expired => self.on_expired(),
            WidgetEvent::ChallengeError => self.on_challenge_error(),
        }
    }

    pub fn on_verified(&mut self, token: VerificationToken) {
        self.token = Some(token);
        self.notice = None;
    }

    pub fn on_expired(&mut self) {
        tracing::debug!("verification token expired");
        self.token = None;
        self.notice = Some(Notice::Expired);
    }

    pub fn on_challenge_error(&mut self) {
        tracing::debug!("verification challenge failed");
        self.token = None;
        self.notice = Some(Notice::Error);
    }

    /// Drops the token and has the widget issue a fresh challenge.
    pub fn reset(&mut self) {
        self.token = None;
        self.widget.reset();
    }

    pub fn token(&self) -> Option<&VerificationToken> {
        self.token.as_ref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// The token an attempt may use, or the reason the attempt is blocked.
    pub fn require_token(&self) -> Result<&VerificationToken, Error> {
        match (&self.token, self.notice) {
            (Some(token), _) => Ok(token),
            (None, Some(Notice::Expired)) => Err(Error::VerificationExpired),
            (None, Some(Notice::Error)) => Err(Error::VerificationFailed),
            (None, None) => Err(Error::MissingToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingWidget(u32);

    impl Widget for CountingWidget {
        fn reset(&mut self) {
            self.0 += 1;
        }
    }

    fn token(value: &str) -> VerificationToken {
        VerificationToken::new(value).unwrap()
    }

    #[test]
    fn verified_clears_previous_notice() {
        let mut verification = Verification::new(CountingWidget::default());
        verification.on_challenge_error();
        assert_eq!(verification.notice(), Some(Notice::Error));

        verification.handle(WidgetEvent::Verified(token("abc")));
        assert_eq!(verification.notice(), None);
        assert_eq!(verification.token(), Some(&token("abc")));
    }

    #[test]
    fn expiry_blocks_until_new_token() {
        let mut verification = Verification::new(CountingWidget::default());
        verification.on_verified(token("abc"));
        verification.handle(WidgetEvent::Expired);

        assert!(verification.token().is_none());
        assert!(matches!(
            verification.require_token(),
            Err(Error::VerificationExpired)
        ));

        verification.on_verified(token("def"));
        assert!(verification.require_token().is_ok());
    }

    #[test]
    fn missing_token_without_notice() {
        let verification = Verification::new(CountingWidget::default());
        assert!(matches!(
            verification.require_token(),
            Err(Error::MissingToken)
        ));
    }

    #[test]
    fn reset_drops_token_and_resets_widget() {
        let mut verification = Verification::new(CountingWidget::default());
        verification.on_verified(token("abc"));
        verification.reset();

        assert!(verification.token().is_none());
        assert_eq!(verification.widget().0, 1);
    }

    #[test]
    fn provider_fields() {
        assert_eq!("hcaptcha".parse::<Provider>().ok(), Some(Provider::HCaptcha));
        assert_eq!(Provider::HCaptcha.response_field(), "h-captcha-response");
        assert_eq!(Provider::Turnstile.to_string(), "turnstile");
        assert_eq!("expired".parse::<Notice>().ok(), Some(Notice::Expired));
    }
}
