use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use folio_contact::{
    FormPayload, Notice, Submission, SubmissionState, VerificationToken, Widget, WidgetEvent,
};
use serde::Deserialize;

use crate::{
    config::Config,
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate},
};

const SUCCESS_MESSAGE: &str = "¡Mensaje enviado!";
const SUCCESS_DESCRIPTION: &str = "Gracias por contactarme. Te responderé pronto.";
const ERROR_MESSAGE: &str = "Error al enviar";

/// Widget embed settings rendered next to the form.
pub struct WidgetEmbed {
    pub class: &'static str,
    pub script_url: &'static str,
    pub site_key: String,
    pub theme: String,
    pub size: String,
}

/// Contact form as rendered for a given submission state.
pub struct ContactForm {
    pub fields: FormPayload,
    pub status: &'static str,
    pub toast: Option<String>,
    /// Survives re-renders so the kept widget still reports it.
    pub notice: Option<Notice>,
    pub reset_widget: bool,
    pub widget: WidgetEmbed,
}

impl ContactForm {
    pub fn idle(config: &Config) -> Self {
        Self {
            fields: FormPayload::default(),
            status: "idle",
            toast: None,
            notice: None,
            reset_widget: false,
            widget: WidgetEmbed::new(config),
        }
    }
}

impl WidgetEmbed {
    fn new(config: &Config) -> Self {
        let provider = config.verification.provider().unwrap_or_default();

        Self {
            class: provider.widget_class(),
            script_url: provider.script_url(),
            site_key: config.verification.site_key.to_owned(),
            theme: config.verification.theme.to_owned(),
            size: config.verification.size.to_owned(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactForm,
}

/// Stands in for the browser widget: a reset is sent back with the response.
#[derive(Default)]
pub struct PageWidget {
    resets: u32,
}

impl Widget for PageWidget {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "h-captcha-response", alias = "cf-turnstile-response", default)]
    pub token: Option<String>,
    /// Last widget callback seen by the page: `expired` or `error`
    #[serde(default)]
    pub verification: Option<String>,
}

impl ActionInput {
    fn into_submission(self) -> Submission<PageWidget> {
        let mut submission = Submission::new(PageWidget::default());
        let subject = self.subject.trim();

        *submission.fields_mut() = FormPayload {
            name: self.name,
            email: self.email,
            subject: (!subject.is_empty()).then(|| subject.to_owned()),
            message: self.message,
        };

        let verification = submission.verification_mut();
        match self.verification.as_deref().map(str::parse::<Notice>) {
            Some(Ok(Notice::Expired)) => verification.handle(WidgetEvent::Expired),
            Some(Ok(Notice::Error)) => verification.handle(WidgetEvent::ChallengeError),
            _ => {}
        }

        if let Some(token) = self.token.and_then(VerificationToken::new) {
            verification.handle(WidgetEvent::Verified(token));
        }

        submission
    }
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let mut submission = input.into_submission();

    let toast = match submission.submit(&app.forms).await {
        Ok(_) => Some(template.to_string(ToastSuccessTemplate {
            message: SUCCESS_MESSAGE,
            description: Some(SUCCESS_DESCRIPTION),
        })),
        Err(err) => {
            if err.is_validation() {
                tracing::debug!(err = %err, "contact form rejected locally");
            }

            Some(template.to_string(ToastErrorTemplate {
                message: ERROR_MESSAGE,
                description: Some(&err.to_string()),
            }))
        }
    };

    let status = match submission.state() {
        SubmissionState::Success => "success",
        SubmissionState::Error(_) => "error",
        SubmissionState::Idle | SubmissionState::Submitting => "idle",
    };

    let verification = submission.verification();
    let form = ContactForm {
        fields: submission.fields().clone(),
        status,
        toast,
        notice: verification.notice(),
        reset_widget: verification.widget().resets > 0,
        widget: WidgetEmbed::new(template.config()),
    };

    template.render(ContactFormTemplate { form })
}
