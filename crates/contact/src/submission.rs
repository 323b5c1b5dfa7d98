use validator::Validate;

use crate::{Ack, FormPayload, FormsApi, Result, Verification, VerificationToken, Widget};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Snapshot taken when an attempt starts; owned by the in-flight request.
#[derive(Clone, Debug)]
pub struct Attempt {
    pub payload: FormPayload,
    pub token: VerificationToken,
}

/// Contact form state: current field values, verification and feedback.
pub struct Submission<W> {
    fields: FormPayload,
    verification: Verification<W>,
    state: SubmissionState,
}

impl<W: Widget> Submission<W> {
    pub fn new(widget: W) -> Self {
        Self {
            fields: FormPayload::default(),
            verification: Verification::new(widget),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn fields(&self) -> &FormPayload {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormPayload {
        &mut self.fields
    }

    pub fn verification(&self) -> &Verification<W> {
        &self.verification
    }

    pub fn verification_mut(&mut self) -> &mut Verification<W> {
        &mut self.verification
    }

    /// Submit click. Returns `Ok(None)` while another attempt is in flight,
    /// and a validation error, without changing state, when the current
    /// fields or token cannot be sent.
    pub fn begin(&mut self) -> Result<Option<Attempt>> {
        if self.state == SubmissionState::Submitting {
            tracing::debug!("submission already in flight");
            return Ok(None);
        }

        let token = self.verification.require_token()?.clone();
        let payload = self.fields.clone();
        payload.validate()?;

        self.state = SubmissionState::Submitting;

        Ok(Some(Attempt { payload, token }))
    }

    /// Outcome of the in-flight attempt. Ignored when nothing is in flight.
    /// A rejected token is discarded along with its challenge.
    pub fn complete(&mut self, outcome: &Result<Ack>) {
        if self.state != SubmissionState::Submitting {
            tracing::warn!("submission outcome without an attempt in flight");
            return;
        }

        match outcome {
            Ok(_) => {
                self.fields.clear();
                self.verification.reset();
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                if err.is_token_related() {
                    self.verification.reset();
                }
                self.state = SubmissionState::Error(err.to_string());
            }
        }
    }

    /// Runs a whole attempt against `api`. `Ok(None)` means the click was
    /// ignored because an attempt is already in flight.
    pub async fn submit<A: FormsApi + ?Sized>(&mut self, api: &A) -> Result<Option<Ack>> {
        let Some(attempt) = self.begin()? else {
            return Ok(None);
        };

        let outcome = api.submit(&attempt.payload, Some(&attempt.token)).await;
        self.complete(&outcome);

        match &outcome {
            Ok(_) => tracing::info!("contact message sent"),
            Err(err) => tracing::warn!(err = %err, "contact message failed"),
        }

        outcome.map(Some)
    }
}
