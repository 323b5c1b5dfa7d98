use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use validator::Validate;

use crate::{Ack, Error, FormPayload, Provider, Result, VerificationToken};

pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Outbound side of a submission attempt.
#[async_trait]
pub trait FormsApi: Send + Sync {
    async fn submit(
        &self,
        payload: &FormPayload,
        token: Option<&VerificationToken>,
    ) -> Result<Ack>;
}

#[derive(Clone, Debug)]
pub struct Web3FormsConfig {
    pub endpoint: String,
    pub access_key: String,
    /// Used when the visitor leaves the subject blank.
    pub subject: String,
    pub provider: Provider,
    pub timeout: Option<Duration>,
}

impl Default for Web3FormsConfig {
    fn default() -> Self {
        Self {
            endpoint: WEB3FORMS_ENDPOINT.to_owned(),
            access_key: String::new(),
            subject: "New message from the portfolio".to_owned(),
            provider: Provider::default(),
            timeout: None,
        }
    }
}

#[derive(Clone)]
pub struct Web3Forms {
    client: reqwest::Client,
    config: Web3FormsConfig,
}

#[derive(Deserialize)]
struct Reply {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl Web3Forms {
    pub fn new(config: Web3FormsConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Web3FormsConfig {
        &self.config
    }

    fn fields<'a>(
        &'a self,
        payload: &'a FormPayload,
        token: &'a VerificationToken,
    ) -> [(&'a str, &'a str); 6] {
        [
            ("access_key", self.config.access_key.as_str()),
            ("subject", payload.subject_or(&self.config.subject)),
            ("name", payload.name.trim()),
            ("email", payload.email.trim()),
            ("message", payload.message.as_str()),
            (self.config.provider.response_field(), token.as_str()),
        ]
    }
}

#[async_trait]
impl FormsApi for Web3Forms {
    async fn submit(
        &self,
        payload: &FormPayload,
        token: Option<&VerificationToken>,
    ) -> Result<Ack> {
        payload.validate()?;
        let token = token.ok_or(Error::MissingToken)?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&self.fields(payload, token))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %body, "forms service rejected submission");

            return Err(Error::Transport(format!("unexpected status {status}")));
        }

        let reply: Reply = match serde_json::from_str(&body) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(err = %err, "malformed reply from forms service");
                return Err(Error::Provider(None));
            }
        };

        if !reply.success {
            return Err(Error::Provider(reply.message));
        }

        Ok(Ack {
            message: reply.message,
        })
    }
}
