use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use folio_contact::Web3Forms;

use crate::template::Template;

pub mod contact;
mod health;
mod index;
mod projects;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub forms: Web3Forms,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> anyhow::Result<Self> {
        let forms = Web3Forms::new(config.forms().map_err(anyhow::Error::msg)?)?;

        Ok(Self { config, forms })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/projects", get(projects::page))
        .route("/contact", post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
