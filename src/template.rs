use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use time::OffsetDateTime;

use crate::content::{self, NavLink};

pub const SERVER_ERROR_MESSAGE: &str = "Algo salió mal, inténtalo más tarde.";

/// Values shared by every page through `base.html`.
pub struct Layout {
    pub owner: String,
    pub github: String,
    pub linkedin: String,
    pub show_projects: bool,
    pub nav_links: Vec<NavLink>,
    pub year: i32,
}

pub struct Template {
    config: crate::config::Config,
}

impl Template {
    pub fn config(&self) -> &crate::config::Config {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        let show_projects = self.config.features.show_projects;

        Layout {
            owner: self.config.site.owner.to_owned(),
            github: self.config.site.github.to_owned(),
            linkedin: self.config.site.linkedin.to_owned(),
            show_projects,
            nav_links: content::nav_links(show_projects),
            year: OffsetDateTime::now_utc().year(),
        }
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    pub fn not_found(&self) -> Response {
        (
            StatusCode::NOT_FOUND,
            self.render(NotFoundTemplate {
                layout: self.layout(),
            }),
        )
            .into_response()
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            config: state.config.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}
