//! Shared setup for the route tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use folio::config::{
    Config, ContactConfig, FeatureConfig, ObservabilityConfig, ServerConfig, SiteConfig,
    VerificationConfig,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn create_test_config(endpoint: &str, show_projects: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        contact: ContactConfig {
            endpoint: endpoint.to_string(),
            access_key: "test-access-key".to_string(),
            subject: "Nuevo mensaje desde el portfolio".to_string(),
            timeout_secs: Some(5),
        },
        verification: VerificationConfig {
            provider: "hcaptcha".to_string(),
            site_key: "10000000-ffff-ffff-ffff-000000000001".to_string(),
            theme: "dark".to_string(),
            size: "normal".to_string(),
        },
        observability: ObservabilityConfig::default(),
        features: FeatureConfig { show_projects },
        site: SiteConfig::default(),
    }
}

pub fn create_app(config: Config) -> anyhow::Result<Router> {
    Ok(folio::app(folio::AppState::new(config)?))
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;

    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();

    Ok((status, String::from_utf8(body.to_vec())?))
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> anyhow::Result<(StatusCode, String)> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(serde_urlencoded::to_string(fields)?))?,
        )
        .await?;

    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();

    Ok((status, String::from_utf8(body.to_vec())?))
}

pub fn valid_fields(token: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("subject", "Backend project"),
        ("message", "Hola, me gustaría hablar de un proyecto."),
        ("h-captcha-response", token),
    ]
}
