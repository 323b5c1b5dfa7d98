use axum::{extract::State, response::IntoResponse};

use crate::{
    content::{self, ContactMethod, Feature, Project, SkillCategory},
    routes::{AppState, contact::ContactForm},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub features: &'static [Feature],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub contact_methods: Vec<ContactMethod>,
    pub contact_info: &'static [&'static str],
    pub location: String,
    pub form: ContactForm,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(IndexTemplate {
        layout: template.layout(),
        headline: content::HEADLINE,
        tagline: content::TAGLINE,
        about: content::ABOUT,
        features: content::FEATURES,
        skills: content::SKILLS,
        projects: content::PROJECTS,
        contact_methods: content::contact_methods(&app.config.site),
        contact_info: content::CONTACT_INFO,
        location: app.config.site.location.to_owned(),
        form: ContactForm::idle(&app.config),
    })
}
