use axum::response::IntoResponse;

use crate::{
    content::{self, Project},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub layout: Layout,
    pub projects: &'static [Project],
}

pub async fn page(template: Template) -> impl IntoResponse {
    if !template.config().features.show_projects {
        return template.not_found();
    }

    template.render(ProjectsTemplate {
        layout: template.layout(),
        projects: content::PROJECTS,
    })
}
