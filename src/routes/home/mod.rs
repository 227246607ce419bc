use axum::{
    extract::{Request, State},
    http::request::Parts,
    response::Html,
};
use tracing::instrument;

use crate::{
    appstate::AppState,
    templates::{RenderError, Renderer},
};

pub const HOME_TEMPLATE: &str = "taskmaster/home.html";

/// Everything the home page template displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeContext {
    pub title: &'static str,
    pub app_name: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub fn home_context() -> HomeContext {
    HomeContext {
        title: "TastManagement - Bienvenue",
        app_name: "TastManagement",
        description: "Application de gestion des tâches avec pipeline CI/CD",
        features: [
            "Pipeline CI/CD automatisée avec GitHub Actions",
            "Déploiement Kubernetes avec ArgoCD",
            "Base de données PostgreSQL",
            "Interface moderne et responsive",
        ],
    }
}

impl From<&HomeContext> for tera::Context {
    fn from(home: &HomeContext) -> Self {
        let mut context = tera::Context::new();
        context.insert("title", home.title);
        context.insert("app_name", home.app_name);
        context.insert("description", home.description);
        context.insert("features", &home.features);
        context
    }
}

/// Renders the home page; the request is passed through untouched.
pub fn render_home<R>(renderer: &R, request: &Parts) -> Result<Html<String>, RenderError>
where
    R: Renderer + ?Sized,
{
    let context = tera::Context::from(&home_context());
    renderer.render(request, HOME_TEMPLATE, &context)
}

#[instrument(name = "Home", skip_all)]
pub async fn home(
    State(state): State<AppState>,
    request: Request,
) -> Result<Html<String>, RenderError> {
    let (parts, _body) = request.into_parts();
    render_home(state.renderer.get_ref(), &parts)
}
