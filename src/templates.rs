//! Template rendering.
//!
//! Handlers never talk to the template engine directly; they go through
//! [`Renderer`], which lets tests swap in a recorder.

use std::sync::{PoisonError, RwLock};

use axum::{
    http::request::Parts,
    response::{Html, IntoResponse, Response},
};
use tera::Tera;
use tracing::debug;

use crate::{
    configuration::TemplateSettings,
    utils::{e500, error_chain_fmt},
};

/// Combines a named template with a context mapping into an html document.
pub trait Renderer: Send + Sync {
    fn render(
        &self,
        request: &Parts,
        template: &str,
        context: &tera::Context,
    ) -> Result<Html<String>, RenderError>;
}

#[derive(thiserror::Error)]
pub enum RenderError {
    #[error("Template `{0}` not found")]
    TemplateNotFound(String),
    #[error("Template engine failure")]
    Engine(#[source] tera::Error),
}

impl std::fmt::Debug for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        match &e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::TemplateNotFound(name.clone()),
            _ => Self::Engine(e),
        }
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        e500(self)
    }
}

pub struct TeraRenderer {
    tera: RwLock<Tera>,
    reload: bool,
}

impl TeraRenderer {
    /// Loads every `*.html` file below `settings.directory`.
    ///
    /// # Errors
    ///
    /// Fails if any template does not parse.
    pub fn from_settings(settings: &TemplateSettings) -> Result<Self, RenderError> {
        let tera = Tera::new(&settings.glob())?;
        debug!(
            directory = %settings.directory,
            templates = tera.get_template_names().count(),
            "Loaded templates"
        );
        Ok(Self {
            tera: RwLock::new(tera),
            reload: settings.reload,
        })
    }

    pub fn from_tera(tera: Tera) -> Self {
        Self {
            tera: RwLock::new(tera),
            reload: false,
        }
    }
}

impl Renderer for TeraRenderer {
    fn render(
        &self,
        request: &Parts,
        template: &str,
        context: &tera::Context,
    ) -> Result<Html<String>, RenderError> {
        if self.reload {
            self.tera
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .full_reload()?;
        }

        debug!(template, uri = %request.uri, "Rendering template");
        let tera = self.tera.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Html(tera.render(template, context)?))
    }
}
