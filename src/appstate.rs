use std::sync::Arc;

use crate::{templates::Renderer, utils::Data};

#[derive(Clone)]
pub struct AppState {
    pub renderer: Data<dyn Renderer>,
}

impl AppState {
    pub fn new(renderer: impl Renderer + 'static) -> Self {
        Self::from_shared(Arc::new(renderer))
    }

    pub fn from_shared(renderer: Arc<dyn Renderer>) -> Self {
        Self {
            renderer: Data::from(renderer),
        }
    }
}
