use serde::Serialize;

/// Context handed to the rendering collaborator for a static page
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub template: &'static str,
}

impl PageContext {
    pub fn new(template: &'static str) -> Self {
        Self { template }
    }
}
