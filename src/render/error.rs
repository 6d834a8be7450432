use std::fmt;

#[derive(Debug, Clone)]
pub enum RenderError {
    TemplateLoad(String),
    TemplateSyntax(String),
    TemplateRender(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateLoad(msg) => write!(f, "Template load error: {}", msg),
            RenderError::TemplateSyntax(msg) => write!(f, "Template syntax error: {}", msg),
            RenderError::TemplateRender(msg) => write!(f, "Template render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
