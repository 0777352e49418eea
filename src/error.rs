use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShowcaseError {
    #[error("section not found: {0}")]
    SectionNotFound(String),
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("no document available")]
    NoDocument,
}
