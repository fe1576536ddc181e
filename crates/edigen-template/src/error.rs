use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("template XML escape: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("xml write: {0}")]
    Io(#[from] std::io::Error),
    #[error("template has no root element")]
    EmptyDocument,
    #[error("template has no <{0}> element")]
    RepeatingTagNotFound(String),
}
