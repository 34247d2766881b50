use thiserror::Error;

#[derive(Debug, Error)]
pub enum XsdError {
    /// The document root is not a `<schema>` element.
    #[error("expected a <schema> root element, found <{0}>")]
    NotASchema(String),
    /// The schema has no `<complexType>` declarations at all.
    #[error("the schema does not declare any complex types")]
    NoComplexTypes,
    #[error("<{element}> is missing the required {attribute:?} attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("invalid value for boolean: {0:?}")]
    InvalidBoolean(String),
}

impl XsdError {
    /// Whether the error means the document does not have the shape of a schema at all, as
    /// opposed to a single malformed declaration.
    pub fn is_malformed_schema(&self) -> bool {
        matches!(self, Self::NotASchema(_) | Self::NoComplexTypes)
    }
}
