use std::{io, path::PathBuf};

use ifc_xsd::XsdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read schema from {path:?}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch schema from {url}")]
    InputFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("the schema is not well-formed XML")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid schema declaration")]
    Schema(#[from] XsdError),
    #[error("entity {0:?} has no complex type declaration")]
    UnknownEntity(String),
    #[error("predefined type {type_name:?} of entity {entity:?} has no enumeration definition")]
    MissingEnumDefinition { entity: String, type_name: String },
    #[error("failed to write {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize {path:?}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
