use std::path::{Path, PathBuf};

use ifc_xsd::QName;

/// What to do when a `PredefinedType` attribute refers to a type without enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MissingEnumAction {
    /// Abort the run.
    Deny,
    /// Log a warning and emit the entity without predefined types.
    Warn,
}

#[derive(Clone, Debug)]
pub struct CatalogOptions {
    /// Extension bases that make a complex type a root entity.
    pub allowed_bases: Vec<QName>,
    /// The prefix the schema uses to refer to its own types.
    pub namespace_prefix: String,
    pub predefined_type_attribute: String,
    pub missing_enum: MissingEnumAction,
}

pub const DEFAULT_NAMESPACE_PREFIX: &str = "ifc";
pub const DEFAULT_ROOT_BASES: [&str; 2] = ["IfcElement", "IfcSpatialStructureElement"];

impl CatalogOptions {
    /// Default options for a schema that refers to its own types with `prefix`. The default root
    /// bases are qualified with the same prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            allowed_bases: DEFAULT_ROOT_BASES
                .iter()
                .map(|base| QName::prefixed(prefix, *base))
                .collect(),
            namespace_prefix: prefix.to_string(),
            predefined_type_attribute: "PredefinedType".to_string(),
            missing_enum: MissingEnumAction::Deny,
        }
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_NAMESPACE_PREFIX)
    }
}

/// Locations of the generated artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub root_entities: PathBuf,
    pub schema: PathBuf,
    pub entity_names: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            root_entities: dir.join("ifcElements.json"),
            schema: dir.join("schema.json"),
            entity_names: dir.join("ifcEntityNames.json"),
        }
    }
}
