use ifc_xsd::SchemaIndex;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    entity_names::EntityNameIndex,
    error::CatalogError,
    hierarchy::HierarchyExpander,
    options::{CatalogOptions, MissingEnumAction, OutputPaths},
    output::write_json,
    predefined::resolve_predefined_type,
    roots::select_root_entities,
};

/// One entry of the resolved schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_type: Option<IndexSet<String>>,
}

impl ResolvedEntity {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            predefined_type: None,
        }
    }
}

/// The three artifacts generated from one schema.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub root_entities: Vec<String>,
    pub entities: Vec<ResolvedEntity>,
    pub entity_names: EntityNameIndex,
}

impl Catalog {
    /// Builds the catalog from the schema `text` and its parsed `document`.
    pub fn build(
        text: &str,
        document: &roxmltree::Document,
        options: &CatalogOptions,
    ) -> Result<Self, CatalogError> {
        let schema = ifc_xsd::read_schema(document)?;
        let index = SchemaIndex::new(&schema)?;
        info!(
            complex_types = schema.complex_type_definitions.len(),
            simple_types = schema.simple_type_definitions.len(),
            "indexed schema"
        );

        let roots = select_root_entities(&index, &options.allowed_bases);
        info!(count = roots.len(), "selected root entities");

        let expander = HierarchyExpander::new(&index, &options.namespace_prefix);
        let mut entities: Vec<_> = roots
            .iter()
            .flat_map(|&root| expander.expand_root(root))
            .map(|entity| ResolvedEntity::new(&index.get(entity).name))
            .collect();
        resolve_predefined_types(&index, &mut entities, options)?;
        info!(count = entities.len(), "resolved entities");

        let entity_names = EntityNameIndex::build(text);
        info!(count = entity_names.len(), "indexed entity names");

        Ok(Self {
            root_entities: roots
                .iter()
                .map(|&root| index.get(root).name.clone())
                .collect(),
            entities,
            entity_names,
        })
    }

    /// Writes all artifacts, replacing existing files.
    pub fn write(&self, paths: &OutputPaths) -> Result<(), CatalogError> {
        write_json(&paths.root_entities, &self.root_entities)?;
        write_json(&paths.schema, &self.entities)?;
        write_json(&paths.entity_names, &self.entity_names)
    }
}

/// Attaches the predefined types to every entity, looking each one up by name.
fn resolve_predefined_types(
    index: &SchemaIndex,
    entities: &mut [ResolvedEntity],
    options: &CatalogOptions,
) -> Result<(), CatalogError> {
    for item in entities {
        let entity = index
            .complex_type(&item.entity)
            .map(|entity| index.get(entity))
            .ok_or_else(|| CatalogError::UnknownEntity(item.entity.clone()))?;
        if entity.abstract_ {
            debug!(entity = entity.name.as_str(), "abstract type in catalog");
        }

        match resolve_predefined_type(index, entity, options) {
            Ok(predefined_type) => item.predefined_type = predefined_type,
            Err(CatalogError::MissingEnumDefinition { entity, type_name })
                if options.missing_enum == MissingEnumAction::Warn =>
            {
                warn!(
                    entity = entity.as_str(),
                    type_name = type_name.as_str(),
                    "no enumeration definition, predefined type skipped"
                );
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
