use ifc_xsd::{ComplexTypeDefinition, SchemaIndex};
use indexmap::IndexSet;

use crate::{error::CatalogError, options::CatalogOptions};

/// Resolves the values allowed for an entity's `PredefinedType` attribute.
///
/// Returns `None` if the entity's extension declares no such attribute. The attribute's type must
/// name a simple type restricted to a non-empty enumeration; its values are returned upper-cased.
pub fn resolve_predefined_type(
    index: &SchemaIndex,
    entity: &ComplexTypeDefinition,
    options: &CatalogOptions,
) -> Result<Option<IndexSet<String>>, CatalogError> {
    let Some(attribute) = entity.extension_attribute(&options.predefined_type_attribute) else {
        return Ok(None);
    };

    let type_name = attribute
        .type_
        .as_ref()
        .map(|type_| type_.strip_prefix(&options.namespace_prefix));
    let enumeration = type_name
        .as_deref()
        .and_then(|name| index.simple_type(name))
        .and_then(|simple_type| index.get(simple_type).enumeration())
        .filter(|values| !values.is_empty());

    match enumeration {
        Some(values) => Ok(Some(values.iter().map(|v| v.to_uppercase()).collect())),
        None => Err(CatalogError::MissingEnumDefinition {
            entity: entity.name.clone(),
            type_name: type_name.unwrap_or_default(),
        }),
    }
}
