use super::{
    error::XsdError,
    values::optional_attribute,
    xstypes::Sequence,
    ComplexTypeDefinition, SimpleTypeDefinition,
};
use roxmltree::Node;

/// The normalized form of a `<schema>` document.
///
/// Holds the top-level complex and simple type declarations in document order. Everything else
/// the document declares (elements, groups, attribute groups, annotations, imports) is dropped.
#[derive(Clone, Debug)]
pub struct Schema {
    pub complex_type_definitions: Sequence<ComplexTypeDefinition>,
    pub simple_type_definitions: Sequence<SimpleTypeDefinition>,

    pub target_namespace: Option<String>,
}

impl Schema {
    pub const TAG_NAME: &'static str = "schema";

    pub fn map_from_xml(schema: Node) -> Result<Self, XsdError> {
        if schema.tag_name().name() != Self::TAG_NAME {
            return Err(XsdError::NotASchema(schema.tag_name().name().to_string()));
        }

        let target_namespace = optional_attribute(schema, "targetNamespace")?;

        let mut complex_type_definitions = Sequence::new();
        let mut simple_type_definitions = Sequence::new();

        for top_level_element in schema.children().filter(|e| e.is_element()) {
            match top_level_element.tag_name().name() {
                ComplexTypeDefinition::TAG_NAME => complex_type_definitions
                    .push(ComplexTypeDefinition::map_from_xml(top_level_element)?),
                SimpleTypeDefinition::TAG_NAME => simple_type_definitions
                    .push(SimpleTypeDefinition::map_from_xml(top_level_element)?),
                // These don't take part in the type hierarchy
                _ => {}
            }
        }

        Ok(Self {
            complex_type_definitions,
            simple_type_definitions,
            target_namespace,
        })
    }
}
