use super::{
    attribute_decl::AttributeDeclaration,
    components::Component,
    error::XsdError,
    values::{optional_attribute, required_attribute},
    xstypes::{NCName, QName, Sequence},
};
use roxmltree::Node;

/// A top-level `<complexType>` declaration.
///
/// Only the parts of the content model that describe the type hierarchy are kept: whether the
/// type is abstract, which type its `<complexContent>` extends, and the attributes added by that
/// extension.
#[derive(Clone, Debug)]
pub struct ComplexTypeDefinition {
    pub name: NCName,
    pub abstract_: bool,
    pub extension: Option<Extension>,
}

/// The `<complexContent><extension>` of a complex type.
#[derive(Clone, Debug)]
pub struct Extension {
    pub base: QName,
    pub attributes: Sequence<AttributeDeclaration>,
}

impl Component for ComplexTypeDefinition {
    const DISPLAY_NAME: &'static str = "ComplexTypeDefinition";
}

impl ComplexTypeDefinition {
    pub const TAG_NAME: &'static str = "complexType";

    pub(super) fn map_from_xml(complex_type: Node) -> Result<Self, XsdError> {
        debug_assert_eq!(complex_type.tag_name().name(), Self::TAG_NAME);

        let name = required_attribute(complex_type, Self::TAG_NAME, "name")?;

        // {abstract}
        //   The ·actual value· of the abstract [attribute], if present, otherwise false.
        let abstract_ = optional_attribute(complex_type, "abstract")?.unwrap_or(false);

        // A <complexContent> with a <restriction> does not extend anything.
        let extension = complex_type
            .children()
            .find(|c| c.tag_name().name() == "complexContent")
            .and_then(|complex_content| {
                complex_content
                    .children()
                    .find(|c| c.tag_name().name() == Extension::TAG_NAME)
            })
            .map(Extension::map_from_xml)
            .transpose()?;

        Ok(Self {
            name,
            abstract_,
            extension,
        })
    }

    pub fn extension_base(&self) -> Option<&QName> {
        self.extension.as_ref().map(|e| &e.base)
    }

    /// Looks up an attribute declared with `name` by this type's extension. References to global
    /// attributes never match.
    pub fn extension_attribute(&self, name: &str) -> Option<&AttributeDeclaration> {
        self.extension
            .as_ref()?
            .attributes
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
    }
}

impl Extension {
    pub const TAG_NAME: &'static str = "extension";

    fn map_from_xml(extension: Node) -> Result<Self, XsdError> {
        let base = required_attribute(extension, Self::TAG_NAME, "base")?;
        let attributes = extension
            .children()
            .filter(|c| c.tag_name().name() == AttributeDeclaration::TAG_NAME)
            .map(AttributeDeclaration::map_from_xml)
            .collect::<Result<_, _>>()?;

        Ok(Self { base, attributes })
    }
}
