use super::{
    error::XsdError,
    values::{optional_attribute, required_attribute},
    xstypes::{NCName, QName},
};
use roxmltree::Node;

/// An `<attribute>` declared inside a complex type's extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeDeclaration {
    /// Absent when the declaration refers to a global attribute.
    pub name: Option<NCName>,
    /// The `ref` [attribute]. The referenced declaration is not followed.
    pub ref_: Option<QName>,
    /// The `type` [attribute], absent for attributes with an anonymous simple type.
    pub type_: Option<QName>,
}

impl AttributeDeclaration {
    pub const TAG_NAME: &'static str = "attribute";

    pub(super) fn map_from_xml(attribute: Node) -> Result<Self, XsdError> {
        debug_assert_eq!(attribute.tag_name().name(), Self::TAG_NAME);

        let ref_: Option<QName> = optional_attribute(attribute, "ref")?;
        let name = match ref_ {
            Some(_) => optional_attribute(attribute, "name")?,
            None => Some(required_attribute(attribute, Self::TAG_NAME, "name")?),
        };
        let type_ = optional_attribute(attribute, "type")?;

        Ok(Self { name, ref_, type_ })
    }
}
