use super::{
    components::Component,
    error::XsdError,
    values::{optional_attribute, required_attribute},
    xstypes::{NCName, QName, Sequence},
};
use roxmltree::Node;

/// A top-level `<simpleType>` declaration.
#[derive(Clone, Debug)]
pub struct SimpleTypeDefinition {
    pub name: NCName,
    /// Absent for list and union types.
    pub restriction: Option<Restriction>,
}

/// The `<restriction>` of a simple type.
#[derive(Clone, Debug)]
pub struct Restriction {
    pub base: Option<QName>,
    /// The `value` of every `<enumeration>` facet, in document order.
    pub enumeration: Sequence<String>,
}

impl Component for SimpleTypeDefinition {
    const DISPLAY_NAME: &'static str = "SimpleTypeDefinition";
}

impl SimpleTypeDefinition {
    pub const TAG_NAME: &'static str = "simpleType";

    pub(super) fn map_from_xml(simple_type: Node) -> Result<Self, XsdError> {
        debug_assert_eq!(simple_type.tag_name().name(), Self::TAG_NAME);

        let name = required_attribute(simple_type, Self::TAG_NAME, "name")?;
        let restriction = simple_type
            .children()
            .find(|c| c.tag_name().name() == Restriction::TAG_NAME)
            .map(Restriction::map_from_xml)
            .transpose()?;

        Ok(Self { name, restriction })
    }

    /// The enumerated values, if this type is a restriction.
    pub fn enumeration(&self) -> Option<&[String]> {
        self.restriction.as_ref().map(|r| r.enumeration.as_slice())
    }
}

impl Restriction {
    pub const TAG_NAME: &'static str = "restriction";

    fn map_from_xml(restriction: Node) -> Result<Self, XsdError> {
        let base = optional_attribute(restriction, "base")?;
        let enumeration = restriction
            .children()
            .filter(|c| c.tag_name().name() == "enumeration")
            .map(|e| required_attribute(e, "enumeration", "value"))
            .collect::<Result<_, _>>()?;

        Ok(Self { base, enumeration })
    }
}
