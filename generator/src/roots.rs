use ifc_xsd::{ComplexTypeDefinition, QName, Ref, SchemaIndex};
use tracing::debug;

/// Selects the complex types whose `<complexContent>` extension base is one of `allowed_bases`,
/// in declaration order.
///
/// Types without complex content, or extending anything else, are skipped.
pub fn select_root_entities(
    index: &SchemaIndex,
    allowed_bases: &[QName],
) -> Vec<Ref<ComplexTypeDefinition>> {
    index
        .schema()
        .refs::<ComplexTypeDefinition>()
        .filter(|&ref_| {
            let complex_type = index.get(ref_);
            let selected = complex_type
                .extension_base()
                .is_some_and(|base| allowed_bases.contains(base));
            if selected {
                debug!(entity = complex_type.name.as_str(), "root entity");
            }
            selected
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{names, schema};

    #[test]
    fn selects_direct_extensions_of_allowed_bases() {
        let schema = schema(
            r#"
            <xs:complexType name="IfcWall">
                <xs:complexContent><xs:extension base="ifc:IfcElement"/></xs:complexContent>
            </xs:complexType>
            <xs:complexType name="IfcObject" abstract="true">
                <xs:complexContent><xs:extension base="ifc:IfcObjectDefinition"/></xs:complexContent>
            </xs:complexType>
            <xs:complexType name="IfcSite">
                <xs:complexContent>
                    <xs:extension base="ifc:IfcSpatialStructureElement"/>
                </xs:complexContent>
            </xs:complexType>
            <xs:complexType name="IfcDistributionElement" abstract="true">
                <xs:complexContent><xs:extension base="ifc:IfcElement"/></xs:complexContent>
            </xs:complexType>
            "#,
        );
        let index = SchemaIndex::new(&schema).unwrap();
        let bases = [
            QName::prefixed("ifc", "IfcElement"),
            QName::prefixed("ifc", "IfcSpatialStructureElement"),
        ];

        let roots = select_root_entities(&index, &bases);
        assert_eq!(
            names(&index, &roots),
            ["IfcWall", "IfcSite", "IfcDistributionElement"]
        );
    }

    #[test]
    fn skips_types_without_complex_content() {
        let schema = schema(
            r#"
            <xs:complexType name="IfcLengthMeasure-wrapper">
                <xs:simpleContent><xs:extension base="ifc:IfcElement"/></xs:simpleContent>
            </xs:complexType>
            <xs:complexType name="IfcWall">
                <xs:complexContent><xs:extension base="ifc:IfcElement"/></xs:complexContent>
            </xs:complexType>
            <xs:complexType name="IfcElementList">
                <xs:sequence><xs:element ref="ifc:IfcElement" maxOccurs="unbounded"/></xs:sequence>
            </xs:complexType>
            "#,
        );
        let index = SchemaIndex::new(&schema).unwrap();

        let roots = select_root_entities(&index, &[QName::prefixed("ifc", "IfcElement")]);
        assert_eq!(names(&index, &roots), ["IfcWall"]);
    }

    #[test]
    fn nothing_allowed_selects_nothing() {
        let schema = schema(
            r#"
            <xs:complexType name="IfcWall">
                <xs:complexContent><xs:extension base="ifc:IfcElement"/></xs:complexContent>
            </xs:complexType>
            "#,
        );
        let index = SchemaIndex::new(&schema).unwrap();

        assert!(select_root_entities(&index, &[]).is_empty());
    }
}
