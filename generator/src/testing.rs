use ifc_xsd::{ComplexTypeDefinition, Ref, Schema, SchemaIndex};

/// Wraps `declarations` in an IFC-like `<xs:schema>` and normalizes it.
pub(crate) fn schema(declarations: &str) -> Schema {
    let source = format!(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
            xmlns:ifc="http://www.buildingsmart-tech.org/ifcXML/IFC4/final"
            targetNamespace="http://www.buildingsmart-tech.org/ifcXML/IFC4/final">
            {declarations}
        </xs:schema>"#
    );
    let doc = roxmltree::Document::parse(&source).unwrap();
    ifc_xsd::read_schema(&doc).unwrap()
}

pub(crate) fn names<'s>(
    index: &SchemaIndex<'s>,
    refs: &[Ref<ComplexTypeDefinition>],
) -> Vec<&'s str> {
    refs.iter().map(|&r| index.get(r).name.as_str()).collect()
}
