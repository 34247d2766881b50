use std::collections::HashMap;

use tracing::warn;

use super::{
    components::{Component, ComponentTable, ComponentTraits, HasArenaContainer},
    error::XsdError,
    xstypes::QName,
    ComplexTypeDefinition, Ref, Schema, SimpleTypeDefinition,
};

/// Lookup tables over a [`Schema`].
///
/// Besides lookup by name, the index keeps the extension relation as an adjacency map from each
/// base type name to the types extending it, so the type hierarchy can be walked without scanning
/// every declaration.
pub struct SchemaIndex<'s> {
    schema: &'s Schema,
    complex_types: HashMap<&'s str, Ref<ComplexTypeDefinition>>,
    simple_types: HashMap<&'s str, Ref<SimpleTypeDefinition>>,
    extensions: HashMap<&'s QName, Vec<Ref<ComplexTypeDefinition>>>,
}

impl<'s> SchemaIndex<'s> {
    pub fn new(schema: &'s Schema) -> Result<Self, XsdError> {
        if schema.complex_type_definitions.is_empty() {
            return Err(XsdError::NoComplexTypes);
        }

        let mut complex_types = HashMap::new();
        let mut extensions: HashMap<_, Vec<_>> = HashMap::new();
        for ref_ in schema.refs::<ComplexTypeDefinition>() {
            let complex_type = ref_.get(schema);
            register(&mut complex_types, &complex_type.name, ref_);
            if let Some(base) = complex_type.extension_base() {
                extensions.entry(base).or_default().push(ref_);
            }
        }

        let mut simple_types = HashMap::new();
        for ref_ in schema.refs::<SimpleTypeDefinition>() {
            register(&mut simple_types, &ref_.get(schema).name, ref_);
        }

        Ok(Self {
            schema,
            complex_types,
            simple_types,
            extensions,
        })
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn complex_type(&self, name: &str) -> Option<Ref<ComplexTypeDefinition>> {
        self.complex_types.get(name).copied()
    }

    pub fn simple_type(&self, name: &str) -> Option<Ref<SimpleTypeDefinition>> {
        self.simple_types.get(name).copied()
    }

    /// All complex types whose `<extension>` base is `base`, in declaration order.
    pub fn extensions_of(&self, base: &QName) -> &[Ref<ComplexTypeDefinition>] {
        self.extensions
            .get(base)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolves a reference against the indexed schema.
    pub fn get<R>(&self, ref_: Ref<R>) -> &'s R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        self.schema.get(ref_)
    }
}

/// Registers a named declaration; the first declaration of a name wins.
fn register<'s, R>(table: &mut HashMap<&'s str, Ref<R>>, name: &'s str, ref_: Ref<R>)
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    if table.contains_key(name) {
        warn!(name, kind = R::DISPLAY_NAME, "duplicate declaration ignored");
    } else {
        table.insert(name, ref_);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(source: &str) -> Schema {
        let doc = roxmltree::Document::parse(source).unwrap();
        crate::read_schema(&doc).unwrap()
    }

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
        <xs:complexType name="IfcDistributionElement" abstract="true">
            <xs:complexContent><xs:extension base="ifc:IfcElement"/></xs:complexContent>
        </xs:complexType>
        <xs:complexType name="IfcPipeSegment">
            <xs:complexContent><xs:extension base="ifc:IfcDistributionElement"/></xs:complexContent>
        </xs:complexType>
        <xs:complexType name="IfcWall">
            <xs:complexContent><xs:extension base="ifc:IfcElement"/></xs:complexContent>
        </xs:complexType>
        <xs:complexType name="IfcWall">
            <xs:complexContent><xs:extension base="ifc:IfcProduct"/></xs:complexContent>
        </xs:complexType>
        <xs:simpleType name="IfcWallTypeEnum">
            <xs:restriction base="xs:string"><xs:enumeration value="standard"/></xs:restriction>
        </xs:simpleType>
    </xs:schema>"#;

    #[test]
    fn looks_up_declarations_by_name() {
        let schema = schema(SCHEMA);
        let index = SchemaIndex::new(&schema).unwrap();

        let pipe = index.complex_type("IfcPipeSegment").unwrap();
        assert_eq!(index.get(pipe).name, "IfcPipeSegment");
        assert!(index.complex_type("IfcSlab").is_none());

        let wall_type = index.simple_type("IfcWallTypeEnum").unwrap();
        assert_eq!(index.get(wall_type).name, "IfcWallTypeEnum");
        assert!(index.simple_type("IfcPipeSegment").is_none());
    }

    #[test]
    fn first_duplicate_declaration_wins() {
        let schema = schema(SCHEMA);
        let index = SchemaIndex::new(&schema).unwrap();

        let wall = index.get(index.complex_type("IfcWall").unwrap());
        assert_eq!(
            wall.extension_base(),
            Some(&QName::prefixed("ifc", "IfcElement"))
        );
    }

    #[test]
    fn extensions_keep_declaration_order() {
        let schema = schema(SCHEMA);
        let index = SchemaIndex::new(&schema).unwrap();

        let names: Vec<_> = index
            .extensions_of(&QName::prefixed("ifc", "IfcElement"))
            .iter()
            .map(|&r| index.get(r).name.as_str())
            .collect();
        assert_eq!(names, ["IfcDistributionElement", "IfcWall"]);

        assert!(index
            .extensions_of(&QName::prefixed("ifc", "IfcWall"))
            .is_empty());
        // Matching is lexical: the prefix is part of the key
        assert!(index
            .extensions_of(&QName::unprefixed("IfcElement"))
            .is_empty());
    }

    #[test]
    fn requires_complex_types() {
        let schema = schema(r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"/>"#);
        assert!(matches!(
            SchemaIndex::new(&schema),
            Err(XsdError::NoComplexTypes)
        ));
    }
}
