pub mod attribute_decl;
pub mod complex_type_def;
pub mod components;
pub mod error;
pub mod index;
pub mod schema;
pub mod simple_type_def;
pub mod xstypes;

mod values;

pub use attribute_decl::AttributeDeclaration;
pub use complex_type_def::{ComplexTypeDefinition, Extension};
pub use components::{ComponentTable, Ref};
pub use error::XsdError;
pub use index::SchemaIndex;
pub use schema::Schema;
pub use simple_type_def::{Restriction, SimpleTypeDefinition};
pub use xstypes::QName;

/// Normalizes a parsed XSD document into a [`Schema`].
pub fn read_schema(document: &roxmltree::Document) -> Result<Schema, XsdError> {
    Schema::map_from_xml(document.root_element())
}
