pub mod catalog;
pub mod entity_names;
pub mod error;
pub mod hierarchy;
pub mod input;
pub mod options;
pub mod output;
pub mod predefined;
pub mod roots;

#[cfg(test)]
mod testing;

pub use catalog::{Catalog, ResolvedEntity};
pub use entity_names::EntityNameIndex;
pub use error::CatalogError;
pub use options::{CatalogOptions, MissingEnumAction, OutputPaths};
