//! Flattening of the extension hierarchy below a root entity.
//!
//! Root entities are expanded along one of two paths. A concrete root contributes itself followed
//! by every type below it, depth first, abstract or not ([`HierarchyExpander::expand`]). An
//! abstract root contributes only its direct extensions: a concrete one stands for itself, while an
//! abstract one is replaced by the names of *its* direct extensions, without descending further.
//!
//! The two paths disagree on deep hierarchies. Catalog consumers rely on the exact entity set this
//! produces for the IFC schema.

use ifc_xsd::{ComplexTypeDefinition, QName, Ref, SchemaIndex};

pub struct HierarchyExpander<'i, 's> {
    index: &'i SchemaIndex<'s>,
    namespace_prefix: &'i str,
}

impl<'i, 's> HierarchyExpander<'i, 's> {
    pub fn new(index: &'i SchemaIndex<'s>, namespace_prefix: &'i str) -> Self {
        Self {
            index,
            namespace_prefix,
        }
    }

    /// All types whose extension base is `prefix:type_name`, in declaration order.
    pub fn direct_children(&self, type_name: &str) -> &'i [Ref<ComplexTypeDefinition>] {
        let base = QName::prefixed(self.namespace_prefix, type_name);
        self.index.extensions_of(&base)
    }

    /// `ty` followed by the expansion of each of its direct children.
    ///
    /// The extension relation must be acyclic.
    pub fn expand(&self, ty: Ref<ComplexTypeDefinition>) -> Vec<Ref<ComplexTypeDefinition>> {
        let mut expanded = Vec::new();
        self.expand_into(ty, &mut expanded);
        expanded
    }

    fn expand_into(
        &self,
        ty: Ref<ComplexTypeDefinition>,
        expanded: &mut Vec<Ref<ComplexTypeDefinition>>,
    ) {
        expanded.push(ty);
        for &child in self.direct_children(&self.index.get(ty).name) {
            self.expand_into(child, expanded);
        }
    }

    /// The entities a root entity contributes to the catalog.
    pub fn expand_root(
        &self,
        root: Ref<ComplexTypeDefinition>,
    ) -> Vec<Ref<ComplexTypeDefinition>> {
        let root_type = self.index.get(root);
        if !root_type.abstract_ {
            return self.expand(root);
        }

        let mut expanded = Vec::new();
        for &child in self.direct_children(&root_type.name) {
            let child_type = self.index.get(child);
            if child_type.abstract_ {
                expanded.extend_from_slice(self.direct_children(&child_type.name));
            } else {
                expanded.push(child);
            }
        }
        expanded
    }
}
