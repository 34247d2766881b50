use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::num::NonZeroU32;

use super::{ComplexTypeDefinition, Schema, SimpleTypeDefinition};

/// Trait implemented by all schema components stored in a [`Schema`].
pub trait Component {
    const DISPLAY_NAME: &'static str;
}

/// Type on which internal component traits are implemented.
///
/// This type is used to prevent leaking internal functions into the [`Component`]
pub struct ComponentTraits;

/// A component referencable via [`Ref`]. Intended for internal use.
pub trait HasArenaContainer<R: Component>: Sized {
    fn get_container(schema: &Schema) -> &[R];
}

impl HasArenaContainer<ComplexTypeDefinition> for ComponentTraits {
    fn get_container(schema: &Schema) -> &[ComplexTypeDefinition] {
        &schema.complex_type_definitions
    }
}

impl HasArenaContainer<SimpleTypeDefinition> for ComponentTraits {
    fn get_container(schema: &Schema) -> &[SimpleTypeDefinition] {
        &schema.simple_type_definitions
    }
}

/// A reference to a [`Component`] stored in a [`ComponentTable`]
pub struct Ref<R>(NonZeroU32, PhantomData<R>)
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>;

impl<R> Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    pub(super) fn from_index(index: usize) -> Self {
        let id = u32::try_from(index + 1)
            .ok()
            .and_then(NonZeroU32::new)
            .expect("Component index did not fit into 32-bit integer");
        Self(id, PhantomData)
    }

    pub(super) fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    pub fn get(self, table: &impl ComponentTable) -> &R {
        table.get(self)
    }
}

// derive(...) does not work if T itself does not derive the trait, even though it is only "used"
// in the PhantomData; hence we have to manually implement required traits for the Ref type.

impl<R> Copy for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
}

impl<R> Clone for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> fmt::Debug for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{} #{}>", R::DISPLAY_NAME, self.0)
    }
}

impl<R> PartialEq for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R> Eq for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
}

impl<R> Hash for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// An arena-like container for various [`Component`]s
pub trait ComponentTable {
    /// Retrieves a component's value by reference from this component table.
    /// This function panics if the reference does not belong to this table.
    fn get<R>(&self, ref_: Ref<R>) -> &R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>;
}

impl ComponentTable for Schema {
    fn get<R>(&self, ref_: Ref<R>) -> &R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        <ComponentTraits as HasArenaContainer<R>>::get_container(self)
            .get(ref_.index())
            .expect("Invalid component reference (out-of-bounds)")
    }
}

impl Schema {
    /// All references of one component kind, in declaration order.
    pub fn refs<R>(&self) -> impl Iterator<Item = Ref<R>>
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let len = <ComponentTraits as HasArenaContainer<R>>::get_container(self).len();
        (0..len).map(Ref::from_index)
    }
}
