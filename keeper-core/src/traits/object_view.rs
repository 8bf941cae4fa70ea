//! Read-only view of a host object, as seen by naming rules.

/// The parts of a host object that matchers and validation actions inspect.
pub trait ObjectView {
    /// Short object name (`T_Wall_BC`).
    fn name(&self) -> &str;

    /// Full object path (`/Game/Env/T_Wall_BC.T_Wall_BC`).
    fn path(&self) -> &str;

    /// Concrete type name (`Texture2D`).
    fn type_name(&self) -> &str;

    /// Value of an editor property, or `None` if the object has no such property.
    fn property(&self, name: &str) -> Option<&str>;

    /// The object's runtime parent (a material instance's parent material),
    /// distinct from its type's parent.
    fn parent(&self) -> Option<&dyn ObjectView>;

    /// For blueprint-like objects, the type the blueprint derives from.
    fn blueprint_parent(&self) -> Option<&str> {
        None
    }
}
