//! Type reflection: the host's class hierarchy as explicit sequences.

use super::ObjectView;

/// Supplies the type chains rule resolution walks.
pub trait TypeReflection {
    /// Parent type of `type_name`, or `None` at the root.
    fn parent_type_of(&self, type_name: &str) -> Option<&str>;

    /// The object's concrete type followed by every ancestor, root last.
    fn type_chain(&self, object: &dyn ObjectView) -> Vec<String> {
        self.chain_from(object.type_name())
    }

    /// For blueprint-like objects, the chain starting at the blueprint's
    /// declared parent type. `None` for everything else.
    fn indirect_chain(&self, object: &dyn ObjectView) -> Option<Vec<String>> {
        object.blueprint_parent().map(|parent| self.chain_from(parent))
    }

    /// Walk `parent_type_of` from `start`. Stops on a repeated type so a
    /// malformed hierarchy cannot loop.
    fn chain_from(&self, start: &str) -> Vec<String> {
        let mut chain: Vec<String> = Vec::new();
        let mut current = Some(start);
        while let Some(type_name) = current {
            if chain.iter().any(|seen| seen == type_name) {
                tracing::warn!(type_name, "cycle in type hierarchy, truncating chain");
                break;
            }
            chain.push(type_name.to_string());
            current = self.parent_type_of(type_name);
        }
        chain
    }
}
