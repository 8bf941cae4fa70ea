//! Object predicates that decide whether a rule applies.

use keeper_core::traits::ObjectView;

/// A predicate over an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Accepts every object.
    Always,
    NamePrefix {
        prefix: String,
        case_sensitive: bool,
    },
    NameSuffix {
        suffix: String,
        case_sensitive: bool,
    },
    PathPrefix {
        prefix: String,
        case_sensitive: bool,
    },
    /// Accepts when the object, or any object up its runtime parent chain,
    /// has the property set to `value`.
    Property { name: String, value: String },
    All(Vec<Matcher>),
    Any(Vec<Matcher>),
    Not(Box<Matcher>),
}

impl Matcher {
    pub fn path_prefix(prefix: impl Into<String>) -> Self {
        Matcher::PathPrefix {
            prefix: prefix.into(),
            case_sensitive: true,
        }
    }

    pub fn property(name: impl Into<String>, value: impl Into<String>) -> Self {
        Matcher::Property {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Combine matchers with `All`, collapsing the trivial cases.
    pub fn all_of(mut matchers: Vec<Matcher>) -> Self {
        match matchers.len() {
            0 => Matcher::Always,
            1 => matchers.remove(0),
            _ => Matcher::All(matchers),
        }
    }

    pub fn test(&self, object: &dyn ObjectView) -> bool {
        match self {
            Matcher::Always => true,
            Matcher::NamePrefix { prefix, case_sensitive } => {
                starts_with(object.name(), prefix, *case_sensitive)
            }
            Matcher::NameSuffix { suffix, case_sensitive } => {
                ends_with(object.name(), suffix, *case_sensitive)
            }
            Matcher::PathPrefix { prefix, case_sensitive } => {
                starts_with(object.path(), prefix, *case_sensitive)
            }
            Matcher::Property { name, value } => {
                let mut current = Some(object);
                while let Some(obj) = current {
                    if obj.property(name) == Some(value.as_str()) {
                        return true;
                    }
                    current = obj.parent();
                }
                false
            }
            Matcher::All(matchers) => matchers.iter().all(|m| m.test(object)),
            Matcher::Any(matchers) => matchers.iter().any(|m| m.test(object)),
            Matcher::Not(inner) => !inner.test(object),
        }
    }
}

pub(crate) fn starts_with(text: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        text.starts_with(prefix)
    } else {
        text.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}

pub(crate) fn ends_with(text: &str, suffix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        text.ends_with(suffix)
    } else {
        text.to_lowercase().ends_with(&suffix.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::AssetObject;

    fn texture(name: &str) -> AssetObject {
        AssetObject::new(name, format!("/Game/Env/{name}.{name}"), "Texture2D")
    }

    #[test]
    fn test_property_walks_parent_chain() {
        let base = texture("T_Base").with_property("CompressionSettings", "TC_Normalmap");
        let child = texture("T_Child")
            .with_property("CompressionSettings", "TC_Default")
            .with_parent(base);
        let matcher = Matcher::property("CompressionSettings", "TC_Normalmap");
        assert!(matcher.test(&child));
        assert!(!Matcher::property("LODGroup", "TEXTUREGROUP_UI").test(&child));
    }

    #[test]
    fn test_combinators() {
        let obj = texture("T_Wall_BC");
        let under_env = Matcher::path_prefix("/Game/Env/");
        let under_ui = Matcher::path_prefix("/Game/UI/");
        assert!(Matcher::All(vec![under_env.clone(), Matcher::Always]).test(&obj));
        assert!(Matcher::Any(vec![under_ui.clone(), under_env.clone()]).test(&obj));
        assert!(Matcher::Not(Box::new(under_ui)).test(&obj));
        assert!(Matcher::All(vec![]).test(&obj));
        assert!(!Matcher::Any(vec![]).test(&obj));
    }

    #[test]
    fn test_case_insensitive_name_matchers() {
        let obj = texture("t_wall_bc");
        let prefix = Matcher::NamePrefix {
            prefix: "T_".into(),
            case_sensitive: false,
        };
        let suffix = Matcher::NameSuffix {
            suffix: "_BC".into(),
            case_sensitive: true,
        };
        assert!(prefix.test(&obj));
        assert!(!suffix.test(&obj));
    }

    #[test]
    fn test_all_of_collapses() {
        assert_eq!(Matcher::all_of(vec![]), Matcher::Always);
        let single = Matcher::path_prefix("/Game/");
        assert_eq!(Matcher::all_of(vec![single.clone()]), single);
    }
}
