//! Export rule definitions as a naming-conventions CSV table.
//!
//! Each row is `<Type><EnumValue>,"/Script/Engine.<Type>","<enum_value>","<prefix>","<suffix>"`,
//! the layout the engine's data-table importer expects.

use std::fmt::Write as _;

use super::definition::RuleDefinition;

/// Render one definition as a CSV row.
pub fn convention_row(definition: &RuleDefinition) -> String {
    format!(
        "{ty}{value},\"/Script/Engine.{ty}\",\"{value}\",\"{prefix}\",\"{suffix}\"",
        ty = definition.asset_type,
        value = definition.enum_value,
        prefix = definition.prefix,
        suffix = definition.suffix,
    )
}

/// Render every definition, one row per line, in input order.
pub fn conventions_to_csv(definitions: &[RuleDefinition]) -> String {
    let mut out = String::new();
    for definition in definitions {
        let _ = writeln!(out, "{}", convention_row(definition));
    }
    out
}
