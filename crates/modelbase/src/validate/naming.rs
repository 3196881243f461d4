use crate::{
    MAX_TABLE_NAME_LEN,
    registry::{EntityEntry, Registry},
};
use std::collections::BTreeMap;

/// Per-entity checks: idents and resolved table names must be non-empty,
/// ASCII, and within the length cap.
pub(crate) fn validate_entry(path: &str, entry: &EntityEntry, errors: &mut Vec<String>) {
    let ident = entry.descriptor.def.ident;
    if ident.is_empty() {
        errors.push(format!("entity '{path}' has an empty ident"));
    }
    if !ident.is_ascii() {
        errors.push(format!("entity ident '{ident}' must be ASCII"));
    }

    if let Some(table) = entry.table.as_deref() {
        if table.is_empty() {
            errors.push(format!("entity '{path}' resolved an empty table name"));
        }
        if table.len() > MAX_TABLE_NAME_LEN {
            errors.push(format!(
                "table name '{table}' exceeds max length {MAX_TABLE_NAME_LEN}"
            ));
        }
        if !table.is_ascii() {
            errors.push(format!("table name '{table}' must be ASCII"));
        }
    }
}

/// Registry-wide check: resolved table names must be unique.
pub(crate) fn validate_table_naming(registry: &Registry, errors: &mut Vec<String>) {
    let mut seen = BTreeMap::<&str, &str>::new();

    for (path, entry) in registry.entries() {
        let Some(table) = entry.table.as_deref() else {
            continue;
        };

        if let Some(prev) = seen.insert(table, path) {
            errors.push(format!(
                "duplicate table name '{table}' for '{prev}' and '{path}'"
            ));
        }
    }
}
