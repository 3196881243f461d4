//! Registry validation orchestration and shared helpers.

pub mod naming;

use crate::registry::Registry;
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Debug, ThisError)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidateError {
    pub errors: Vec<String>,
}

/// Run full registry validation in a staged, deterministic order.
pub fn validate_registry(registry: &Registry) -> Result<(), ValidateError> {
    let mut errors = Vec::new();

    // Phase 1: per-entity structural checks.
    for (path, entry) in registry.entries() {
        naming::validate_entry(path, entry, &mut errors);
    }

    // Phase 2: registry-wide invariants.
    naming::validate_table_naming(registry, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidateError { errors })
    }
}
