use crate::{Error, naming::resolve_table_name, node::EntityDescriptor, validate::validate_registry};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    sync::{LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("entity '{0}' is already registered")]
    DuplicateEntity(String),
}

///
/// EntityEntry
///
/// A registered descriptor plus the table name resolved for it at insert
/// time. The resolution is never recomputed.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityEntry {
    pub descriptor: EntityDescriptor,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

///
/// Registry
///
/// Entity descriptors keyed by their fully-qualified path. A plain value,
/// so embedders and tests can run isolated instances; the process-wide
/// registry lives behind `registry_write`/`registry_read`.
///

#[derive(Debug, Default, Serialize)]
pub struct Registry {
    entities: BTreeMap<String, EntityEntry>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, resolving its table name exactly once.
    /// Ancestors take part in the decision only if already registered.
    pub fn insert(&mut self, descriptor: EntityDescriptor) -> Result<(), RegistryError> {
        let path = descriptor.def.path();
        if self.entities.contains_key(&path) {
            return Err(RegistryError::DuplicateEntity(path));
        }

        let table = resolve_table_name(&descriptor, self);
        self.entities.insert(path, EntityEntry { descriptor, table });

        Ok(())
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&EntityEntry> {
        self.entities.get(path)
    }

    #[must_use]
    pub fn descriptor(&self, path: &str) -> Option<&EntityDescriptor> {
        self.entities.get(path).map(|entry| &entry.descriptor)
    }

    #[must_use]
    /// Resolved table name for a registered entity, if any.
    pub fn table_name(&self, path: &str) -> Option<&str> {
        self.entities.get(path).and_then(|entry| entry.table.as_deref())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &EntityEntry)> {
        self.entities
            .iter()
            .map(|(path, entry)| (path.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

///
/// REGISTRY
/// the process-wide instance
///

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

static REGISTRY_VALIDATED: OnceLock<()> = OnceLock::new();

/// Acquire a write guard to the process-wide registry.
pub fn registry_write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

/// Read the process-wide registry directly, without validation.
pub fn registry_read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

/// Register an entity type with the process-wide registry.
pub fn register(descriptor: EntityDescriptor) -> Result<(), Error> {
    registry_write().insert(descriptor)?;

    Ok(())
}

/// Read the process-wide registry, validating it at most once per process.
pub fn checked_registry() -> Result<RwLockReadGuard<'static, Registry>, Error> {
    let registry = registry_read();
    if REGISTRY_VALIDATED.get().is_none() {
        validate_registry(&registry)?;
        REGISTRY_VALIDATED.set(()).ok();
    }

    Ok(registry)
}
