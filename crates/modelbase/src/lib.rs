pub mod case;
pub mod naming;
pub mod node;
pub mod registry;
pub mod repr;
pub mod state;
pub mod validate;

/// Maximum length for resolved table identifiers.
pub const MAX_TABLE_NAME_LEN: usize = 64;

use crate::{registry::RegistryError, validate::ValidateError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        case::camel_to_snake,
        node::{Def, EntityDescriptor, PrimaryKey, TableDecl},
        registry::{EntityEntry, Registry},
        repr::EntityRepr,
        state::{Identity, InstanceState, KeyValue},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    RegistryError(#[from] RegistryError),

    #[error(transparent)]
    ValidateError(#[from] ValidateError),
}
