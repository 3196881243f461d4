use crate::prelude::*;

///
/// Def
///
/// Identity of a declared entity type within the host application.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,
}

impl Def {
    #[must_use]
    pub const fn new(module_path: &'static str, ident: &'static str) -> Self {
        Self { module_path, ident }
    }

    #[must_use]
    /// Fully-qualified path used as the registry key.
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}
