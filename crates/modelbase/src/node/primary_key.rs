use crate::prelude::*;

///
/// PrimaryKey
///
/// Primary-key metadata declared directly by an entity type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PrimaryKey {
    pub field: &'static str,
}

impl PrimaryKey {
    /// Field name that makes a type eligible for table-name generation.
    pub const GENERATING_FIELD: &'static str = "id";

    #[must_use]
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }

    #[must_use]
    /// Whether this key is the conventional `id` column.
    pub fn is_conventional_id(&self) -> bool {
        self.field == Self::GENERATING_FIELD
    }
}
