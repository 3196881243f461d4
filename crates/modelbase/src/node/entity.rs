use crate::prelude::*;

///
/// EntityDescriptor
///
/// Static description of a declarative entity type, built once when the
/// type opts in to registration. The naming decision procedure is a pure
/// function over these fields; no live type reflection is involved.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityDescriptor {
    pub def: Def,

    /// Abstract models never receive a generated table name.
    pub is_abstract: bool,

    /// Whether the host framework recognizes this type as mapped to
    /// storage. Mixin helpers register with `mapped: false`.
    pub mapped: bool,

    /// Table-identifier declaration carried directly by the type itself.
    #[serde(default, skip_serializing_if = "TableDecl::is_unset")]
    pub table: TableDecl,

    /// Primary key declared directly by the type, not inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKey>,

    /// Ancestor chain, most-derived first, excluding the type itself.
    /// Entries are registry paths; unregistered paths are foreign bases
    /// and declare nothing.
    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub ancestors: &'static [&'static str],
}

impl EntityDescriptor {
    #[must_use]
    /// Whether the type itself carries a primary-key field named `id`.
    pub fn declares_conventional_pk(&self) -> bool {
        self.primary_key
            .is_some_and(|pk| pk.is_conventional_id())
    }
}

///
/// TableDecl
///
/// The three states a type's own table-identifier declaration can be in:
/// absent, computed per subclass, or fixed to a concrete name.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum TableDecl {
    #[default]
    Unset,

    /// Evaluated per subclass; suppresses generation for all descendants.
    Deferred,

    Fixed(&'static str),
}

impl TableDecl {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_optional_fields() {
        let descriptor = EntityDescriptor {
            def: Def::new("app::models", "User"),
            is_abstract: false,
            mapped: true,
            table: TableDecl::Unset,
            primary_key: None,
            ancestors: &[],
        };

        let json = serde_json::to_value(&descriptor).expect("descriptor serializes");
        let object = json.as_object().expect("descriptor is a JSON object");

        assert!(!object.contains_key("table"), "unset table decl is skipped");
        assert!(!object.contains_key("primary_key"));
        assert!(!object.contains_key("ancestors"));
        assert_eq!(object["def"]["ident"], "User");
    }

    #[test]
    fn conventional_pk_requires_the_id_field() {
        let mut descriptor = EntityDescriptor {
            def: Def::new("app::models", "User"),
            is_abstract: false,
            mapped: true,
            table: TableDecl::Unset,
            primary_key: Some(PrimaryKey::new("id")),
            ancestors: &[],
        };
        assert!(descriptor.declares_conventional_pk());

        descriptor.primary_key = Some(PrimaryKey::new("uuid"));
        assert!(!descriptor.declares_conventional_pk());

        descriptor.primary_key = None;
        assert!(!descriptor.declares_conventional_pk());
    }
}
