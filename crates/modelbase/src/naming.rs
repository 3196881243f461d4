use crate::{
    case::camel_to_snake,
    node::{EntityDescriptor, TableDecl},
    registry::Registry,
};

///
/// Naming
///
/// Decides whether a table name should be generated for a registered entity
/// type, and synthesizes the name when generation is warranted.
///

/// Determine whether a table name should be generated for `entity`.
///
/// - If no type in the chain declares a name, one should be generated.
/// - A deferred declaration supplies its own value per subclass, so no
///   further generation occurs.
/// - A fixed name is reused when declared by the type itself or by an
///   unusable ancestor. A fixed name on a concrete mapped ancestor means
///   joined-table inheritance, and the descendant still gets its own name.
/// - Abstract models never have one generated.
#[must_use]
pub fn should_set_table_name(entity: &EntityDescriptor, registry: &Registry) -> bool {
    let ancestors: Vec<&EntityDescriptor> = entity
        .ancestors
        .iter()
        .filter_map(|path| registry.descriptor(path))
        .collect();

    if entity.is_abstract || !ancestors.iter().any(|base| base.mapped) {
        return false;
    }

    // Walk most-derived first, starting at the type itself. The first
    // member that declares anything settles the outcome.
    for (index, base) in std::iter::once(entity)
        .chain(ancestors.iter().copied())
        .enumerate()
    {
        match base.table {
            TableDecl::Unset => {}
            TableDecl::Deferred => return false,
            TableDecl::Fixed(_) => {
                let is_self = index == 0;

                return !(is_self || base.is_abstract || !base.mapped);
            }
        }
    }

    true
}

/// Table-name resolution hook: synthesize a snake_case name only when the
/// type itself declares a primary-key field named `id`.
#[must_use]
pub fn generated_table_name(entity: &EntityDescriptor) -> Option<String> {
    entity
        .declares_conventional_pk()
        .then(|| camel_to_snake(entity.def.ident))
}

/// Resolve the effective table name for `entity` at registration time.
///
/// A fixed declaration on the type wins outright. A deferred declaration
/// resolves per subclass outside this layer and yields nothing here.
/// Otherwise a name is generated iff the decision procedure allows it and
/// the type carries the conventional primary key.
#[must_use]
pub fn resolve_table_name(entity: &EntityDescriptor, registry: &Registry) -> Option<String> {
    match entity.table {
        TableDecl::Fixed(name) => Some(name.to_string()),
        TableDecl::Deferred => None,
        TableDecl::Unset => {
            if should_set_table_name(entity, registry) {
                generated_table_name(entity)
            } else {
                None
            }
        }
    }
}
