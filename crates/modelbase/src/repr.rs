use crate::state::InstanceState;
use std::fmt;

///
/// EntityRepr
///
/// Diagnostic `<Name pk>` rendering for live entity instances. The output
/// is computed fresh on every call; for transient and pending instances it
/// embeds an in-memory handle and is not stable across runs.
///

pub trait EntityRepr {
    /// Type name of the entity, `CamelCase` as declared.
    fn entity_name(&self) -> &'static str;

    /// Current persistence status of this instance.
    fn instance_state(&self) -> InstanceState;

    /// Display adapter for logging and interactive inspection.
    fn display(&self) -> EntityDisplay<'_, Self> {
        EntityDisplay(self)
    }

    /// Rendered representation string.
    fn repr(&self) -> String {
        self.display().to_string()
    }
}

///
/// EntityDisplay
///

pub struct EntityDisplay<'a, T: EntityRepr + ?Sized>(&'a T);

impl<T: EntityRepr + ?Sized> fmt::Display for EntityDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.0.entity_name();

        match self.0.instance_state() {
            InstanceState::Transient { handle } => write!(f, "<{name} (transient {handle})>"),
            InstanceState::Pending { handle } => write!(f, "<{name} (pending {handle})>"),
            InstanceState::Persisted { identity } => write!(f, "<{name} {identity}>"),
        }
    }
}
