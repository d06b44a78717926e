use std::collections::HashMap;

/// Maps role names to dense slot indices.
///
/// Built while compiling a [`RoleRule`](super::RoleRule) by registering roles in
/// the order they first appear in the expression. Slots index into the bitmap
/// held by an [`IndexedRoles`](super::IndexedRoles).
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    slots: HashMap<String, usize>,
    names: Vec<String>,
}

impl RoleRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a role name, returning its slot. Registering a name twice
    /// returns the existing slot.
    pub(crate) fn register(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.slots.get(name) {
            return slot;
        }
        let slot = self.names.len();
        self.slots.insert(name.to_owned(), slot);
        self.names.push(name.to_owned());
        slot
    }

    /// Look up the slot for a role name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// The role registered at `slot`.
    #[must_use]
    pub fn name(&self, slot: usize) -> Option<&str> {
        self.names.get(slot).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Role names in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
