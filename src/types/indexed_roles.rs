use super::role_registry::RoleRegistry;

/// A role set pre-resolved against a compiled rule's [`RoleRegistry`].
///
/// Created via [`RolesBuilder`], which is obtained from
/// [`RoleRule::roles_builder()`](super::RoleRule::roles_builder).
#[derive(Debug, Clone)]
pub struct IndexedRoles {
    granted: Vec<bool>,
}

impl IndexedRoles {
    /// Whether the role at `slot` is granted. Out-of-range slots are not.
    #[inline]
    #[must_use]
    pub fn is_granted(&self, slot: usize) -> bool {
        self.granted.get(slot).copied().unwrap_or(false)
    }

    /// Number of granted slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.granted.iter().filter(|g| **g).count()
    }
}

/// Builder for an [`IndexedRoles`].
///
/// Roles the compiled rule never references are silently ignored, since
/// they cannot affect its result.
#[derive(Debug)]
pub struct RolesBuilder<'a> {
    registry: &'a RoleRegistry,
    granted: Vec<bool>,
}

impl<'a> RolesBuilder<'a> {
    pub(crate) fn new(registry: &'a RoleRegistry) -> Self {
        Self {
            registry,
            granted: vec![false; registry.len()],
        }
    }

    #[must_use]
    pub fn grant(mut self, role: &str) -> Self {
        self.insert(role);
        self
    }

    /// Grant a role (mutable reference version).
    pub fn insert(&mut self, role: &str) {
        if let Some(slot) = self.registry.get(role) {
            self.granted[slot] = true;
        }
    }

    /// Grant every role yielded by `roles`.
    #[must_use]
    pub fn grant_all<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for role in roles {
            self.insert(role.as_ref());
        }
        self
    }

    #[must_use]
    pub fn build(self) -> IndexedRoles {
        IndexedRoles {
            granted: self.granted,
        }
    }
}
