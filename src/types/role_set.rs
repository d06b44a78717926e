use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// A set of role names a principal currently holds.
///
/// Membership is exact, case-sensitive string equality.
pub trait RoleSet {
    fn contains_role(&self, role: &str) -> bool;
}

impl<S: BuildHasher> RoleSet for HashSet<String, S> {
    fn contains_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

impl<S: BuildHasher> RoleSet for HashSet<&str, S> {
    fn contains_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

impl RoleSet for BTreeSet<String> {
    fn contains_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

impl RoleSet for BTreeSet<&str> {
    fn contains_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

impl<T: AsRef<str>> RoleSet for [T] {
    fn contains_role(&self, role: &str) -> bool {
        self.iter().any(|r| r.as_ref() == role)
    }
}

impl<T: AsRef<str>> RoleSet for Vec<T> {
    fn contains_role(&self, role: &str) -> bool {
        self.as_slice().contains_role(role)
    }
}

impl<T: AsRef<str>, const N: usize> RoleSet for [T; N] {
    fn contains_role(&self, role: &str) -> bool {
        self.as_slice().contains_role(role)
    }
}

impl<R: RoleSet + ?Sized> RoleSet for &R {
    fn contains_role(&self, role: &str) -> bool {
        (**self).contains_role(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_set_of_strings() {
        let roles: HashSet<String> = ["admin".to_owned()].into_iter().collect();
        assert!(roles.contains_role("admin"));
        assert!(!roles.contains_role("Admin"));
    }

    #[test]
    fn borrowed_sets() {
        let hs: HashSet<&str> = ["a", "b"].into_iter().collect();
        let bs: BTreeSet<&str> = ["a", "b"].into_iter().collect();
        assert!(hs.contains_role("b"));
        assert!(bs.contains_role("a"));
        assert!(!bs.contains_role("c"));
    }

    #[test]
    fn slices_and_arrays() {
        assert!(["x", "y"].contains_role("y"));
        assert!(vec!["x".to_owned()].contains_role("x"));
        let empty: [&str; 0] = [];
        assert!(!empty.contains_role("x"));
    }
}
