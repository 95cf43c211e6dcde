//! Symbol table — which qualified name each simple name stands for.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::base::{QualifiedName, SimpleName};

/// Outcome of trying to claim a simple name.
#[derive(Debug, PartialEq, Eq)]
pub enum Claim<'a> {
    /// The simple name was free and is now bound to the requested name.
    Bound,
    /// The simple name was already bound to the same qualified name.
    Existing,
    /// The simple name belongs to a different qualified name.
    Taken(&'a QualifiedName),
}

impl Claim<'_> {
    /// Whether the requester may use the simple name.
    pub fn is_granted(&self) -> bool {
        !matches!(self, Claim::Taken(_))
    }
}

/// Map from simple name to the one qualified name it represents.
///
/// First claim wins: once bound, a simple name never changes owner.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    bindings: FxHashMap<SimpleName, QualifiedName>,
}

impl SymbolTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the simple name of `name` for `name`.
    pub fn claim(&mut self, name: &QualifiedName) -> Claim<'_> {
        match self.bindings.entry(name.simple_name()) {
            Entry::Vacant(slot) => {
                slot.insert(name.clone());
                Claim::Bound
            }
            Entry::Occupied(slot) if slot.get() == name => Claim::Existing,
            Entry::Occupied(slot) => Claim::Taken(slot.into_mut()),
        }
    }

    /// Look up the owner of a simple name.
    pub fn lookup(&self, simple: &str) -> Option<&QualifiedName> {
        self.bindings.get(simple)
    }

    /// Iterate over all bound qualified names, in no particular order.
    pub fn qualified_names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.bindings.values()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> QualifiedName {
        QualifiedName::parse(text).unwrap()
    }

    #[test]
    fn test_first_claim_wins() {
        let mut table = SymbolTable::new();
        assert_eq!(table.claim(&name("com.a.Foo")), Claim::Bound);
        assert_eq!(table.claim(&name("com.a.Foo")), Claim::Existing);

        let winner = name("com.a.Foo");
        assert_eq!(table.claim(&name("com.b.Foo")), Claim::Taken(&winner));
        assert_eq!(table.lookup("Foo"), Some(&winner));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_is_granted() {
        let mut table = SymbolTable::new();
        assert!(table.claim(&name("a.X")).is_granted());
        assert!(table.claim(&name("a.X")).is_granted());
        assert!(!table.claim(&name("b.X")).is_granted());
    }

    #[test]
    fn test_qualified_names() {
        let mut table = SymbolTable::new();
        table.claim(&name("a.X"));
        table.claim(&name("b.Y"));
        table.claim(&name("c.X"));

        let mut names: Vec<_> = table.qualified_names().map(|n| n.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["a.X", "b.Y"]);
    }
}
