//! Symbol interning for efficient comparison and compact storage
//!
//! All names in a planning language (sorts, variables, objects, predicates,
//! functions) are interned into per-namespace arenas and referenced by typed
//! ids. Ids are `Copy`, compare in O(1), and serialize as raw `u32`; full
//! name resolution happens through the owning [`Interner`], which is passed
//! through the problem context rather than held in global state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// ID for an interned sort name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortId(pub(crate) u32);

/// ID for an interned variable name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub(crate) u32);

/// ID for an interned object (constant) name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstantId(pub(crate) u32);

/// ID for an interned predicate symbol name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredicateId(pub(crate) u32);

/// ID for an interned function symbol name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub(crate) u32);

macro_rules! id_impls {
    ($name:ident, $prefix:literal) => {
        impl $name {
            /// Get the raw ID value (for debugging/serialization)
            pub fn as_u32(self) -> u32 {
                self.0
            }

            /// Create an ID from a raw u32 (for tests and error reporting)
            pub fn from_raw(id: u32) -> Self {
                $name(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                u32::deserialize(deserializer).map($name)
            }
        }
    };
}

id_impls!(SortId, "S");
id_impls!(VariableId, "V");
id_impls!(ConstantId, "C");
id_impls!(PredicateId, "P");
id_impls!(FunctionId, "F");

/// Internal string arena for a single symbol namespace
#[derive(Debug, Clone, Default)]
struct StringArena {
    /// Interned strings, indexed by ID
    strings: Vec<String>,
    /// Lookup table from string to ID
    lookup: HashMap<String, u32>,
}

impl StringArena {
    /// Intern a string, returning its ID (get-or-create)
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    /// Resolve an ID to its string
    fn resolve(&self, id: u32) -> &str {
        &self.strings[id as usize]
    }

    /// Get the ID for an already-interned string
    fn get(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    /// Number of interned strings
    fn len(&self) -> usize {
        self.strings.len()
    }
}

/// Symbol interner for a planning language
///
/// Separate arenas per namespace, so the same name can denote e.g. a sort
/// and a predicate without collision.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    sorts: StringArena,
    variables: StringArena,
    constants: StringArena,
    predicates: StringArena,
    functions: StringArena,
}

impl Interner {
    /// Create a new empty interner
    pub fn new() -> Self {
        Interner::default()
    }

    /// Intern a sort name, returning its ID (get-or-create)
    pub fn intern_sort(&mut self, name: &str) -> SortId {
        SortId(self.sorts.intern(name))
    }

    /// Resolve a sort ID to its name
    pub fn resolve_sort(&self, id: SortId) -> &str {
        self.sorts.resolve(id.0)
    }

    /// Get the ID for an already-interned sort
    pub fn get_sort(&self, name: &str) -> Option<SortId> {
        self.sorts.get(name).map(SortId)
    }

    /// Number of interned sorts
    pub fn sort_count(&self) -> usize {
        self.sorts.len()
    }

    /// Intern a variable name, returning its ID (get-or-create)
    pub fn intern_variable(&mut self, name: &str) -> VariableId {
        VariableId(self.variables.intern(name))
    }

    /// Resolve a variable ID to its name
    pub fn resolve_variable(&self, id: VariableId) -> &str {
        self.variables.resolve(id.0)
    }

    /// Get the ID for an already-interned variable
    pub fn get_variable(&self, name: &str) -> Option<VariableId> {
        self.variables.get(name).map(VariableId)
    }

    /// Number of interned variables
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Intern an object name, returning its ID (get-or-create)
    pub fn intern_constant(&mut self, name: &str) -> ConstantId {
        ConstantId(self.constants.intern(name))
    }

    /// Resolve an object ID to its name
    pub fn resolve_constant(&self, id: ConstantId) -> &str {
        self.constants.resolve(id.0)
    }

    /// Get the ID for an already-interned object
    pub fn get_constant(&self, name: &str) -> Option<ConstantId> {
        self.constants.get(name).map(ConstantId)
    }

    /// Number of interned objects
    pub fn constant_count(&self) -> usize {
        self.constants.len()
    }

    /// Intern a predicate name, returning its ID (get-or-create)
    pub fn intern_predicate(&mut self, name: &str) -> PredicateId {
        PredicateId(self.predicates.intern(name))
    }

    /// Resolve a predicate ID to its name
    pub fn resolve_predicate(&self, id: PredicateId) -> &str {
        self.predicates.resolve(id.0)
    }

    /// Get the ID for an already-interned predicate
    pub fn get_predicate(&self, name: &str) -> Option<PredicateId> {
        self.predicates.get(name).map(PredicateId)
    }

    /// Number of interned predicates
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Intern a function name, returning its ID (get-or-create)
    pub fn intern_function(&mut self, name: &str) -> FunctionId {
        FunctionId(self.functions.intern(name))
    }

    /// Resolve a function ID to its name
    pub fn resolve_function(&self, id: FunctionId) -> &str {
        self.functions.resolve(id.0)
    }

    /// Get the ID for an already-interned function
    pub fn get_function(&self, name: &str) -> Option<FunctionId> {
        self.functions.get(name).map(FunctionId)
    }

    /// Number of interned functions
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_is_get_or_create() {
        let mut interner = Interner::new();

        let x1 = interner.intern_variable("x");
        let x2 = interner.intern_variable("x");
        let y = interner.intern_variable("y");

        assert_eq!(x1, x2);
        assert_ne!(x1, y);
        assert_eq!(interner.resolve_variable(x1), "x");
        assert_eq!(interner.variable_count(), 2);
    }

    #[test]
    fn test_separate_namespaces() {
        let mut interner = Interner::new();

        let s = interner.intern_sort("block");
        let c = interner.intern_constant("block");
        let p = interner.intern_predicate("block");
        let f = interner.intern_function("block");

        assert_eq!(interner.resolve_sort(s), "block");
        assert_eq!(interner.resolve_constant(c), "block");
        assert_eq!(interner.resolve_predicate(p), "block");
        assert_eq!(interner.resolve_function(f), "block");
        assert_eq!(interner.sort_count(), 1);
        assert_eq!(interner.constant_count(), 1);
    }

    #[test]
    fn test_lookup_without_interning() {
        let mut interner = Interner::new();
        assert!(interner.get_predicate("clear").is_none());

        let p = interner.intern_predicate("clear");
        assert_eq!(interner.get_predicate("clear"), Some(p));
    }

    #[test]
    fn test_id_ordering_follows_interning_order() {
        let mut interner = Interner::new();
        let a = interner.intern_constant("a");
        let b = interner.intern_constant("b");
        assert!(a < b);
    }
}
