//! The declaration table of a planning language
//!
//! A [`Language`] owns the interner and every declared sort, object,
//! predicate and function, together with their typed signatures. Schemas and
//! formulas reference declarations by id; signature lookups return `None`
//! for ids this language never declared, which the grounding layer reports
//! as an undeclared-symbol defect.

use super::formula::PredicateSymbol;
use super::interner::{ConstantId, FunctionId, Interner, PredicateId, SortId, VariableId};
use super::sort::SortDomain;
use super::term::{Constant, FunctionSymbol, Value, Variable};
use crate::error::LanguageError;
use serde::{Deserialize, Serialize};

/// Typed signature of a declared function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub arguments: Vec<SortId>,
    pub result: SortId,
}

/// A typed planning language: sorts, objects, predicates, functions
#[derive(Debug, Clone, Default)]
pub struct Language {
    interner: Interner,
    /// Domain extension per sort, indexed by `SortId`
    sorts: Vec<SortDomain>,
    /// Sort of each declared object, indexed by `ConstantId`
    object_sorts: Vec<SortId>,
    /// Argument sorts per predicate, indexed by `PredicateId`
    predicate_signatures: Vec<Vec<SortId>>,
    /// Typed signature per function, indexed by `FunctionId`
    function_signatures: Vec<FunctionSignature>,
}

impl Language {
    /// Create a new empty language
    pub fn new() -> Self {
        Language::default()
    }

    /// Access the interner for name resolution
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Declare an enumerated sort with no objects yet
    pub fn sort(&mut self, name: &str) -> Result<SortId, LanguageError> {
        self.declare_sort(name, SortDomain::Objects(Vec::new()))
    }

    /// Declare an interval sort with the given bounds
    pub fn interval(&mut self, name: &str, lower: i64, upper: i64) -> Result<SortId, LanguageError> {
        self.declare_sort(name, SortDomain::Interval { lower, upper })
    }

    fn declare_sort(&mut self, name: &str, domain: SortDomain) -> Result<SortId, LanguageError> {
        if self.interner.get_sort(name).is_some() {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        let id = self.interner.intern_sort(name);
        debug_assert_eq!(id.as_u32() as usize, self.sorts.len());
        self.sorts.push(domain);
        Ok(id)
    }

    /// Update the bounds of an interval sort in place
    ///
    /// Bounds may legitimately arrive after the sort declaration itself.
    pub fn set_bounds(&mut self, sort: SortId, lower: i64, upper: i64) -> Result<(), LanguageError> {
        let domain = self
            .sorts
            .get_mut(sort.as_u32() as usize)
            .ok_or(LanguageError::UnknownSort(sort.as_u32()))?;
        match domain {
            SortDomain::Interval { .. } => {
                *domain = SortDomain::Interval { lower, upper };
                Ok(())
            }
            SortDomain::Objects(_) => Err(LanguageError::NotAnInterval(
                self.interner.resolve_sort(sort).to_string(),
            )),
        }
    }

    /// Declare an object of an enumerated sort
    pub fn constant(&mut self, name: &str, sort: SortId) -> Result<Constant, LanguageError> {
        if self.interner.get_constant(name).is_some() {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        let domain = self
            .sorts
            .get_mut(sort.as_u32() as usize)
            .ok_or(LanguageError::UnknownSort(sort.as_u32()))?;
        let objects = match domain {
            SortDomain::Objects(objects) => objects,
            SortDomain::Interval { .. } => {
                return Err(LanguageError::NotAnInterval(name.to_string()))
            }
        };
        let id = self.interner.intern_constant(name);
        objects.push(id);
        debug_assert_eq!(id.as_u32() as usize, self.object_sorts.len());
        self.object_sorts.push(sort);
        Ok(Constant::new(Value::Object(id), sort))
    }

    /// Declare a predicate with the given argument sorts
    pub fn predicate(
        &mut self,
        name: &str,
        arguments: &[SortId],
    ) -> Result<PredicateSymbol, LanguageError> {
        if self.interner.get_predicate(name).is_some() {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        let id = self.interner.intern_predicate(name);
        debug_assert_eq!(id.as_u32() as usize, self.predicate_signatures.len());
        self.predicate_signatures.push(arguments.to_vec());
        Ok(PredicateSymbol::new(id, arguments.len() as u8))
    }

    /// Declare a function with the given argument sorts and result sort
    pub fn function(
        &mut self,
        name: &str,
        arguments: &[SortId],
        result: SortId,
    ) -> Result<FunctionSymbol, LanguageError> {
        if self.interner.get_function(name).is_some() {
            return Err(LanguageError::DuplicateSymbol(name.to_string()));
        }
        let id = self.interner.intern_function(name);
        debug_assert_eq!(id.as_u32() as usize, self.function_signatures.len());
        self.function_signatures.push(FunctionSignature {
            arguments: arguments.to_vec(),
            result,
        });
        Ok(FunctionSymbol::new(id, arguments.len() as u8))
    }

    /// Get or create a typed variable (variables are not declarations)
    pub fn variable(&mut self, name: &str, sort: SortId) -> Variable {
        Variable::new(self.interner.intern_variable(name), sort)
    }

    /// Domain extension of a sort
    pub fn sort_domain(&self, sort: SortId) -> Option<&SortDomain> {
        self.sorts.get(sort.as_u32() as usize)
    }

    /// Enumerate the concrete values of a sort, in declaration order
    pub fn domain_values(&self, sort: SortId) -> Result<Vec<Constant>, LanguageError> {
        self.sort_domain(sort)
            .map(|domain| domain.values(sort))
            .ok_or(LanguageError::UnknownSort(sort.as_u32()))
    }

    /// Argument sorts of a declared predicate
    pub fn predicate_signature(&self, id: PredicateId) -> Option<&[SortId]> {
        self.predicate_signatures
            .get(id.as_u32() as usize)
            .map(Vec::as_slice)
    }

    /// Typed signature of a declared function
    pub fn function_signature(&self, id: FunctionId) -> Option<&FunctionSignature> {
        self.function_signatures.get(id.as_u32() as usize)
    }

    /// Sort of a declared object
    pub fn object_sort(&self, id: ConstantId) -> Option<SortId> {
        self.object_sorts.get(id.as_u32() as usize).copied()
    }

    /// Look up a declared object by name
    pub fn get_object(&self, name: &str) -> Option<Constant> {
        let id = self.interner.get_constant(name)?;
        let sort = self.object_sort(id)?;
        Some(Constant::new(Value::Object(id), sort))
    }

    /// Look up a declared predicate by name
    pub fn get_predicate(&self, name: &str) -> Option<PredicateSymbol> {
        let id = self.interner.get_predicate(name)?;
        let arity = self.predicate_signature(id)?.len() as u8;
        Some(PredicateSymbol::new(id, arity))
    }

    /// Look up a declared function by name
    pub fn get_function(&self, name: &str) -> Option<FunctionSymbol> {
        let id = self.interner.get_function(name)?;
        let arity = self.function_signature(id)?.arguments.len() as u8;
        Some(FunctionSymbol::new(id, arity))
    }

    /// Look up a variable by name, if it was ever created
    pub fn get_variable(&self, name: &str) -> Option<VariableId> {
        self.interner.get_variable(name)
    }
}
