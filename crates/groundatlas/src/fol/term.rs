//! Terms of the typed first-order planning language

use super::interner::{ConstantId, FunctionId, Interner, SortId, VariableId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
    pub sort: SortId,
}

impl Variable {
    /// Create a new variable of the given sort
    pub fn new(id: VariableId, sort: SortId) -> Self {
        Variable { id, sort }
    }

    /// Get the name of this variable from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.resolve_variable(self.id)
    }
}

/// A concrete domain value: a declared object or an interval member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    /// A declared object of some enumerated sort
    Object(ConstantId),
    /// A member of an interval sort
    Int(i64),
}

/// A typed constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub value: Value,
    pub sort: SortId,
}

impl Constant {
    /// Create a new constant of the given sort
    pub fn new(value: Value, sort: SortId) -> Self {
        Constant { value, sort }
    }
}

/// A function symbol with arity
///
/// The full typed signature lives in the [`Language`](super::Language);
/// the symbol itself stays `Copy` for cheap embedding in terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub id: FunctionId,
    pub arity: u8,
}

impl FunctionSymbol {
    /// Create a new function symbol from an ID and arity
    pub fn new(id: FunctionId, arity: u8) -> Self {
        FunctionSymbol { id, arity }
    }

    /// Get the name of this function symbol from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.resolve_function(self.id)
    }
}

/// A term: variable, constant, or function application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Application(FunctionSymbol, Vec<Term>),
}

impl Term {
    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut std::collections::HashSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(*v);
            }
            Term::Constant(_) => {}
            Term::Application(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Whether this term contains no variables
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Application(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Format this term with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            interner,
        }
    }
}

/// Display wrapper for Term that includes an interner for name resolution
pub struct TermDisplay<'a> {
    term: &'a Term,
    interner: &'a Interner,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Term::Variable(v) => write!(f, "{}", v.name(self.interner)),
            Term::Constant(c) => match c.value {
                Value::Object(id) => write!(f, "{}", self.interner.resolve_constant(id)),
                Value::Int(n) => write!(f, "{}", n),
            },
            Term::Application(func, args) => {
                write!(f, "{}(", func.name(self.interner))?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg.display(self.interner))?;
                }
                write!(f, ")")
            }
        }
    }
}

// Raw Display shows ids (for debugging without an interner)

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v.id),
            Term::Constant(c) => match c.value {
                Value::Object(id) => write!(f, "{}", id),
                Value::Int(n) => write!(f, "{}", n),
            },
            Term::Application(func, args) => {
                write!(f, "{}(", func.id)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
