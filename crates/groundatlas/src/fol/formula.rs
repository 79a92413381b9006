//! Formulas over atoms: connectives, quantifiers, tautology

use super::interner::{Interner, PredicateId};
use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate symbol with arity
///
/// The full typed signature lives in the [`Language`](super::Language).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredicateSymbol {
    pub id: PredicateId,
    pub arity: u8,
}

impl PredicateSymbol {
    /// Create a new predicate symbol from an ID and arity
    pub fn new(id: PredicateId, arity: u8) -> Self {
        PredicateSymbol { id, arity }
    }

    /// Get the name of this predicate symbol from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.resolve_predicate(self.id)
    }
}

/// An atomic formula (predicate applied to terms)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: PredicateSymbol,
    pub args: Vec<Term>,
}

impl Atom {
    /// Create a new atom
    pub fn new(predicate: PredicateSymbol, args: Vec<Term>) -> Self {
        Atom { predicate, args }
    }

    /// Collect all variables in this atom
    pub fn collect_variables(&self, vars: &mut std::collections::HashSet<Variable>) {
        for arg in &self.args {
            arg.collect_variables(vars);
        }
    }

    /// Whether all arguments are ground
    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }

    /// Format this atom with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> AtomDisplay<'a> {
        AtomDisplay {
            atom: self,
            interner,
        }
    }
}

/// Logical connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
    Not,
}

/// Quantifier kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    Exists,
    Forall,
}

/// A formula of the planning language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// The trivially true formula
    Tautology,
    /// An atomic formula
    Atom(Atom),
    /// A connective applied to subformulas (`Not` takes exactly one)
    Composite(Connective, Vec<Formula>),
    /// A quantified subformula with its bound variables
    Quantified(Quantifier, Vec<Variable>, Box<Formula>),
}

impl Formula {
    /// Conjunction of the given formulas
    pub fn and(subs: Vec<Formula>) -> Formula {
        Formula::Composite(Connective::And, subs)
    }

    /// Negation of the given formula
    pub fn not(sub: Formula) -> Formula {
        Formula::Composite(Connective::Not, vec![sub])
    }

    /// Format this formula with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> FormulaDisplay<'a> {
        FormulaDisplay {
            formula: self,
            interner,
        }
    }
}

/// Display wrapper for Atom that includes an interner for name resolution
pub struct AtomDisplay<'a> {
    atom: &'a Atom,
    interner: &'a Interner,
}

impl fmt::Display for AtomDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.atom.predicate.name(self.interner))?;
        for (i, arg) in self.atom.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg.display(self.interner))?;
        }
        write!(f, ")")
    }
}

/// Display wrapper for Formula that includes an interner for name resolution
pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    interner: &'a Interner,
}

impl fmt::Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formula {
            Formula::Tautology => write!(f, "T"),
            Formula::Atom(atom) => write!(f, "{}", atom.display(self.interner)),
            Formula::Composite(conn, subs) => {
                if let (Connective::Not, [sub]) = (conn, subs.as_slice()) {
                    return write!(f, "~{}", sub.display(self.interner));
                }
                let op = match conn {
                    Connective::And => " & ",
                    Connective::Or => " | ",
                    Connective::Not => " ~ ",
                };
                write!(f, "(")?;
                for (i, sub) in subs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", op)?;
                    }
                    write!(f, "{}", sub.display(self.interner))?;
                }
                write!(f, ")")
            }
            Formula::Quantified(q, vars, body) => {
                let op = match q {
                    Quantifier::Exists => "E",
                    Quantifier::Forall => "A",
                };
                write!(f, "{} ", op)?;
                for (i, v) in vars.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", v.name(self.interner))?;
                }
                write!(f, ". {}", body.display(self.interner))
            }
        }
    }
}
