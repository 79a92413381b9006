//! Variable substitutions and their structural application

use super::formula::{Atom, Formula};
use super::interner::VariableId;
use super::term::{Constant, Term, Variable};
use crate::error::GroundingError;
use std::collections::HashMap;

/// A substitution mapping variable IDs to terms
#[derive(Debug, Clone, Default)]
pub struct Substitution {
    map: HashMap<VariableId, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Build a substitution from parallel variable and value sequences
    ///
    /// Fails if the two sequences differ in length; this is a caller
    /// contract violation, not a degenerate input.
    pub fn bind(variables: &[Variable], values: &[Constant]) -> Result<Self, GroundingError> {
        if variables.len() != values.len() {
            return Err(GroundingError::BindingArityMismatch {
                variables: variables.len(),
                values: values.len(),
            });
        }
        let mut subst = Substitution::new();
        for (var, value) in variables.iter().zip(values) {
            subst.insert(*var, Term::Constant(*value));
        }
        Ok(subst)
    }

    /// Add a variable -> term mapping
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var.id, term);
    }

    /// Get the term for a variable ID, if bound
    pub fn get(&self, var_id: VariableId) -> Option<&Term> {
        self.map.get(&var_id)
    }

    /// Check if a variable ID is bound
    pub fn contains(&self, var_id: VariableId) -> bool {
        self.map.contains_key(&var_id)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no variables are bound
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// A copy of this substitution without the given variables
    ///
    /// Used when descending under a quantifier that rebinds some of them.
    pub fn without(&self, variables: &[Variable]) -> Substitution {
        let mut map = self.map.clone();
        for var in variables {
            map.remove(&var.id);
        }
        Substitution { map }
    }

    /// A copy of this substitution extended with additional bindings
    pub fn extended(&self, variables: &[Variable], values: &[Constant]) -> Result<Self, GroundingError> {
        if variables.len() != values.len() {
            return Err(GroundingError::BindingArityMismatch {
                variables: variables.len(),
                values: values.len(),
            });
        }
        let mut subst = self.clone();
        for (var, value) in variables.iter().zip(values) {
            subst.insert(*var, Term::Constant(*value));
        }
        Ok(subst)
    }
}

impl Term {
    /// Apply a substitution to this term
    pub fn substitute(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.get(v.id).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) => self.clone(),
            Term::Application(f, args) => {
                let new_args = args.iter().map(|arg| arg.substitute(subst)).collect();
                Term::Application(*f, new_args)
            }
        }
    }
}

impl Atom {
    /// Apply a substitution to this atom
    pub fn substitute(&self, subst: &Substitution) -> Atom {
        Atom {
            predicate: self.predicate,
            args: self.args.iter().map(|arg| arg.substitute(subst)).collect(),
        }
    }
}

impl Formula {
    /// Apply a substitution to this formula
    ///
    /// Bindings for a quantifier's own variables are dropped inside its
    /// body, so an outer binding never reaches a rebound occurrence.
    pub fn substitute(&self, subst: &Substitution) -> Formula {
        match self {
            Formula::Tautology => Formula::Tautology,
            Formula::Atom(atom) => Formula::Atom(atom.substitute(subst)),
            Formula::Composite(conn, subs) => Formula::Composite(
                *conn,
                subs.iter().map(|sub| sub.substitute(subst)).collect(),
            ),
            Formula::Quantified(q, vars, body) => {
                let scoped = subst.without(vars);
                Formula::Quantified(*q, vars.clone(), Box::new(body.substitute(&scoped)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::formula::PredicateSymbol;
    use crate::fol::interner::{PredicateId, SortId, VariableId};
    use crate::fol::term::Value;
    use crate::fol::interner::ConstantId;

    fn fixture() -> (Variable, Constant) {
        let sort = SortId::from_raw(0);
        let x = Variable::new(VariableId::from_raw(0), sort);
        let a = Constant::new(Value::Object(ConstantId::from_raw(0)), sort);
        (x, a)
    }

    #[test]
    fn test_bind_and_apply() {
        let (x, a) = fixture();
        let subst = Substitution::bind(&[x], &[a]).unwrap();

        let result = Term::Variable(x).substitute(&subst);
        assert_eq!(result, Term::Constant(a));
    }

    #[test]
    fn test_bind_arity_mismatch() {
        let (x, a) = fixture();
        let err = Substitution::bind(&[x], &[a, a]).unwrap_err();
        assert_eq!(
            err,
            GroundingError::BindingArityMismatch {
                variables: 1,
                values: 2
            }
        );
    }

    #[test]
    fn test_empty_binding() {
        let subst = Substitution::bind(&[], &[]).unwrap();
        assert!(subst.is_empty());
    }

    #[test]
    fn test_unbound_variable_is_untouched() {
        let (x, a) = fixture();
        let y = Variable::new(VariableId::from_raw(1), x.sort);
        let subst = Substitution::bind(&[x], &[a]).unwrap();

        assert_eq!(Term::Variable(y).substitute(&subst), Term::Variable(y));
    }

    #[test]
    fn test_quantifier_shadowing() {
        let (x, a) = fixture();
        let p = PredicateSymbol::new(PredicateId::from_raw(0), 1);
        let body = Formula::Atom(Atom::new(p, vec![Term::Variable(x)]));
        let quantified = Formula::Quantified(
            crate::fol::formula::Quantifier::Forall,
            vec![x],
            Box::new(body.clone()),
        );

        let subst = Substitution::bind(&[x], &[a]).unwrap();
        let result = quantified.substitute(&subst);

        // x is rebound by the quantifier, so the body keeps its variable
        assert_eq!(
            result,
            Formula::Quantified(
                crate::fol::formula::Quantifier::Forall,
                vec![x],
                Box::new(body)
            )
        );
    }
}
