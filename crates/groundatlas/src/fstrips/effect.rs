//! Action effects: add, delete, functional assignment, universal

use crate::fol::{Atom, Formula, Substitution, Term, Variable};
use serde::{Deserialize, Serialize};

/// A single effect of an action or reaction
///
/// Every basic effect carries a guard condition (`Formula::Tautology` for an
/// unconditional effect). `Universal` wraps a group of effects under its own
/// quantified variables; grounding flattens it into one basic effect per
/// combination of those variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Make an atom true
    Add { condition: Formula, atom: Atom },
    /// Make an atom false
    Delete { condition: Formula, atom: Atom },
    /// Assign a value to a function application
    Assign {
        condition: Formula,
        lhs: Term,
        rhs: Term,
    },
    /// Effects quantified over their own variables
    Universal {
        variables: Vec<Variable>,
        effects: Vec<Effect>,
    },
}

impl Effect {
    /// An unconditional add effect
    pub fn add(atom: Atom) -> Effect {
        Effect::Add {
            condition: Formula::Tautology,
            atom,
        }
    }

    /// An unconditional delete effect
    pub fn delete(atom: Atom) -> Effect {
        Effect::Delete {
            condition: Formula::Tautology,
            atom,
        }
    }

    /// An unconditional assignment effect
    pub fn assign(lhs: Term, rhs: Term) -> Effect {
        Effect::Assign {
            condition: Formula::Tautology,
            lhs,
            rhs,
        }
    }

    /// Apply a substitution to this effect without expanding quantifiers
    ///
    /// Bindings for a `Universal` effect's own variables are dropped inside
    /// its body; flattening happens later, during grounding.
    pub fn substitute(&self, subst: &Substitution) -> Effect {
        match self {
            Effect::Add { condition, atom } => Effect::Add {
                condition: condition.substitute(subst),
                atom: atom.substitute(subst),
            },
            Effect::Delete { condition, atom } => Effect::Delete {
                condition: condition.substitute(subst),
                atom: atom.substitute(subst),
            },
            Effect::Assign { condition, lhs, rhs } => Effect::Assign {
                condition: condition.substitute(subst),
                lhs: lhs.substitute(subst),
                rhs: rhs.substitute(subst),
            },
            Effect::Universal { variables, effects } => {
                let scoped = subst.without(variables);
                Effect::Universal {
                    variables: variables.clone(),
                    effects: effects.iter().map(|e| e.substitute(&scoped)).collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{
        Constant, ConstantId, PredicateId, PredicateSymbol, SortId, Value, VariableId,
    };

    #[test]
    fn test_substitute_through_add_effect() {
        let sort = SortId::from_raw(0);
        let x = Variable::new(VariableId::from_raw(0), sort);
        let a = Constant::new(Value::Object(ConstantId::from_raw(0)), sort);
        let p = PredicateSymbol::new(PredicateId::from_raw(0), 1);

        let effect = Effect::add(Atom::new(p, vec![Term::Variable(x)]));
        let subst = Substitution::bind(&[x], &[a]).unwrap();

        match effect.substitute(&subst) {
            Effect::Add { atom, .. } => assert_eq!(atom.args, vec![Term::Constant(a)]),
            other => panic!("expected add effect, got {:?}", other),
        }
    }

    #[test]
    fn test_universal_variables_are_scoped() {
        let sort = SortId::from_raw(0);
        let x = Variable::new(VariableId::from_raw(0), sort);
        let a = Constant::new(Value::Object(ConstantId::from_raw(0)), sort);
        let p = PredicateSymbol::new(PredicateId::from_raw(0), 1);

        let inner = Effect::add(Atom::new(p, vec![Term::Variable(x)]));
        let universal = Effect::Universal {
            variables: vec![x],
            effects: vec![inner.clone()],
        };

        let subst = Substitution::bind(&[x], &[a]).unwrap();
        match universal.substitute(&subst) {
            Effect::Universal { effects, .. } => assert_eq!(effects, vec![inner]),
            other => panic!("expected universal effect, got {:?}", other),
        }
    }
}
