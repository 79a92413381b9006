//! Fluent/static symbol classification
//!
//! Partitions every predicate and function usage of a problem into fluent
//! (may change across states) and static (invariant) reference sets via a
//! fixpoint over three extraction passes. Fluent only grows and static only
//! shrinks over the finite reference universe, so the loop terminates after
//! at most one round per distinct reference.

use crate::error::{GroundingError, Result};
use crate::fol::{Formula, FunctionId, PredicateId, Term};
use crate::fstrips::{Effect, Problem};
use indexmap::IndexSet;

/// A predicate or function symbol, viewed uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolRef {
    Predicate(PredicateId),
    Function(FunctionId),
}

impl SymbolRef {
    fn raw_id(self) -> u32 {
        match self {
            SymbolRef::Predicate(id) => id.as_u32(),
            SymbolRef::Function(id) => id.as_u32(),
        }
    }
}

/// The unit of classification: a symbol together with the argument pattern
/// it was used with
///
/// Identity is structural, so the same usage in different schemas collapses
/// to a single reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermReference {
    pub symbol: SymbolRef,
    pub args: Vec<Term>,
}

/// The completed fluent/static partition of a problem's term references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolClassification {
    fluent_terms: IndexSet<TermReference>,
    static_terms: IndexSet<TermReference>,
}

impl SymbolClassification {
    /// Classify every term reference of the problem
    ///
    /// Runs the precondition, effect and constraint passes to a fixpoint:
    /// after each round the static set drops everything flagged fluent
    /// (fluent wins ties), and the loop stops once both set sizes are
    /// unchanged between consecutive rounds.
    pub fn classify(problem: &Problem) -> Result<SymbolClassification> {
        let mut fluent_terms = IndexSet::new();
        let mut static_terms = IndexSet::new();

        loop {
            let before = (fluent_terms.len(), static_terms.len());

            collect_read_references(problem, &mut static_terms);
            collect_effect_targets(problem, &mut fluent_terms)?;
            collect_constraint_references(problem, &mut fluent_terms);

            static_terms.retain(|r| !fluent_terms.contains(r));
            if (fluent_terms.len(), static_terms.len()) == before {
                break;
            }
        }

        let overlap = fluent_terms
            .iter()
            .filter(|r| static_terms.contains(*r))
            .count();
        if overlap > 0 {
            return Err(GroundingError::InconsistentClassification(overlap));
        }

        Ok(SymbolClassification {
            fluent_terms,
            static_terms,
        })
    }

    /// References classified as fluent
    pub fn fluent_terms(&self) -> &IndexSet<TermReference> {
        &self.fluent_terms
    }

    /// References classified as static
    pub fn static_terms(&self) -> &IndexSet<TermReference> {
        &self.static_terms
    }

    /// Every classified reference, fluent first
    pub fn all_symbols(&self) -> IndexSet<TermReference> {
        self.fluent_terms
            .iter()
            .chain(&self.static_terms)
            .cloned()
            .collect()
    }

    /// O(1) fluency test for a reference
    pub fn is_fluent(&self, reference: &TermReference) -> bool {
        self.fluent_terms.contains(reference)
    }

    /// Whether a reference was classified at all (fluent or static)
    pub fn contains(&self, reference: &TermReference) -> bool {
        self.fluent_terms.contains(reference) || self.static_terms.contains(reference)
    }

    /// Map the reference-level partition down to plain symbols, ignoring
    /// argument patterns
    ///
    /// A symbol used with several patterns can appear on both sides.
    pub fn symbols_by_kind(&self) -> (IndexSet<SymbolRef>, IndexSet<SymbolRef>) {
        let fluent = self.fluent_terms.iter().map(|r| r.symbol).collect();
        let statics = self.static_terms.iter().map(|r| r.symbol).collect();
        (fluent, statics)
    }
}

/// Precondition pass: every reference read by a precondition, condition,
/// effect guard, assignment right-hand side, observation, or dynamics term
/// is a candidate static
fn collect_read_references(problem: &Problem, out: &mut IndexSet<TermReference>) {
    for action in problem.actions.values() {
        formula_references(&action.precondition, out);
        for effect in &action.effects {
            effect_read_references(effect, out);
        }
    }
    for sensor in problem.sensors.values() {
        formula_references(&sensor.condition, out);
        atom_references(&sensor.observation.predicate, &sensor.observation.args, out);
    }
    for constraint in problem.differential_constraints.values() {
        formula_references(&constraint.condition, out);
        term_references(&constraint.variate, out);
        term_references(&constraint.ode, out);
    }
    for reaction in problem.reactions.values() {
        formula_references(&reaction.condition, out);
        effect_read_references(&reaction.effect, out);
    }
}

/// Effect pass: the target of every add, delete or assignment effect is
/// fluent; an undeclared target symbol is a fatal upstream defect
fn collect_effect_targets(problem: &Problem, out: &mut IndexSet<TermReference>) -> Result<()> {
    for action in problem.actions.values() {
        for effect in &action.effects {
            effect_target_references(problem, effect, out)?;
        }
    }
    for reaction in problem.reactions.values() {
        effect_target_references(problem, &reaction.effect, out)?;
    }
    Ok(())
}

/// Constraint pass: anything referenced by a state constraint is
/// conservatively fluent, since constraints must track current values
fn collect_constraint_references(problem: &Problem, out: &mut IndexSet<TermReference>) {
    for constraint in problem.constraints.values() {
        formula_references(&constraint.condition, out);
    }
}

fn effect_target_references(
    problem: &Problem,
    effect: &Effect,
    out: &mut IndexSet<TermReference>,
) -> Result<()> {
    let mut targets = IndexSet::new();
    effect_target_refs(effect, &mut targets);
    for reference in targets {
        check_declared(problem, reference.symbol)?;
        out.insert(reference);
    }
    Ok(())
}

/// Collect the mutation targets of an effect, recursing through universals
pub(crate) fn effect_target_refs(effect: &Effect, out: &mut IndexSet<TermReference>) {
    match effect {
        Effect::Add { atom, .. } | Effect::Delete { atom, .. } => {
            out.insert(TermReference {
                symbol: SymbolRef::Predicate(atom.predicate.id),
                args: atom.args.clone(),
            });
        }
        Effect::Assign { lhs, .. } => {
            if let Term::Application(func, args) = lhs {
                out.insert(TermReference {
                    symbol: SymbolRef::Function(func.id),
                    args: args.clone(),
                });
            }
        }
        Effect::Universal { effects, .. } => {
            for inner in effects {
                effect_target_refs(inner, out);
            }
        }
    }
}

fn check_declared(problem: &Problem, symbol: SymbolRef) -> Result<()> {
    let declared = match symbol {
        SymbolRef::Predicate(id) => problem.language.predicate_signature(id).is_some(),
        SymbolRef::Function(id) => problem.language.function_signature(id).is_some(),
    };
    if declared {
        Ok(())
    } else {
        Err(GroundingError::UndeclaredSymbol(symbol.raw_id()))
    }
}

fn effect_read_references(effect: &Effect, out: &mut IndexSet<TermReference>) {
    match effect {
        Effect::Add { condition, atom } | Effect::Delete { condition, atom } => {
            formula_references(condition, out);
            for arg in &atom.args {
                term_references(arg, out);
            }
        }
        Effect::Assign { condition, lhs, rhs } => {
            formula_references(condition, out);
            // arguments of the assignment target are reads; the target
            // itself is handled by the effect pass
            if let Term::Application(_, args) = lhs {
                for arg in args {
                    term_references(arg, out);
                }
            }
            term_references(rhs, out);
        }
        Effect::Universal { effects, .. } => {
            for inner in effects {
                effect_read_references(inner, out);
            }
        }
    }
}

/// Collect every predicate and function reference of a formula
pub(crate) fn formula_references(formula: &Formula, out: &mut IndexSet<TermReference>) {
    match formula {
        Formula::Tautology => {}
        Formula::Atom(atom) => atom_references(&atom.predicate, &atom.args, out),
        Formula::Composite(_, subs) => {
            for sub in subs {
                formula_references(sub, out);
            }
        }
        Formula::Quantified(_, _, body) => formula_references(body, out),
    }
}

/// Collect the references of an atom and of the terms inside it
pub(crate) fn atom_references(
    predicate: &crate::fol::PredicateSymbol,
    args: &[Term],
    out: &mut IndexSet<TermReference>,
) {
    out.insert(TermReference {
        symbol: SymbolRef::Predicate(predicate.id),
        args: args.to_vec(),
    });
    for arg in args {
        term_references(arg, out);
    }
}

/// Collect every function reference of a term
pub(crate) fn term_references(term: &Term, out: &mut IndexSet<TermReference>) {
    match term {
        Term::Variable(_) | Term::Constant(_) => {}
        Term::Application(func, args) => {
            out.insert(TermReference {
                symbol: SymbolRef::Function(func.id),
                args: args.clone(),
            });
            for arg in args {
                term_references(arg, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{Atom, Formula, PredicateSymbol};
    use crate::fstrips::{Action, ParameterBinding, StateConstraint};

    /// One action reading `adjacent` and toggling `occupied`
    fn toy_problem() -> Problem {
        let mut problem = Problem::new("grid", "grid-1");
        let cell = problem.language.sort("cell").unwrap();
        problem.language.constant("c1", cell).unwrap();
        problem.language.constant("c2", cell).unwrap();
        let adjacent = problem.language.predicate("adjacent", &[cell, cell]).unwrap();
        let occupied = problem.language.predicate("occupied", &[cell]).unwrap();

        let from = problem.language.variable("from", cell);
        let to = problem.language.variable("to", cell);
        let parameters =
            ParameterBinding::new(vec![from, to], problem.language.interner()).unwrap();

        problem
            .add_action(Action {
                name: "step".to_string(),
                parameters,
                precondition: Formula::and(vec![
                    Formula::Atom(Atom::new(
                        adjacent,
                        vec![Term::Variable(from), Term::Variable(to)],
                    )),
                    Formula::Atom(Atom::new(occupied, vec![Term::Variable(from)])),
                ]),
                effects: vec![
                    Effect::delete(Atom::new(occupied, vec![Term::Variable(from)])),
                    Effect::add(Atom::new(occupied, vec![Term::Variable(to)])),
                ],
            })
            .unwrap();
        problem
    }

    #[test]
    fn test_effect_targets_are_fluent() {
        let problem = toy_problem();
        let classification = SymbolClassification::classify(&problem).unwrap();

        let (fluent, statics) = classification.symbols_by_kind();
        let occupied = problem.language.get_predicate("occupied").unwrap();
        let adjacent = problem.language.get_predicate("adjacent").unwrap();

        assert!(fluent.contains(&SymbolRef::Predicate(occupied.id)));
        assert!(statics.contains(&SymbolRef::Predicate(adjacent.id)));
        assert!(!fluent.contains(&SymbolRef::Predicate(adjacent.id)));
    }

    #[test]
    fn test_partition_is_disjoint() {
        let problem = toy_problem();
        let classification = SymbolClassification::classify(&problem).unwrap();

        for reference in classification.fluent_terms() {
            assert!(!classification.static_terms().contains(reference));
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let problem = toy_problem();
        let first = SymbolClassification::classify(&problem).unwrap();
        let second = SymbolClassification::classify(&problem).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_constraint_references_are_fluent() {
        let mut problem = toy_problem();
        let adjacent = problem.language.get_predicate("adjacent").unwrap();
        let cell = problem.language.interner().get_sort("cell").unwrap();
        let x = problem.language.variable("x", cell);
        problem
            .add_constraint(StateConstraint {
                name: "self_adjacency".to_string(),
                parameters: ParameterBinding::new(vec![x], problem.language.interner()).unwrap(),
                condition: Formula::Atom(Atom::new(
                    adjacent,
                    vec![Term::Variable(x), Term::Variable(x)],
                )),
            })
            .unwrap();

        let classification = SymbolClassification::classify(&problem).unwrap();
        let (fluent, _) = classification.symbols_by_kind();
        assert!(fluent.contains(&SymbolRef::Predicate(adjacent.id)));
    }

    #[test]
    fn test_undeclared_effect_target_is_fatal() {
        let mut problem = toy_problem();
        let ghost = PredicateSymbol::new(crate::fol::PredicateId::from_raw(99), 0);
        problem
            .add_action(Action {
                name: "haunt".to_string(),
                parameters: ParameterBinding::empty(),
                precondition: Formula::Tautology,
                effects: vec![Effect::add(Atom::new(ghost, vec![]))],
            })
            .unwrap();

        let err = SymbolClassification::classify(&problem).unwrap_err();
        assert_eq!(err, GroundingError::UndeclaredSymbol(99));
    }

    #[test]
    fn test_function_assignment_target_is_fluent() {
        let mut problem = Problem::new("counters", "counters-1");
        let counter = problem.language.sort("counter").unwrap();
        problem.language.constant("k1", counter).unwrap();
        let value = problem.language.interval("value", 0, 3).unwrap();
        let val = problem.language.function("val", &[counter], value).unwrap();
        let max = problem.language.function("max", &[counter], value).unwrap();

        let c = problem.language.variable("c", counter);
        let lhs = Term::Application(val, vec![Term::Variable(c)]);
        let rhs = Term::Application(max, vec![Term::Variable(c)]);

        problem
            .add_action(Action {
                name: "reset".to_string(),
                parameters: ParameterBinding::new(vec![c], problem.language.interner()).unwrap(),
                precondition: Formula::Tautology,
                effects: vec![Effect::assign(lhs, rhs)],
            })
            .unwrap();

        let classification = SymbolClassification::classify(&problem).unwrap();
        let (fluent, statics) = classification.symbols_by_kind();
        assert!(fluent.contains(&SymbolRef::Function(val.id)));
        assert!(statics.contains(&SymbolRef::Function(max.id)));
        assert!(!fluent.contains(&SymbolRef::Function(max.id)));
    }
}
