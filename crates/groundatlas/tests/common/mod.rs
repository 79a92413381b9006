//! Shared problem fixtures for the grounding tests
#![allow(dead_code)]

use groundatlas::{
    Action, Atom, DifferentialConstraint, Effect, Formula, ParameterBinding, Problem, Reaction,
    Sensor, Term,
};

/// Four-block blocks world over a six-element `place` sort (four blocks,
/// the table, and the gripper). Four action schemas whose groundings sum
/// to 84; no state constraints.
pub fn four_blocks() -> Problem {
    let mut problem = Problem::new("blocksworld", "four-blocks");

    let place = problem.language.sort("place").unwrap();
    for name in ["b1", "b2", "b3", "b4", "table", "hand"] {
        problem.language.constant(name, place).unwrap();
    }
    let clear = problem.language.predicate("clear", &[place]).unwrap();
    let loc = problem.language.function("loc", &[place], place).unwrap();

    let x = problem.language.variable("x", place);
    let y = problem.language.variable("y", place);
    let hand = Term::Constant(problem.language.get_object("hand").unwrap());
    let table = Term::Constant(problem.language.get_object("table").unwrap());
    let interner = problem.language.interner().clone();

    let unary = |var| ParameterBinding::new(vec![var], &interner).unwrap();
    let binary = ParameterBinding::new(vec![x, y], &interner).unwrap();

    problem
        .add_action(Action {
            name: "pickup".to_string(),
            parameters: unary(x),
            precondition: Formula::Atom(Atom::new(clear, vec![Term::Variable(x)])),
            effects: vec![
                Effect::assign(
                    Term::Application(loc, vec![Term::Variable(x)]),
                    hand.clone(),
                ),
                Effect::delete(Atom::new(clear, vec![Term::Variable(x)])),
            ],
        })
        .unwrap();

    problem
        .add_action(Action {
            name: "putdown".to_string(),
            parameters: unary(x),
            precondition: Formula::Tautology,
            effects: vec![
                Effect::assign(
                    Term::Application(loc, vec![Term::Variable(x)]),
                    table.clone(),
                ),
                Effect::add(Atom::new(clear, vec![Term::Variable(x)])),
            ],
        })
        .unwrap();

    problem
        .add_action(Action {
            name: "stack".to_string(),
            parameters: binary.clone(),
            precondition: Formula::Atom(Atom::new(clear, vec![Term::Variable(y)])),
            effects: vec![
                Effect::assign(
                    Term::Application(loc, vec![Term::Variable(x)]),
                    Term::Variable(y),
                ),
                Effect::delete(Atom::new(clear, vec![Term::Variable(y)])),
            ],
        })
        .unwrap();

    problem
        .add_action(Action {
            name: "unstack".to_string(),
            parameters: binary,
            precondition: Formula::Atom(Atom::new(clear, vec![Term::Variable(x)])),
            effects: vec![
                Effect::assign(Term::Application(loc, vec![Term::Variable(x)]), hand),
                Effect::add(Atom::new(clear, vec![Term::Variable(y)])),
            ],
        })
        .unwrap();

    // a little initial state, for completeness
    let b1 = problem.language.get_object("b1").unwrap();
    let table_obj = problem.language.get_object("table").unwrap();
    problem.init.add(Atom::new(clear, vec![Term::Constant(b1)]));
    problem.init.set_value(
        problem.language.get_function("loc").unwrap().id,
        vec![b1],
        table_obj,
    );

    problem
}

/// Small contingent localization task: one movement action and one sensor
/// schema over four locations.
pub fn localize() -> Problem {
    let mut problem = Problem::new("localize", "localize-small");

    let location = problem.language.sort("location").unwrap();
    for name in ["l1", "l2", "l3", "l4"] {
        problem.language.constant(name, location).unwrap();
    }
    let at = problem.language.predicate("at", &[location]).unwrap();
    let obstacle = problem.language.predicate("obstacle", &[location]).unwrap();

    let from = problem.language.variable("from", location);
    let to = problem.language.variable("to", location);
    let l = problem.language.variable("l", location);
    let interner = problem.language.interner().clone();

    problem
        .add_action(Action {
            name: "move".to_string(),
            parameters: ParameterBinding::new(vec![from, to], &interner).unwrap(),
            precondition: Formula::Atom(Atom::new(at, vec![Term::Variable(from)])),
            effects: vec![
                Effect::delete(Atom::new(at, vec![Term::Variable(from)])),
                Effect::add(Atom::new(at, vec![Term::Variable(to)])),
            ],
        })
        .unwrap();

    problem
        .add_sensor(Sensor {
            name: "sense_obstacle".to_string(),
            parameters: ParameterBinding::new(vec![l], &interner).unwrap(),
            condition: Formula::Atom(Atom::new(at, vec![Term::Variable(l)])),
            observation: Atom::new(obstacle, vec![Term::Variable(l)]),
        })
        .unwrap();

    problem
}

/// Hybrid particles world: four particles, two flow schemas per axis,
/// giving eight ground differential constraints.
pub fn particles() -> Problem {
    let mut problem = Problem::new("particles", "particles-4");

    let particle = problem.language.sort("particle").unwrap();
    for name in ["p1", "p2", "p3", "p4"] {
        problem.language.constant(name, particle).unwrap();
    }
    let coord = problem.language.interval("coord", 0, 10).unwrap();
    let px = problem.language.function("x", &[particle], coord).unwrap();
    let py = problem.language.function("y", &[particle], coord).unwrap();
    let vx = problem.language.function("vx", &[particle], coord).unwrap();
    let vy = problem.language.function("vy", &[particle], coord).unwrap();

    let p = problem.language.variable("p", particle);
    let interner = problem.language.interner().clone();

    problem
        .add_differential_constraint(DifferentialConstraint {
            name: "x_flow".to_string(),
            parameters: ParameterBinding::new(vec![p], &interner).unwrap(),
            condition: Formula::Tautology,
            variate: Term::Application(px, vec![Term::Variable(p)]),
            ode: Term::Application(vx, vec![Term::Variable(p)]),
        })
        .unwrap();

    problem
        .add_differential_constraint(DifferentialConstraint {
            name: "y_flow".to_string(),
            parameters: ParameterBinding::new(vec![p], &interner).unwrap(),
            condition: Formula::Tautology,
            variate: Term::Application(py, vec![Term::Variable(p)]),
            ode: Term::Application(vy, vec![Term::Variable(p)]),
        })
        .unwrap();

    problem
}

/// Hybrid billiards world: two balls, two wall axes, one bounce reaction
/// schema, giving four ground reactions.
pub fn billiards() -> Problem {
    let mut problem = Problem::new("billiards", "billiards-2");

    let ball = problem.language.sort("ball").unwrap();
    for name in ["ball1", "ball2"] {
        problem.language.constant(name, ball).unwrap();
    }
    let axis = problem.language.sort("axis").unwrap();
    for name in ["horizontal", "vertical"] {
        problem.language.constant(name, axis).unwrap();
    }
    let touching = problem.language.predicate("touching", &[ball, axis]).unwrap();
    let rebounding = problem
        .language
        .predicate("rebounding", &[ball, axis])
        .unwrap();

    let b = problem.language.variable("b", ball);
    let a = problem.language.variable("a", axis);
    let interner = problem.language.interner().clone();

    problem
        .add_reaction(Reaction {
            name: "bounce".to_string(),
            parameters: ParameterBinding::new(vec![b, a], &interner).unwrap(),
            condition: Formula::Atom(Atom::new(
                touching,
                vec![Term::Variable(b), Term::Variable(a)],
            )),
            effect: Effect::add(Atom::new(
                rebounding,
                vec![Term::Variable(b), Term::Variable(a)],
            )),
        })
        .unwrap();

    problem
}
