//! Schemas, effects, and planning problems

pub mod effect;
pub mod ground;
pub mod problem;
pub mod schema;

pub use effect::Effect;
pub use ground::{
    GroundAction, GroundActionBody, GroundConstraint, GroundDifferentialBody,
    GroundDifferentialConstraint, GroundInstance, GroundReaction, GroundReactionBody,
    GroundSensor, GroundSensorBody, InstanceKey,
};
pub use problem::{Problem, State};
pub use schema::{
    Action, DifferentialConstraint, ParameterBinding, Reaction, Sensor, StateConstraint,
};
