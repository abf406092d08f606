//! SBOL3 document validators, one module per rule family.

pub mod component;
pub mod identity;
pub mod location;
pub mod sequence;
