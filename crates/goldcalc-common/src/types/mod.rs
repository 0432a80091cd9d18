//! Core data types for goldcalc

pub mod breakdown;
pub mod inputs;
