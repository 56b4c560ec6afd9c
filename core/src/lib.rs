//! Currency game engine: a 2×2 simultaneous game between the US and
//! India/BRICS over trade and currency policy.
//!
//! Layering, leaves first:
//!   payoff_model → intervention → solver → scenario
//! with sensitivity built on the solver.

pub mod config;
pub mod error;
pub mod intervention;
pub mod payoff_model;
pub mod rng;
pub mod scenario;
pub mod sensitivity;
pub mod solver;
pub mod types;
