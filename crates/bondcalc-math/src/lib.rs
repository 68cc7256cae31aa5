//! # Bondcalc Math
//!
//! Numerical utilities for the Bondcalc fixed income analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with an explicit
//!   termination status, usable with closures or with a [`Differentiable`]
//!   value that carries its own constants.
//!
//! [`Differentiable`]: solvers::Differentiable

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_solve, Differentiable, SolverConfig, SolverResult, Termination,
    };
}

pub use error::{MathError, MathResult};
