//! Route handlers.

pub mod bond;
pub mod health;
