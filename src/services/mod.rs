//! External collaborators.

pub mod market_data;
pub mod yahoo;
