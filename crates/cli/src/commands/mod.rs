//! Command implementations.

pub mod edit;
pub mod inspect;
pub mod lookup;
