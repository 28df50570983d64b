//! Handlers for each (algorithm, function) pair of the vector files

pub mod hash;
pub mod key;
pub mod signature;
