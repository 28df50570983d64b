//! Re-export the public surface so callers can do
//! `use crate::suites::kat::*;`.

pub mod model;
pub mod loader;
pub mod runner;
pub mod error;
pub mod dispatcher;
pub mod handlers;

pub use model::*;
pub use loader::*;
pub use runner::*;
pub use engine::*;
pub use error::*;
