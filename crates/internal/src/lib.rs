//! Internal utilities shared by the nemcrypt crates
//!
//! Nothing in here is part of the public API contract; it exists so the
//! arithmetic and signing crates agree on one set of constant-time helpers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
