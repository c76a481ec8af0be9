//! Shared test fixtures for PassGame crates.
//!
//! This crate provides small rule sets and misbehaving predicates for tests.
//! It depends on `passgame-core` only, so every other crate can pull it in
//! as a dev-dependency.
//!
//! - [`rules`] - simple password predicates and rule sets built from them
//! - [`faulty`] - predicates that error or panic
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! passgame-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use passgame_test::rules::{length_then_digit, class_chain};
//! use passgame_test::faulty::panicking;
//! ```

pub mod faulty;
pub mod rules;

pub use faulty::{panicking, unavailable};
pub use rules::{class_chain, contains, length_then_digit, min_length};
