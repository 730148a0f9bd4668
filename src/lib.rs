//! Get, search and create AWS SSM Parameter Store values.
//!
//! Layers, innermost first: [`domain`] (parameter model), [`application`]
//! (the parameter service), [`infrastructure`] (store and terminal
//! boundaries, AWS backend, wiring), [`cli`] (arguments and dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
