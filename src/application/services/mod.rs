//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (ParameterStore, Confirmer)
//! but are themselves concrete structs, not traits.

mod parameter;

pub use parameter::ParameterService;
