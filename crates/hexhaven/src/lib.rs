//! # HEXHAVEN
//!
//! A hexagonal tile world simulation.
//!
//! This crate wires the kernel ([`hexhaven_core`]) and the generator
//! ([`hexhaven_procedural`]) into a single [`Simulation`] that a host engine
//! embeds: the host owns the window and the frame loop, and calls
//! [`Simulation::update`] with elapsed wall time.
//!
//! ## Modules
//!
//! - `config`: TOML simulation configuration
//! - `systems`: the fixed-tick time system and the agent lifecycle system
//! - `simulation`: the aggregate that owns the world and runs the systems

pub mod config;
pub mod simulation;
pub mod systems;

pub use config::SimConfig;
pub use simulation::Simulation;

// Re-export the layers below for embedders.
pub use hexhaven_core as core;
pub use hexhaven_procedural as procedural;
